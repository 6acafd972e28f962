use crate::error::PredictError;
use crate::image_upload::SelectedImage;
use serde::{Deserialize, Serialize};

/// One item of the classification response. The service returns an ordered
/// array of these, one per model output head. `confidence` may be absent;
/// a present but non-finite value invalidates the whole response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRecord {
    pub label: String,
    pub prediction: String,
    #[serde(default)]
    pub confidence: Option<f64>,
}

pub trait PredictionApi: Send + Sync {
    fn predict(&self, upload: &SelectedImage) -> Result<Vec<PredictionRecord>, PredictError>;
}
