use crate::error::PredictError;
use crate::image_upload::SelectedImage;
use crate::prediction_api::interface::{PredictionApi, PredictionRecord};

/// Canned responses shaped like the real service: one record per model
/// output head, in the order the server emits them.
#[allow(dead_code)]
pub struct PredictionApiFake {}

impl PredictionApiFake {
    #[allow(dead_code)]
    pub fn new() -> Self {
        Self {}
    }
}

impl PredictionApi for PredictionApiFake {
    fn predict(&self, upload: &SelectedImage) -> Result<Vec<PredictionRecord>, PredictError> {
        log::info!("classifying {} with the fake prediction api", upload.name);

        let outputs = [
            ("Scientific Name", "Gadus morhua"),
            ("Family", "Gadidae"),
            ("Genus", "Gadus"),
            ("Specific Epithet", "morhua"),
        ];

        Ok(outputs
            .iter()
            .map(|(label, prediction)| PredictionRecord {
                label: (*label).to_string(),
                prediction: (*prediction).to_string(),
                confidence: Some(0.5 + rand::random::<f64>() * 0.5),
            })
            .collect())
    }
}
