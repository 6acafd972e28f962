use thiserror::Error;

/// Everything that can go wrong between picking a file and rendering a
/// prediction. The `Display` strings are the exact user-facing messages, so
/// the view layer never formats errors itself.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PredictError {
    #[error("Please select a valid image file.")]
    NotAnImage,

    #[error("Please select an image file first.")]
    NoFileSelected,

    #[error("Could not read the selected file: {0}")]
    FileRead(String),

    #[error("Prediction failed: {}", .detail.as_deref().unwrap_or("An unexpected error occurred on the server."))]
    Server { status: u16, detail: Option<String> },

    #[error("Prediction failed. Please check the API server and try again.")]
    Transport(String),

    #[error("Prediction returned invalid values (NaN). This usually indicates a model or input image issue.")]
    InvalidValues,
}
