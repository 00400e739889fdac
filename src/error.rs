use thiserror::Error;

use crate::detection::CameraError;

#[derive(Debug, Error)]
pub enum MoodStyleError {
    #[error("Camera error: {0}")]
    Camera(#[from] CameraError),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Confidence out of range: {0}")]
    InvalidConfidence(f32),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Unknown outfit: {0}")]
    UnknownOutfit(String),
}

impl From<MoodStyleError> for String {
    fn from(err: MoodStyleError) -> Self {
        err.to_string()
    }
}
