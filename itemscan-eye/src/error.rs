//! Error types for itemscan-eye

use itemscan_core::Error as CoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum VisionError {
    #[error("Detector error: {0}")]
    Detector(String),

    #[error("Frame source error: {0}")]
    FrameSource(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Core error: {0}")]
    Core(#[from] CoreError),
}

impl VisionError {
    /// True when the caller handed the pipeline a malformed input
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            VisionError::Core(CoreError::MalformedBitmap(_))
                | VisionError::Core(CoreError::InvalidDetection { .. })
        )
    }
}

impl From<VisionError> for CoreError {
    fn from(err: VisionError) -> Self {
        match err {
            VisionError::Core(inner) => inner,
            VisionError::Io(io) => CoreError::Io(io),
            other => CoreError::Collaborator(format!("Vision error: {}", other)),
        }
    }
}
