//! Object detector seam

use crate::error::VisionError;
use async_trait::async_trait;
use itemscan_core::{Bitmap, RawDetection};

/// Any object-detection backend.
///
/// Implementations run inference (and non-max suppression) and return the
/// surviving candidates, unsorted, at or above `confidence_threshold`, at most
/// `max_results` of them. Model loading and inference timeouts are the
/// implementation's concern.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Detector: Send + Sync {
    async fn detect(
        &self,
        bitmap: &Bitmap,
        max_results: usize,
        confidence_threshold: f32,
    ) -> Result<Vec<RawDetection>, VisionError>;
}
