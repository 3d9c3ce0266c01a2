//! Detector returning a preset list of candidates
//!
//! Stands in for a real model when detections come from elsewhere (a JSON
//! file, a remote service, a test fixture).

use crate::error::VisionError;
use crate::models::Detector;
use async_trait::async_trait;
use itemscan_core::{Bitmap, BoundingBox, RawDetection};
use tracing::debug;

/// Detector that replays preset detections
#[derive(Debug, Clone, Default)]
pub struct FixedDetector {
    detections: Vec<RawDetection>,
}

impl FixedDetector {
    pub fn new(detections: Vec<RawDetection>) -> Self {
        Self { detections }
    }

    /// Parse detections from a JSON array
    pub fn from_json(json: &str) -> Result<Self, VisionError> {
        let detections: Vec<RawDetection> = serde_json::from_str(json)
            .map_err(|e| VisionError::Detector(format!("Invalid detections JSON: {}", e)))?;
        Ok(Self::new(detections))
    }

    /// Bottle, cup and book boxes spread across a `width` x `height` frame
    pub fn household_demo(width: u32, height: u32) -> Self {
        let (w, h) = (width as f32, height as f32);
        Self::new(vec![
            RawDetection::new("bottle", 0.95, BoundingBox::new(w * 0.05, h * 0.1, w * 0.3, h * 0.8)),
            RawDetection::new("cup", 0.87, BoundingBox::new(w * 0.4, h * 0.4, w * 0.2, h * 0.3)),
            RawDetection::new("book", 0.72, BoundingBox::new(w * 0.65, h * 0.2, w * 0.3, h * 0.6)),
        ])
    }

    pub fn detections(&self) -> &[RawDetection] {
        &self.detections
    }
}

#[async_trait]
impl Detector for FixedDetector {
    async fn detect(
        &self,
        _bitmap: &Bitmap,
        max_results: usize,
        confidence_threshold: f32,
    ) -> Result<Vec<RawDetection>, VisionError> {
        let mut kept: Vec<RawDetection> = self
            .detections
            .iter()
            .filter(|d| d.confidence >= confidence_threshold)
            .cloned()
            .collect();

        // Stable sort keeps input order among equal scores
        kept.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
        kept.truncate(max_results);

        debug!("Fixed detector returning {} of {} detections", kept.len(), self.detections.len());
        Ok(kept)
    }
}
