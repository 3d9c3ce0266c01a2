//! Best-of-batch selection over raw detector output

use itemscan_core::config::{
    DEFAULT_LIVE_CONFIDENCE_THRESHOLD, DEFAULT_STATIC_CONFIDENCE_THRESHOLD,
};
use itemscan_core::{BoundingBox, PipelineConfig, RawDetection};

/// The detection chosen from one batch
#[derive(Debug, Clone, PartialEq)]
pub struct RankedDetection {
    detection: RawDetection,
    input_index: usize,
}

impl RankedDetection {
    pub fn label(&self) -> &str {
        &self.detection.label
    }

    pub fn confidence(&self) -> f32 {
        self.detection.confidence
    }

    pub fn bbox(&self) -> BoundingBox {
        self.detection.bbox
    }

    /// Position of the winner in the input sequence
    pub fn input_index(&self) -> usize {
        self.input_index
    }
}

/// Filters detections by a capture-dependent threshold and keeps the best one
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetectionRanker {
    live_threshold: f32,
    static_threshold: f32,
}

impl Default for DetectionRanker {
    fn default() -> Self {
        Self::new()
    }
}

impl DetectionRanker {
    /// Ranker with the calibrated thresholds (0.15 live, 0.25 static)
    pub fn new() -> Self {
        Self {
            live_threshold: DEFAULT_LIVE_CONFIDENCE_THRESHOLD,
            static_threshold: DEFAULT_STATIC_CONFIDENCE_THRESHOLD,
        }
    }

    pub fn with_thresholds(live_threshold: f32, static_threshold: f32) -> Self {
        Self {
            live_threshold,
            static_threshold,
        }
    }

    pub fn from_config(config: &PipelineConfig) -> Self {
        Self::with_thresholds(
            config.live_confidence_threshold,
            config.static_confidence_threshold,
        )
    }

    pub fn threshold(&self, is_live_capture: bool) -> f32 {
        if is_live_capture {
            self.live_threshold
        } else {
            self.static_threshold
        }
    }

    /// Highest-confidence detection at or above the threshold.
    ///
    /// Ties keep the earliest detection in input order. `None` means nothing
    /// cleared the threshold, which is an ordinary outcome.
    pub fn rank(&self, detections: &[RawDetection], is_live_capture: bool) -> Option<RankedDetection> {
        let threshold = self.threshold(is_live_capture);

        let mut best: Option<(usize, &RawDetection)> = None;
        for (idx, detection) in detections.iter().enumerate() {
            if detection.confidence.is_nan() || detection.confidence < threshold {
                continue;
            }
            match best {
                Some((_, current)) if detection.confidence <= current.confidence => {}
                _ => best = Some((idx, detection)),
            }
        }

        best.map(|(input_index, detection)| RankedDetection {
            detection: detection.clone(),
            input_index,
        })
    }
}
