//! Frame classification pipeline
//!
//! Detector output is ranked, the winner's region sampled, and the samples
//! reduced to a named color. The pipeline keeps no state between calls and
//! can be shared across threads.

use crate::error::VisionError;
use crate::frame_source::FrameSource;
use crate::metrics::{self, Outcome};
use crate::models::Detector;
use crate::processing::{ColorClassifier, ColorSampler, DetectionRanker};
use itemscan_core::{Bitmap, DetectionResult, PipelineConfig, RawDetection};
use std::time::Instant;
use tracing::{debug, info, warn};

/// Detector output to labeled, colored result
#[derive(Debug, Clone)]
pub struct DetectionPipeline {
    config: PipelineConfig,
    ranker: DetectionRanker,
    sampler: ColorSampler,
    classifier: ColorClassifier,
}

impl Default for DetectionPipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl DetectionPipeline {
    /// Pipeline with the calibrated default thresholds
    pub fn new() -> Self {
        Self::with_config(PipelineConfig::default())
    }

    pub fn with_config(config: PipelineConfig) -> Self {
        Self {
            ranker: DetectionRanker::from_config(&config),
            sampler: ColorSampler::new(),
            classifier: ColorClassifier::new(),
            config,
        }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Label and color the best detection in `detections`.
    ///
    /// When no detection clears the threshold the result is
    /// [`DetectionResult::unknown`]. Detections whose confidence is not a
    /// finite score in `[0, 1]` are rejected as invalid input.
    pub fn classify_frame(
        &self,
        bitmap: &Bitmap,
        detections: &[RawDetection],
        is_live_capture: bool,
    ) -> Result<DetectionResult, VisionError> {
        let started = Instant::now();

        if let Some(err) = detections.iter().find_map(|d| d.validate().err()) {
            warn!("Rejecting frame: {}", err);
            metrics::record_frame(Outcome::Rejected, started.elapsed());
            return Err(err.into());
        }

        debug!(
            "Ranking {} detections (live capture: {})",
            detections.len(),
            is_live_capture
        );

        let Some(ranked) = self.ranker.rank(detections, is_live_capture) else {
            info!(
                "No detection at or above {:.2}; reporting Unknown",
                self.ranker.threshold(is_live_capture)
            );
            metrics::record_frame(Outcome::NoDetection, started.elapsed());
            return Ok(DetectionResult::unknown());
        };

        let bbox = ranked.bbox();
        let samples = self.sampler.sample(bitmap, Some(&bbox));
        metrics::record_samples(samples.len());
        let color = self.classifier.classify(&samples);

        info!(
            "Detected {} ({:.1}%) colored {} from {} samples",
            ranked.label(),
            ranked.confidence() * 100.0,
            color,
            samples.len()
        );
        metrics::record_frame(Outcome::Detected, started.elapsed());

        Ok(DetectionResult::new(ranked.label(), color, ranked.confidence()))
    }

    /// Run `detector` on `bitmap`, then classify its output
    pub async fn detect_and_classify<D>(
        &self,
        detector: &D,
        bitmap: &Bitmap,
        is_live_capture: bool,
    ) -> Result<DetectionResult, VisionError>
    where
        D: Detector + ?Sized,
    {
        let threshold = self.config.confidence_threshold(is_live_capture);
        let detections = detector
            .detect(bitmap, self.config.max_results, threshold)
            .await
            .map_err(|e| {
                warn!("Detector failed: {}", e);
                metrics::record_detector_failure();
                e
            })?;
        debug!("Detector returned {} candidates", detections.len());
        self.classify_frame(bitmap, &detections, is_live_capture)
    }

    /// Capture one frame from `source` and classify it
    pub async fn process_frame<D, S>(
        &self,
        detector: &D,
        source: &S,
    ) -> Result<DetectionResult, VisionError>
    where
        D: Detector + ?Sized,
        S: FrameSource + ?Sized,
    {
        let bitmap = source.capture_frame()?;
        self.detect_and_classify(detector, &bitmap, source.is_live())
            .await
    }
}
