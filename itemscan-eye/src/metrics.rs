//! Pipeline counters and timings
//!
//! Recorded only at the orchestrator boundary through the `metrics` facade;
//! without an installed recorder these calls are no-ops.

use metrics::{counter, histogram};
use std::time::Duration;

pub const FRAMES_CLASSIFIED_TOTAL: &str = "itemscan_frames_classified_total";
pub const SAMPLES_KEPT: &str = "itemscan_samples_kept";
pub const CLASSIFY_DURATION_MS: &str = "itemscan_classify_duration_ms";
pub const DETECTOR_FAILURES_TOTAL: &str = "itemscan_detector_failures_total";

/// How a frame classification ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Detected,
    NoDetection,
    Rejected,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Detected => "detected",
            Outcome::NoDetection => "no_detection",
            Outcome::Rejected => "rejected",
        }
    }
}

pub fn record_frame(outcome: Outcome, elapsed: Duration) {
    counter!(FRAMES_CLASSIFIED_TOTAL, "outcome" => outcome.as_str()).increment(1);
    histogram!(CLASSIFY_DURATION_MS).record(elapsed.as_secs_f64() * 1000.0);
}

pub fn record_samples(kept: usize) {
    histogram!(SAMPLES_KEPT).record(kept as f64);
}

pub fn record_detector_failure() {
    counter!(DETECTOR_FAILURES_TOTAL).increment(1);
}
