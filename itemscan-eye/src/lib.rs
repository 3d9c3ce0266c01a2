//! itemscan-eye: detection post-processing for itemscan
//!
//! Turns a decoded frame plus raw object-detector output into a single
//! labeled result with a human-readable dominant color. The detector itself
//! and the frame source are pluggable collaborators.

pub mod error;
pub mod frame_source;
pub mod metrics;
pub mod models;
pub mod processing;

pub use error::VisionError;
pub use frame_source::{FrameSource, ImageFileSource, MemoryFrameSource};
pub use models::{Detector, FixedDetector};
pub use processing::{
    ColorClassifier, ColorSampler, DetectionPipeline, DetectionRanker, RankedDetection,
};
