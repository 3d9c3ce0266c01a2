//! Ranking, sampling, color classification and their orchestration

pub mod classifier;
pub mod detection;
pub mod ranker;
pub mod sampler;

pub use classifier::{ColorClassifier, Hsv};
pub use detection::DetectionPipeline;
pub use ranker::{DetectionRanker, RankedDetection};
pub use sampler::ColorSampler;
