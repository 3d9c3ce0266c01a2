//! Detector backends

pub mod coco;
pub mod detector;
pub mod fixed;

pub use coco::COCO_CLASSES;
pub use detector::Detector;
pub use fixed::FixedDetector;

#[cfg(test)]
pub use detector::MockDetector;
