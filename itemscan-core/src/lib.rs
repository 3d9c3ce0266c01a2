//! itemscan-core: shared data model for the itemscan workspace
//!
//! Pixel buffers, detector outputs, the named-color palette, configuration
//! and the core error type used by every other crate.

pub mod color;
pub mod config;
pub mod error;
pub mod localization;
pub mod types;

pub use color::{NamedColor, ParseColorError};
pub use config::{CatalogConfig, ItemScanConfig, LoggingConfig, PipelineConfig};
pub use error::{Error, Result};
pub use localization::{CanonicalLocalizer, Localizer};
pub use types::{
    Bitmap, BoundingBox, DetectionResult, PixelRegion, RawDetection, Rgb, UNKNOWN_LABEL,
};
