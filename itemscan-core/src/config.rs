//! Configuration for itemscan
//!
//! Settings are grouped by concern and can be read from JSON, TOML or YAML
//! files, or layered from `ITEMSCAN_*` environment variables on top of the
//! defaults. The defaults carry the exact thresholds the pipeline is
//! calibrated against.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Minimum confidence for detections from a handheld camera
pub const DEFAULT_LIVE_CONFIDENCE_THRESHOLD: f32 = 0.15;

/// Minimum confidence for detections from still/test images
pub const DEFAULT_STATIC_CONFIDENCE_THRESHOLD: f32 = 0.25;

/// Results below this confidence prompt the user to capture again
pub const DEFAULT_LOW_CONFIDENCE_THRESHOLD: f32 = 0.5;

/// Upper bound on detector candidates requested per frame
pub const DEFAULT_MAX_RESULTS: usize = 10;

/// Detection and ranking settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub live_confidence_threshold: f32,
    pub static_confidence_threshold: f32,
    pub max_results: usize,
    pub low_confidence_threshold: f32,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            live_confidence_threshold: DEFAULT_LIVE_CONFIDENCE_THRESHOLD,
            static_confidence_threshold: DEFAULT_STATIC_CONFIDENCE_THRESHOLD,
            max_results: DEFAULT_MAX_RESULTS,
            low_confidence_threshold: DEFAULT_LOW_CONFIDENCE_THRESHOLD,
        }
    }
}

impl PipelineConfig {
    /// Threshold for the given capture source
    pub fn confidence_threshold(&self, is_live_capture: bool) -> f32 {
        if is_live_capture {
            self.live_confidence_threshold
        } else {
            self.static_confidence_threshold
        }
    }
}

/// Catalog persistence settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// JSON file holding saved records
    pub path: PathBuf,
    /// Insert the sample items when the catalog is empty
    pub seed_sample_data: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("./itemscan-catalog.json"),
            seed_sample_data: false,
        }
    }
}

/// Log output settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing` filter directive, e.g. "info" or "itemscan_eye=debug"
    pub level: String,
    /// Emit JSON lines instead of human-readable output
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

/// Complete configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemScanConfig {
    pub pipeline: PipelineConfig,
    pub catalog: CatalogConfig,
    pub logging: LoggingConfig,
}

impl ItemScanConfig {
    /// Load configuration from a JSON, TOML or YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_str(&content)
    }

    /// Parse configuration text, trying JSON, then TOML, then YAML
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self> {
        if let Ok(config) = serde_json::from_str::<ItemScanConfig>(content) {
            return Ok(config);
        }

        if let Ok(config) = toml::from_str::<ItemScanConfig>(content) {
            return Ok(config);
        }

        serde_yaml::from_str::<ItemScanConfig>(content)
            .map_err(|e| Error::Serialization(format!("Unrecognised configuration format: {}", e)))
    }

    /// Defaults overridden by `ITEMSCAN_*` environment variables
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env(|key| std::env::var(key).ok());
        config
    }

    /// Overlay values from an environment lookup
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("ITEMSCAN_LIVE_THRESHOLD").and_then(|v| v.parse().ok()) {
            self.pipeline.live_confidence_threshold = v;
        }
        if let Some(v) = lookup("ITEMSCAN_STATIC_THRESHOLD").and_then(|v| v.parse().ok()) {
            self.pipeline.static_confidence_threshold = v;
        }
        if let Some(v) = lookup("ITEMSCAN_MAX_RESULTS").and_then(|v| v.parse().ok()) {
            self.pipeline.max_results = v;
        }
        if let Some(v) = lookup("ITEMSCAN_LOW_CONFIDENCE").and_then(|v| v.parse().ok()) {
            self.pipeline.low_confidence_threshold = v;
        }
        if let Some(v) = lookup("ITEMSCAN_CATALOG_PATH") {
            self.catalog.path = PathBuf::from(v);
        }
        if let Some(v) = lookup("ITEMSCAN_SEED_SAMPLES").and_then(|v| v.parse().ok()) {
            self.catalog.seed_sample_data = v;
        }
        if let Some(v) = lookup("ITEMSCAN_LOG_LEVEL") {
            self.logging.level = v;
        }
        if let Some(v) = lookup("ITEMSCAN_LOG_JSON").and_then(|v| v.parse().ok()) {
            self.logging.json = v;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        let thresholds = [
            ("live_confidence_threshold", self.pipeline.live_confidence_threshold),
            ("static_confidence_threshold", self.pipeline.static_confidence_threshold),
            ("low_confidence_threshold", self.pipeline.low_confidence_threshold),
        ];
        for (name, value) in thresholds {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(Error::Configuration(format!(
                    "{} must be within [0, 1], got {}",
                    name, value
                )));
            }
        }

        // Ranked detections must never carry the fallback's zero confidence
        for (name, value) in [
            ("live_confidence_threshold", self.pipeline.live_confidence_threshold),
            ("static_confidence_threshold", self.pipeline.static_confidence_threshold),
        ] {
            if value <= 0.0 {
                return Err(Error::Configuration(format!(
                    "{} must be greater than 0, got {}",
                    name, value
                )));
            }
        }

        if self.pipeline.max_results == 0 {
            return Err(Error::Configuration("max_results must be at least 1".to_string()));
        }

        if self.catalog.path.as_os_str().is_empty() {
            return Err(Error::Configuration("catalog path must not be empty".to_string()));
        }

        if self.logging.level.trim().is_empty() {
            return Err(Error::Configuration("log level must not be empty".to_string()));
        }

        Ok(())
    }
}
