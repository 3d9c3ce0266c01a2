//! Saved items and drafts of items about to be saved

use crate::error::{CatalogError, Result};
use chrono::{DateTime, Utc};
use itemscan_core::DetectionResult;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Category used when the user gives none
pub const DEFAULT_CATEGORY: &str = "other";

/// An item the user has confirmed and saved
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogRecord {
    pub id: Uuid,
    pub item_label: String,
    pub color_name: String,
    pub category: String,
    pub description: String,
    pub date_added: DateTime<Utc>,
}

impl CatalogRecord {
    /// Whether `needle` (already lowercased and trimmed) occurs in the label
    pub fn label_matches(&self, needle: &str) -> bool {
        self.item_label.to_lowercase().contains(needle)
    }
}

/// Fields supplied by the caller; the store assigns id and timestamp
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordDraft {
    pub item_label: String,
    pub color_name: String,
    pub category: String,
    pub description: String,
}

impl RecordDraft {
    pub fn new(
        item_label: impl Into<String>,
        color_name: impl Into<String>,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            item_label: item_label.into(),
            color_name: color_name.into(),
            category: category.into(),
            description: description.into(),
        }
    }

    /// Draft from a confirmed detection. An empty category becomes
    /// [`DEFAULT_CATEGORY`].
    pub fn from_detection(
        result: &DetectionResult,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self> {
        if !result.is_detected() {
            return Err(CatalogError::InvalidRecord(
                "cannot save a frame with no detected item".to_string(),
            ));
        }

        let category = category.into();
        let category = if category.trim().is_empty() {
            DEFAULT_CATEGORY.to_string()
        } else {
            category.trim().to_string()
        };

        Ok(Self::new(
            result.item_label.clone(),
            result.color_name.name(),
            category,
            description.into().trim(),
        ))
    }

    pub fn validate(&self) -> Result<()> {
        if self.item_label.trim().is_empty() {
            return Err(CatalogError::InvalidRecord("item label is empty".to_string()));
        }
        if self.color_name.trim().is_empty() {
            return Err(CatalogError::InvalidRecord("color name is empty".to_string()));
        }
        Ok(())
    }

    /// Turn the draft into a record with a fresh id and the current time
    pub fn into_record(self) -> Result<CatalogRecord> {
        self.validate()?;
        Ok(CatalogRecord {
            id: Uuid::new_v4(),
            item_label: self.item_label,
            color_name: self.color_name,
            category: self.category,
            description: self.description,
            date_added: Utc::now(),
        })
    }
}
