//! In-process catalog backend

use crate::error::{CatalogError, Result};
use crate::record::{CatalogRecord, RecordDraft};
use crate::store::{filter_by_label, CatalogStore};
use parking_lot::RwLock;
use tracing::debug;
use uuid::Uuid;

/// Catalog held in memory; lost when dropped
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    records: RwLock<Vec<CatalogRecord>>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<CatalogRecord>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }
}

impl CatalogStore for InMemoryCatalog {
    fn save(&self, draft: RecordDraft) -> Result<CatalogRecord> {
        let record = draft.into_record()?;
        self.records.write().push(record.clone());
        debug!("Saved {} ({})", record.item_label, record.id);
        Ok(record)
    }

    fn insert(&self, record: CatalogRecord) -> Result<()> {
        let mut records = self.records.write();
        if records.iter().any(|r| r.id == record.id) {
            return Err(CatalogError::DuplicateId(record.id));
        }
        records.push(record);
        Ok(())
    }

    fn seed_if_empty(&self, seed: Vec<CatalogRecord>) -> Result<usize> {
        let mut records = self.records.write();
        if !records.is_empty() {
            return Ok(0);
        }
        let count = seed.len();
        records.extend(seed);
        Ok(count)
    }

    fn all(&self) -> Result<Vec<CatalogRecord>> {
        Ok(self.records.read().clone())
    }

    fn get(&self, id: Uuid) -> Result<Option<CatalogRecord>> {
        Ok(self.records.read().iter().find(|r| r.id == id).cloned())
    }

    fn search(&self, query: &str) -> Result<Vec<CatalogRecord>> {
        Ok(filter_by_label(self.records.read().clone(), query))
    }

    fn delete(&self, id: Uuid) -> Result<bool> {
        let mut records = self.records.write();
        let before = records.len();
        records.retain(|r| r.id != id);
        Ok(records.len() != before)
    }

    fn clear(&self) -> Result<()> {
        self.records.write().clear();
        Ok(())
    }

    fn len(&self) -> Result<usize> {
        Ok(self.records.read().len())
    }
}
