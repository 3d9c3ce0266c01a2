//! Storage trait shared by the catalog backends

use crate::error::Result;
use crate::record::{CatalogRecord, RecordDraft};
use uuid::Uuid;

/// Persistent list of saved items, kept in insertion order
pub trait CatalogStore: Send + Sync {
    /// Save a draft, assigning it a new id and the current UTC time
    fn save(&self, draft: RecordDraft) -> Result<CatalogRecord>;

    /// Insert a complete record as-is. Fails if the id is already present.
    fn insert(&self, record: CatalogRecord) -> Result<()>;

    /// Insert `records` only when the store holds nothing. The emptiness
    /// check and the inserts happen under one write lock. Returns how many
    /// records were added.
    fn seed_if_empty(&self, records: Vec<CatalogRecord>) -> Result<usize>;

    fn all(&self) -> Result<Vec<CatalogRecord>>;

    fn get(&self, id: Uuid) -> Result<Option<CatalogRecord>> {
        Ok(self.all()?.into_iter().find(|r| r.id == id))
    }

    /// Case-insensitive substring match on item labels. The query is
    /// trimmed first; an empty query matches every record.
    fn search(&self, query: &str) -> Result<Vec<CatalogRecord>> {
        Ok(filter_by_label(self.all()?, query))
    }

    /// Remove a record; returns whether it existed
    fn delete(&self, id: Uuid) -> Result<bool>;

    fn clear(&self) -> Result<()>;

    fn len(&self) -> Result<usize> {
        Ok(self.all()?.len())
    }

    fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}

pub(crate) fn filter_by_label(records: Vec<CatalogRecord>, query: &str) -> Vec<CatalogRecord> {
    let needle = query.trim().to_lowercase();
    records
        .into_iter()
        .filter(|r| r.label_matches(&needle))
        .collect()
}
