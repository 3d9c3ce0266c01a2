//! Catalog backed by a single JSON file
//!
//! The whole list is loaded on open and the file is rewritten after every
//! mutation. Writes go to a sibling temp file that is renamed over the
//! original, so a crash never leaves a half-written catalog.

use crate::error::{CatalogError, Result};
use crate::record::{CatalogRecord, RecordDraft};
use crate::store::{filter_by_label, CatalogStore};
use parking_lot::RwLock;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use uuid::Uuid;

#[derive(Debug)]
pub struct JsonFileCatalog {
    path: PathBuf,
    records: RwLock<Vec<CatalogRecord>>,
}

impl JsonFileCatalog {
    /// Open the catalog at `path`; a missing file is an empty catalog
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let records = if path.exists() {
            let contents = fs::read_to_string(&path)?;
            if contents.trim().is_empty() {
                Vec::new()
            } else {
                serde_json::from_str(&contents).map_err(|e| {
                    CatalogError::Corrupt(format!("{}: {}", path.display(), e))
                })?
            }
        } else {
            Vec::new()
        };

        info!("Opened catalog {:?} with {} items", path, records.len());
        Ok(Self {
            path,
            records: RwLock::new(records),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, records: &[CatalogRecord]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_vec_pretty(records)?)?;
        fs::rename(&tmp, &self.path)?;
        debug!("Wrote {} items to {:?}", records.len(), self.path);
        Ok(())
    }

    /// Apply `change` to a copy of the records, persist it, then commit.
    /// Nothing changes in memory if the write fails.
    fn mutate<T>(&self, change: impl FnOnce(&mut Vec<CatalogRecord>) -> Result<T>) -> Result<T> {
        let mut records = self.records.write();
        let mut next = records.clone();
        let out = change(&mut next)?;
        self.persist(&next)?;
        *records = next;
        Ok(out)
    }
}

impl CatalogStore for JsonFileCatalog {
    fn save(&self, draft: RecordDraft) -> Result<CatalogRecord> {
        let record = draft.into_record()?;
        self.mutate(|records| {
            records.push(record.clone());
            Ok(())
        })?;
        info!("Saved {} ({})", record.item_label, record.id);
        Ok(record)
    }

    fn insert(&self, record: CatalogRecord) -> Result<()> {
        self.mutate(|records| {
            if records.iter().any(|r| r.id == record.id) {
                return Err(CatalogError::DuplicateId(record.id));
            }
            records.push(record);
            Ok(())
        })
    }

    fn seed_if_empty(&self, seed: Vec<CatalogRecord>) -> Result<usize> {
        let mut records = self.records.write();
        if !records.is_empty() {
            return Ok(0);
        }
        self.persist(&seed)?;
        let count = seed.len();
        *records = seed;
        Ok(count)
    }

    fn all(&self) -> Result<Vec<CatalogRecord>> {
        Ok(self.records.read().clone())
    }

    fn search(&self, query: &str) -> Result<Vec<CatalogRecord>> {
        Ok(filter_by_label(self.records.read().clone(), query))
    }

    fn delete(&self, id: Uuid) -> Result<bool> {
        if !self.records.read().iter().any(|r| r.id == id) {
            return Ok(false);
        }
        self.mutate(|records| {
            let before = records.len();
            records.retain(|r| r.id != id);
            Ok(records.len() != before)
        })
    }

    fn clear(&self) -> Result<()> {
        self.mutate(|records| {
            records.clear();
            Ok(())
        })?;
        info!("Cleared catalog {:?}", self.path);
        Ok(())
    }

    fn len(&self) -> Result<usize> {
        Ok(self.records.read().len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = JsonFileCatalog::open(dir.path().join("items.json")).unwrap();
        assert!(catalog.is_empty().unwrap());
        assert!(!catalog.path().exists());
    }

    #[test]
    fn test_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("items.json");

        let saved = {
            let catalog = JsonFileCatalog::open(&path).unwrap();
            catalog.save(RecordDraft::new("cup", "Red", "kitchen", "mug")).unwrap()
        };

        let reopened = JsonFileCatalog::open(&path).unwrap();
        assert_eq!(reopened.all().unwrap(), vec![saved]);
    }

    #[test]
    fn test_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("catalog.json");
        let catalog = JsonFileCatalog::open(&path).unwrap();
        catalog.save(RecordDraft::new("book", "Brown", "study", "")).unwrap();
        assert!(path.is_file());
    }

    #[test]
    fn test_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("items.json");
        fs::write(&path, "{ not a list").unwrap();
        assert!(matches!(JsonFileCatalog::open(&path), Err(CatalogError::Corrupt(_))));
    }

    #[test]
    fn test_delete_and_clear_persist() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("items.json");
        let catalog = JsonFileCatalog::open(&path).unwrap();
        let cup = catalog.save(RecordDraft::new("cup", "Red", "kitchen", "")).unwrap();
        catalog.save(RecordDraft::new("book", "Brown", "study", "")).unwrap();

        assert!(catalog.delete(cup.id).unwrap());
        assert_eq!(JsonFileCatalog::open(&path).unwrap().len().unwrap(), 1);

        catalog.clear().unwrap();
        assert!(JsonFileCatalog::open(&path).unwrap().is_empty().unwrap());
    }

    #[test]
    fn test_concurrent_seeding_writes_once() {
        use crate::samples::seed_sample_data;
        use std::sync::Arc;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("items.json");
        let catalog = Arc::new(JsonFileCatalog::open(&path).unwrap());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let catalog = Arc::clone(&catalog);
                std::thread::spawn(move || seed_sample_data(catalog.as_ref()).unwrap())
            })
            .collect();

        let added: usize = handles.into_iter().map(|h| h.join().unwrap()).sum();
        assert_eq!(added, 8);
        assert_eq!(JsonFileCatalog::open(&path).unwrap().len().unwrap(), 8);
    }

    #[test]
    fn test_failed_insert_leaves_state_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = JsonFileCatalog::open(dir.path().join("items.json")).unwrap();
        let cup = catalog.save(RecordDraft::new("cup", "Red", "kitchen", "")).unwrap();
        assert!(catalog.insert(cup).is_err());
        assert_eq!(catalog.len().unwrap(), 1);
    }
}
