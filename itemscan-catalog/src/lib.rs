//! itemscan-catalog: the user's list of saved items
//!
//! Records are created from confirmed detections, kept in insertion order
//! and searched by label. Two backends share the [`CatalogStore`] trait:
//! an in-memory list and a JSON file.

pub mod error;
pub mod json_file;
pub mod memory;
pub mod query;
pub mod record;
pub mod samples;
pub mod store;

pub use error::{CatalogError, Result};
pub use json_file::JsonFileCatalog;
pub use memory::InMemoryCatalog;
pub use query::normalize_spoken_query;
pub use record::{CatalogRecord, RecordDraft, DEFAULT_CATEGORY};
pub use samples::{sample_records, seed_sample_data};
pub use store::CatalogStore;
