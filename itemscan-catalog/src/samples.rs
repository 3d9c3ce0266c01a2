//! Demo items for a fresh catalog

use crate::error::{CatalogError, Result};
use crate::record::CatalogRecord;
use crate::store::CatalogStore;
use chrono::{TimeZone, Utc};
use tracing::{debug, info};
use uuid::Uuid;

/// (label, color, category, description, (year, month, day))
const SAMPLE_ITEMS: [(&str, &str, &str, &str, (i32, u32, u32)); 8] = [
    ("Cup", "Green", "Kitchen", "Green ceramic cup for coffee", (2025, 10, 20)),
    ("Cup", "Blue", "Kitchen", "Blue glass cup for water", (2025, 10, 21)),
    ("Bottle", "Red", "Kitchen", "Red water bottle", (2025, 10, 22)),
    ("Book", "Brown", "Study", "Programming textbook", (2025, 10, 19)),
    ("Cell Phone", "Black", "Electronics", "Smartphone for daily use", (2025, 10, 18)),
    ("Laptop", "Silver", "Electronics", "Work laptop", (2025, 10, 17)),
    ("Chair", "Brown", "Furniture", "Wooden office chair", (2025, 10, 16)),
    ("Bottle", "Green", "Kitchen", "Green reusable water bottle", (2025, 10, 15)),
];

/// The demo items as records with fresh ids
pub fn sample_records() -> Result<Vec<CatalogRecord>> {
    SAMPLE_ITEMS
        .iter()
        .map(|&(label, color, category, description, (y, m, d))| {
            let date_added = Utc
                .with_ymd_and_hms(y, m, d, 0, 0, 0)
                .single()
                .ok_or_else(|| {
                    CatalogError::InvalidRecord(format!("bad sample date {}-{}-{}", y, m, d))
                })?;
            Ok(CatalogRecord {
                id: Uuid::new_v4(),
                item_label: label.to_string(),
                color_name: color.to_string(),
                category: category.to_string(),
                description: description.to_string(),
                date_added,
            })
        })
        .collect()
}

/// Insert the demo items when `store` is empty. Returns how many were added.
///
/// Safe to call from several threads at once: only one caller adds items.
pub fn seed_sample_data<S: CatalogStore + ?Sized>(store: &S) -> Result<usize> {
    let count = store.seed_if_empty(sample_records()?)?;
    if count == 0 {
        debug!("Catalog already has items, skipping sample data");
    } else {
        info!("Seeded catalog with {} sample items", count);
    }
    Ok(count)
}
