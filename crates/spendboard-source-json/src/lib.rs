//! spendboard-source-json
//!
//! Filesystem [`RecordSource`] reading purchase and item snapshots exported as JSON arrays.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde_json::Value;
use spendboard_core::{
    input::{items_from_value, purchases_from_value},
    CoreError, RecordSource,
};
use spendboard_domain::{Purchase, PurchaseItem};

pub const PURCHASES_FILE: &str = "purchases.json";
pub const ITEMS_FILE: &str = "items.json";

/// Reads `purchases.json` and `items.json` snapshots from disk.
#[derive(Debug, Clone)]
pub struct JsonSnapshotSource {
    purchases_path: PathBuf,
    items_path: PathBuf,
}

impl JsonSnapshotSource {
    /// Uses the conventional file names inside `dir`.
    pub fn new(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self::from_paths(dir.join(PURCHASES_FILE), dir.join(ITEMS_FILE))
    }

    pub fn from_paths(purchases_path: PathBuf, items_path: PathBuf) -> Self {
        Self {
            purchases_path,
            items_path,
        }
    }

    pub fn purchases_path(&self) -> &Path {
        &self.purchases_path
    }

    pub fn items_path(&self) -> &Path {
        &self.items_path
    }
}

impl RecordSource for JsonSnapshotSource {
    fn list_purchases(&self, limit: usize) -> Result<Vec<Purchase>, CoreError> {
        let value = read_json(&self.purchases_path)?;
        let records = purchases_from_value(&value)?;
        Ok(truncate(records, limit, &self.purchases_path))
    }

    fn list_items(&self, limit: usize) -> Result<Vec<PurchaseItem>, CoreError> {
        let value = read_json(&self.items_path)?;
        let records = items_from_value(&value)?;
        Ok(truncate(records, limit, &self.items_path))
    }
}

fn read_json(path: &Path) -> Result<Value, CoreError> {
    let data = fs::read_to_string(path)?;
    serde_json::from_str(&data).map_err(|err| {
        CoreError::InvalidInput(format!("{} is not valid JSON: {err}", path.display()))
    })
}

fn truncate<T>(mut records: Vec<T>, limit: usize, path: &Path) -> Vec<T> {
    if records.len() > limit {
        tracing::warn!(
            path = %path.display(),
            available = records.len(),
            limit,
            "snapshot truncated to record limit"
        );
        records.truncate(limit);
    }
    records
}
