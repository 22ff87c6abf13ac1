//! Local fallback database: a JSON array of records scanned by symbol.

use std::fs;
use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::errors::Result;

/// An in-memory snapshot of the fallback records.
///
/// Immutable after load, so the snapshot is safe to share for read-only
/// access. A missing or malformed file propagates as an I/O or parse error;
/// the taxonomy is not involved here.
#[derive(Debug, Clone, Default)]
pub struct LocalDatabase {
    records: Vec<Value>,
}

impl LocalDatabase {
    /// Load a JSON array of records from `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let raw = fs::read(path.as_ref())?;
        let records: Vec<Value> = serde_json::from_slice(&raw)?;
        debug!(count = records.len(), "loaded fallback database");
        Ok(Self { records })
    }

    pub fn records(&self) -> &[Value] {
        &self.records
    }

    /// First record whose `"symbol"` field equals `symbol`.
    ///
    /// Linear scan; the dataset is assumed small enough that no index is
    /// worth building.
    pub fn find_by_symbol(&self, symbol: &str) -> Option<&Value> {
        self.records
            .iter()
            .find(|record| record.get("symbol").and_then(Value::as_str) == Some(symbol))
    }
}
