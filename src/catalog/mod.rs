//! Tool catalog — immutable, ordered record store.
//!
//! The catalog owns the full tool list supplied at startup. It is never
//! mutated after construction; insertion order is preserved so filtering and
//! pagination windows stay deterministic.

mod counts;
mod pick;

pub use counts::CategoryCounts;

use crate::types::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolRecord {
    /// Display name, non-empty by convention (not validated).
    pub name: String,

    /// Display description.
    pub description: String,

    /// Category label; open set, matched exactly and case-sensitively.
    pub category: String,

    /// Absolute URL. Not validated — a malformed URL degrades link behavior
    /// during fallback resolution, never errors.
    pub url: String,

    /// Optional thumbnail URL; absent or empty means fallback resolution.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// Promotional emphasis flag.
    #[serde(default)]
    pub hot: bool,
}

/// In-memory tool catalog. Ordered, immutable after load.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Vec<ToolRecord>,
}

impl Catalog {
    /// Build a catalog from already-parsed records.
    pub fn from_records(records: Vec<ToolRecord>) -> Self {
        Self { records }
    }

    /// Parse a catalog from a JSON array of records.
    pub fn from_json_str(raw: &str) -> Result<Self> {
        let records: Vec<ToolRecord> = serde_json::from_str(raw)?;
        Ok(Self { records })
    }

    /// Load a catalog from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    /// All records, in insertion order.
    pub fn records(&self) -> &[ToolRecord] {
        &self.records
    }

    /// Record at the given position.
    pub fn get(&self, index: usize) -> Option<&ToolRecord> {
        self.records.get(index)
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
