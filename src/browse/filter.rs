//! Filter engine — category + free-text predicates over the record store.
//!
//! Pure and deterministic: same inputs always yield the same ordered subset.
//! Category labels match exactly and case-sensitively; search text matches
//! case-insensitively against name and description.

use crate::catalog::ToolRecord;
use serde::{Deserialize, Serialize};

/// Category restriction: everything, or one exact label.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CategoryFilter {
    /// No restriction — the "All" pseudo-category.
    #[default]
    All,
    /// Exactly one category label.
    Named(String),
}

impl CategoryFilter {
    /// Parse a label, mapping the literal "All" to the unrestricted filter.
    pub fn named(label: impl Into<String>) -> Self {
        let label = label.into();
        if label == "All" {
            Self::All
        } else {
            Self::Named(label)
        }
    }

    /// Whether a record category passes this filter.
    pub fn matches(&self, category: &str) -> bool {
        match self {
            Self::All => true,
            Self::Named(label) => label == category,
        }
    }
}

impl From<String> for CategoryFilter {
    fn from(label: String) -> Self {
        Self::named(label)
    }
}

impl From<CategoryFilter> for String {
    fn from(filter: CategoryFilter) -> Self {
        match filter {
            CategoryFilter::All => "All".to_string(),
            CategoryFilter::Named(label) => label,
        }
    }
}

/// Current category + search-text selection.
///
/// One active instance per session; mutated by input handlers, never
/// persisted across sessions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterState {
    #[serde(default)]
    pub category: CategoryFilter,

    /// Free-text query; matched case-insensitively. Empty matches everything.
    #[serde(default)]
    pub search: String,
}

/// Select the ordered subset of `records` matching both predicates.
///
/// Output preserves input order; an empty input yields an empty output.
pub fn filter<'a>(records: &'a [ToolRecord], state: &FilterState) -> Vec<&'a ToolRecord> {
    let needle = state.search.to_lowercase();
    records
        .iter()
        .filter(|record| state.category.matches(&record.category) && matches_search(record, &needle))
        .collect()
}

fn matches_search(record: &ToolRecord, lowercased_needle: &str) -> bool {
    if lowercased_needle.is_empty() {
        return true;
    }
    record.name.to_lowercase().contains(lowercased_needle)
        || record.description.to_lowercase().contains(lowercased_needle)
}
