//! Per-category counts over the full record set.
//!
//! Computed fresh from the unfiltered catalog, independent of the current
//! filter selection. Drives the count badges next to each category label and
//! the "All" pseudo-category total.

use crate::catalog::ToolRecord;
use serde::Serialize;

/// Category label → record count, in first-seen label order.
///
/// Badge rows keep the order labels first appear in the data.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CategoryCounts {
    entries: Vec<(String, usize)>,
    total: usize,
}

impl CategoryCounts {
    /// Tally categories over the full record set.
    pub fn tally(records: &[ToolRecord]) -> Self {
        let mut entries: Vec<(String, usize)> = Vec::new();
        for record in records {
            match entries.iter_mut().find(|(label, _)| *label == record.category) {
                Some((_, count)) => *count += 1,
                None => entries.push((record.category.clone(), 1)),
            }
        }
        Self {
            entries,
            total: records.len(),
        }
    }

    /// Count for one category label; 0 for labels never seen.
    pub fn get(&self, label: &str) -> usize {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, count)| *count)
            .unwrap_or(0)
    }

    /// Total record count — the "All" pseudo-category.
    pub fn total(&self) -> usize {
        self.total
    }

    /// (label, count) pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(label, count)| (label.as_str(), *count))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::test_fixtures::record;

    #[test]
    fn test_tally_counts_and_total() {
        let records = vec![
            record("A", "Chat"),
            record("B", "Image"),
            record("C", "Chat"),
            record("D", "Code"),
        ];
        let counts = CategoryCounts::tally(&records);

        assert_eq!(counts.get("Chat"), 2);
        assert_eq!(counts.get("Image"), 1);
        assert_eq!(counts.get("Code"), 1);
        assert_eq!(counts.get("Video"), 0);
        assert_eq!(counts.total(), 4);
    }

    #[test]
    fn test_counts_sum_to_total() {
        let records = vec![
            record("A", "Chat"),
            record("B", "Image"),
            record("C", "Chat"),
        ];
        let counts = CategoryCounts::tally(&records);
        let sum: usize = counts.iter().map(|(_, count)| count).sum();
        assert_eq!(sum, counts.total());
    }

    #[test]
    fn test_first_seen_order() {
        let records = vec![
            record("A", "Zeta"),
            record("B", "Alpha"),
            record("C", "Zeta"),
        ];
        let counts = CategoryCounts::tally(&records);
        let labels: Vec<&str> = counts.iter().map(|(label, _)| label).collect();
        assert_eq!(labels, vec!["Zeta", "Alpha"]);
    }

    #[test]
    fn test_empty_input() {
        let counts = CategoryCounts::tally(&[]);
        assert!(counts.is_empty());
        assert_eq!(counts.total(), 0);
    }
}
