//! Pagination controller — the incremental "load more" window.
//!
//! Tracks how many filtered results are currently visible. Reset on every
//! filter change, advanced by one page step on load-more. Clamping happens at
//! slice time, so advancing past the end is always safe.

/// Visible-window state over a filtered result list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pager {
    page_size: usize,
    visible: usize,
}

impl Pager {
    /// Start with one page visible.
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size,
            visible: page_size,
        }
    }

    /// Snap back to the first page. Must run before any render that follows a
    /// filter change, so no window ever spans a different filtered set.
    pub fn reset(&mut self) {
        self.visible = self.page_size;
    }

    /// Reveal one more page. No upper bound here — the slice clamps.
    pub fn advance(&mut self) {
        self.visible += self.page_size;
    }

    /// Currently visible prefix of the filtered list.
    pub fn visible_slice<'a, T>(&self, filtered: &'a [T]) -> &'a [T] {
        &filtered[..filtered.len().min(self.visible)]
    }

    /// How many filtered results remain hidden; 0 when the window covers all.
    pub fn remaining(&self, filtered_len: usize) -> usize {
        filtered_len.saturating_sub(self.visible)
    }

    pub fn visible_count(&self) -> usize {
        self.visible
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_one_page() {
        let pager = Pager::new(50);
        assert_eq!(pager.visible_count(), 50);
    }

    #[test]
    fn test_advance_then_reset() {
        let mut pager = Pager::new(50);
        pager.advance();
        pager.advance();
        assert_eq!(pager.visible_count(), 150);

        pager.reset();
        assert_eq!(pager.visible_count(), 50);
    }

    #[test]
    fn test_slice_clamps_to_filtered_len() {
        let pager = Pager::new(50);
        let filtered: Vec<u32> = (0..40).collect();
        assert_eq!(pager.visible_slice(&filtered).len(), 40);
        assert_eq!(pager.remaining(filtered.len()), 0);
    }

    #[test]
    fn test_slice_clamps_to_visible_count() {
        let mut pager = Pager::new(50);
        let filtered: Vec<u32> = (0..120).collect();

        assert_eq!(pager.visible_slice(&filtered).len(), 50);
        assert_eq!(pager.remaining(filtered.len()), 70);

        pager.advance();
        assert_eq!(pager.visible_slice(&filtered).len(), 100);
        assert_eq!(pager.remaining(filtered.len()), 20);

        pager.advance();
        assert_eq!(pager.visible_slice(&filtered).len(), 120);
        assert_eq!(pager.remaining(filtered.len()), 0);
    }

    #[test]
    fn test_remaining_zero_iff_window_covers_all() {
        let mut pager = Pager::new(50);
        for filtered_len in [0usize, 1, 49, 50, 51, 120] {
            pager.reset();
            while pager.remaining(filtered_len) > 0 {
                pager.advance();
            }
            assert!(pager.visible_count() >= filtered_len);
        }
    }

    #[test]
    fn test_empty_filtered_list() {
        let pager = Pager::new(50);
        let filtered: Vec<u32> = Vec::new();
        assert!(pager.visible_slice(&filtered).is_empty());
        assert_eq!(pager.remaining(0), 0);
    }
}
