//! Render pipeline — visible records in, presentation-ready frame out.
//!
//! The host draws whatever a [`Frame`] says and nothing else: the card list,
//! the explicit no-results state, the load-more affordance with its
//! remaining-count label, and the category badges. The pipeline itself is a
//! pure projection; the only later mutation is each slot's one-shot image
//! substitution.

pub mod image;
pub mod share;
pub mod view;

pub use image::{ImageSlot, INLINE_PLACEHOLDER};
pub use share::{share_url, ShareLinks, ShareTarget};
pub use view::{OpenAction, OpenDisposition, ToolView, VisitLink};

use crate::catalog::{CategoryCounts, ToolRecord};
use crate::types::Config;
use serde::Serialize;

/// Load-more affordance state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LoadMore {
    /// Filtered results still hidden below the window.
    pub remaining: usize,
}

impl LoadMore {
    /// Button label, e.g. `Load More (70 left)`.
    pub fn label(&self) -> String {
        format!("Load More ({} left)", self.remaining)
    }
}

/// One category badge row: label plus record count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryBadge {
    pub label: String,
    pub count: usize,
}

/// Everything the host needs to draw the current browse state.
#[derive(Debug, Clone, Serialize)]
pub struct Frame {
    /// The visible window, in catalog order.
    pub views: Vec<ToolView>,

    /// Size of the full filtered set (not just the window).
    pub total_matches: usize,

    /// True iff the filtered set is empty — the host shows an explicit
    /// empty state instead of a blank list.
    pub no_results: bool,

    /// Present iff more filtered results remain below the window. Always
    /// `None` in the no-results state.
    pub load_more: Option<LoadMore>,

    /// Per-category badges over the FULL record set, first-seen order.
    pub badges: Vec<CategoryBadge>,

    /// Count for the "All" pseudo-category badge.
    pub all_count: usize,
}

/// Project the visible slice and aggregate counts into a frame.
pub fn present(
    visible: &[&ToolRecord],
    total_matches: usize,
    remaining: usize,
    counts: &CategoryCounts,
    config: &Config,
) -> Frame {
    let views = visible
        .iter()
        .map(|record| ToolView::from_record(record, config))
        .collect();

    Frame {
        views,
        total_matches,
        no_results: total_matches == 0,
        load_more: (remaining > 0).then_some(LoadMore { remaining }),
        badges: counts
            .iter()
            .map(|(label, count)| CategoryBadge {
                label: label.to_string(),
                count,
            })
            .collect(),
        all_count: counts.total(),
    }
}
