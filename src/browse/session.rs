//! Browse session — the controller shell over filter, pager, and render.
//!
//! Owns the single active `FilterState` and `Pager` and maps user actions to
//! state transitions. Every method runs to completion on one logical thread,
//! and the filter-changing paths reset pagination before the next render, so
//! no frame ever observes a mismatched (filter, visible-count) pair.

use crate::browse::filter::{filter, CategoryFilter, FilterState};
use crate::browse::pagination::Pager;
use crate::catalog::{Catalog, CategoryCounts, ToolRecord};
use crate::render::{present, Frame, OpenAction, ShareTarget};
use crate::types::{Config, Error, Result};
use rand::Rng;

/// Interactive browse state over one catalog.
#[derive(Debug)]
pub struct BrowseSession {
    catalog: Catalog,
    config: Config,
    filter: FilterState,
    pager: Pager,
    counts: CategoryCounts,
}

impl BrowseSession {
    /// Start a session with default filter state and one visible page.
    pub fn new(catalog: Catalog, config: Config) -> Self {
        let counts = CategoryCounts::tally(catalog.records());
        let pager = Pager::new(config.browse.page_size);
        Self {
            catalog,
            config,
            filter: FilterState::default(),
            pager,
            counts,
        }
    }

    /// Update the search text, reset pagination, re-render.
    pub fn set_search(&mut self, text: impl Into<String>) -> Frame {
        self.filter.search = text.into();
        self.pager.reset();
        self.frame()
    }

    /// Select a category, reset pagination, re-render.
    pub fn set_category(&mut self, category: CategoryFilter) -> Frame {
        self.filter.category = category;
        self.pager.reset();
        self.frame()
    }

    /// Reveal the next page of the current filtered set.
    pub fn load_more(&mut self) -> Frame {
        self.pager.advance();
        self.frame()
    }

    /// Render the current state without mutating it.
    pub fn frame(&self) -> Frame {
        let matched = self.matched();
        let visible = self.pager.visible_slice(&matched);
        let remaining = self.pager.remaining(matched.len());
        present(visible, matched.len(), remaining, &self.counts, &self.config)
    }

    /// "Surprise me" — an external open of one uniformly random record.
    ///
    /// Picks from the full catalog, not the filtered view. Errs on an empty
    /// catalog; hosts hide the affordance in that case.
    pub fn surprise_me<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<OpenAction> {
        let picked = self.catalog.pick_random(rng)?;
        Ok(OpenAction::new(picked.url.clone()))
    }

    /// Share the card at `visible_index` within the current window.
    pub fn share(&self, visible_index: usize, target: ShareTarget) -> Result<OpenAction> {
        let matched = self.matched();
        let visible = self.pager.visible_slice(&matched);
        let record = visible.get(visible_index).ok_or_else(|| {
            Error::not_found(format!("no visible tool at index {visible_index}"))
        })?;
        Ok(OpenAction::new(crate::render::share_url(
            target,
            &record.name,
            &record.url,
            &self.config.share,
        )))
    }

    /// Current filter selection.
    pub fn filter_state(&self) -> &FilterState {
        &self.filter
    }

    /// Currently visible result count.
    pub fn visible_count(&self) -> usize {
        self.pager.visible_count()
    }

    /// The catalog this session browses.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    fn matched(&self) -> Vec<&ToolRecord> {
        filter(self.catalog.records(), &self.filter)
    }
}
