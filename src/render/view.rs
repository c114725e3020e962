//! Renderable view models.
//!
//! A `ToolView` is everything the host needs to draw one card: display
//! strings, the resolved image slot, the visit link, and the prefilled share
//! payloads. Building views never touches shared state.

use crate::catalog::ToolRecord;
use crate::render::image::ImageSlot;
use crate::render::share::{ShareLinks, ShareTarget};
use crate::types::Config;
use serde::Serialize;

/// How the host must open an external URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OpenDisposition {
    /// A fresh external context with no opener back-reference to the
    /// current page.
    NewContextNoOpener,
}

/// Outgoing link on a rendered card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VisitLink {
    pub href: String,
    pub disposition: OpenDisposition,
}

/// An external open requested by a user action (visit, share, random pick).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OpenAction {
    pub url: String,
    pub disposition: OpenDisposition,
}

impl OpenAction {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            disposition: OpenDisposition::NewContextNoOpener,
        }
    }
}

/// Presentation-ready projection of one record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolView {
    pub name: String,
    pub description: String,
    pub category: String,
    pub hot: bool,
    pub image: ImageSlot,
    pub visit: VisitLink,
    pub share: ShareLinks,
}

impl ToolView {
    /// Project a record into its renderable form.
    pub fn from_record(record: &ToolRecord, config: &Config) -> Self {
        Self {
            name: record.name.clone(),
            description: record.description.clone(),
            category: record.category.clone(),
            hot: record.hot,
            image: ImageSlot::resolve(record, &config.media),
            visit: VisitLink {
                href: record.url.clone(),
                disposition: OpenDisposition::NewContextNoOpener,
            },
            share: ShareLinks::build(&record.name, &record.url, &config.share),
        }
    }

    /// The prefilled share URL for one platform, ready for an external open.
    pub fn share_action(&self, target: ShareTarget) -> OpenAction {
        OpenAction::new(self.share.get(target).to_string())
    }
}
