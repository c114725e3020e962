//! Share-link construction.
//!
//! Builds platform-specific prefilled share URLs embedding a record's name
//! and URL, percent-encoded. The host opens the result in a new external
//! context; nothing here performs network I/O.

use crate::types::ShareConfig;
use serde::{Deserialize, Serialize};

/// Supported share platforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShareTarget {
    Twitter,
    WhatsApp,
}

/// Both share payloads for one rendered card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShareLinks {
    pub twitter: String,
    pub whatsapp: String,
}

impl ShareLinks {
    /// Construct the per-record payload pair.
    pub fn build(name: &str, tool_url: &str, share: &ShareConfig) -> Self {
        Self {
            twitter: share_url(ShareTarget::Twitter, name, tool_url, share),
            whatsapp: share_url(ShareTarget::WhatsApp, name, tool_url, share),
        }
    }

    pub fn get(&self, target: ShareTarget) -> &str {
        match target {
            ShareTarget::Twitter => &self.twitter,
            ShareTarget::WhatsApp => &self.whatsapp,
        }
    }
}

/// Build the prefilled share URL for one record.
pub fn share_url(target: ShareTarget, name: &str, tool_url: &str, share: &ShareConfig) -> String {
    match target {
        ShareTarget::Twitter => {
            let text = format!(
                "Check out {} on {} - {}",
                name, share.site_name, share.tagline
            );
            format!(
                "https://twitter.com/intent/tweet?text={}&url={}",
                urlencoding::encode(&text),
                urlencoding::encode(tool_url)
            )
        }
        ShareTarget::WhatsApp => {
            let text = format!("Check out {}: {}", name, tool_url);
            format!("https://wa.me/?text={}", urlencoding::encode(&text))
        }
    }
}
