//! Configuration structures.
//!
//! Configuration is loaded from a JSON config file or built from defaults.
//! Every section has a documented `Default` so a host can start with
//! `Config::default()` and override selectively.

use crate::types::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Global browser configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Filtering and pagination.
    #[serde(default)]
    pub browse: BrowseConfig,

    /// Image fallback resolution.
    #[serde(default)]
    pub media: MediaConfig,

    /// Share-link construction.
    #[serde(default)]
    pub share: ShareConfig,

    /// Cosmetic visitor counter.
    #[serde(default)]
    pub counter: CounterConfig,

    /// Decorative input effects.
    #[serde(default)]
    pub effects: EffectsConfig,
}

impl Config {
    /// Load configuration from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }
}

/// Filtering and pagination configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrowseConfig {
    /// Number of results revealed per page and per "load more" step.
    pub page_size: usize,
}

impl Default for BrowseConfig {
    fn default() -> Self {
        Self { page_size: 50 }
    }
}

/// Image fallback resolution configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaConfig {
    /// Logo service base URL; the record's hostname is appended as the path.
    pub logo_service: String,

    /// Generic placeholder shown when the record URL cannot be parsed.
    pub placeholder: String,
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            logo_service: "https://logo.clearbit.com".to_string(),
            placeholder: "https://placehold.co/400x300/101010/FFF?text=AI".to_string(),
        }
    }
}

/// Share-link construction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShareConfig {
    /// Directory name embedded in share texts.
    pub site_name: String,

    /// Short blurb appended to the long-form share text.
    pub tagline: String,
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            site_name: "Toolshelf".to_string(),
            tagline: "The ultimate AI directory!".to_string(),
        }
    }
}

/// Cosmetic visitor counter configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CounterConfig {
    /// Storage key the count is read from and written to.
    pub key: String,

    /// Starting value when the store has no prior count.
    pub seed: u64,

    /// Smallest per-load increment (inclusive).
    pub increment_min: u64,

    /// Largest per-load increment (inclusive).
    pub increment_max: u64,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            key: "toolshelf_visitor_count".to_string(),
            seed: 15_432,
            increment_min: 1,
            increment_max: 3,
        }
    }
}

/// Decorative input effects configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EffectsConfig {
    /// Lifetime of a cursor-trail dot before it self-removes.
    #[serde(with = "humantime_serde")]
    pub trail_ttl: Duration,

    /// Minimum spacing between accepted high-frequency input events
    /// (one display-refresh interval).
    #[serde(with = "humantime_serde")]
    pub throttle_interval: Duration,

    /// Scroll offset in pixels past which the scroll-to-top affordance shows.
    pub scroll_top_threshold: f64,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            trail_ttl: Duration::from_millis(800),
            throttle_interval: Duration::from_millis(16),
            scroll_top_threshold: 300.0,
        }
    }
}
