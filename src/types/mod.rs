//! Core types for the Toolshelf browser.
//!
//! This module provides foundational types used throughout the system:
//! - **Errors**: Application error types with thiserror derives
//! - **Config**: Configuration structures for browsing, media, share, counter,
//!   and effects

mod config;
mod errors;

pub use config::{
    BrowseConfig, Config, CounterConfig, EffectsConfig, MediaConfig, ShareConfig,
};
pub use errors::{Error, Result};
