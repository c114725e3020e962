//! # Toolshelf Core - Catalog Browsing Pipeline
//!
//! Host-agnostic core of a tool-directory browser providing:
//! - Category + free-text filtering over an immutable record store
//! - Incremental "load more" pagination with reset-on-filter-change
//! - Per-category count badges
//! - A render pipeline emitting presentation-ready view models with
//!   deterministic image fallback and prefilled share links
//! - Random pick, a cosmetic visitor counter, and decorative input effects
//!
//! ## Architecture
//!
//! The session owns all mutable state and re-runs the pipeline on every
//! user action:
//! ```text
//!   user action →  ┌─────────────────────────────────┐
//!                  │        BrowseSession            │
//!                  │  ┌─────────┐ ┌─────────┐        │
//!                  │  │ Filter  │→│  Pager  │        │
//!                  │  │ Engine  │ │ (window)│        │
//!                  │  └─────────┘ └────┬────┘        │
//!                  │  ┌─────────┐ ┌────▼────┐        │
//!                  │  │Category │ │ Render  │→ Frame │ → host draws it
//!                  │  │ Counts  │→│Pipeline │        │
//!                  │  └─────────┘ └─────────┘        │
//!                  └─────────────────────────────────┘
//! ```

// Enforce strict safety at compile time
#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]
#![warn(rust_2018_idioms)]

// Re-export public API
pub mod browse;
pub mod catalog;
pub mod counter;
pub mod effects;
pub mod render;
pub mod types;

// Internal utilities
pub mod observability;

pub use types::{Config, Error, Result};
