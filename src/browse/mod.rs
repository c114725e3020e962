//! Browsing pipeline — filter engine, pagination window, session shell.
//!
//! The session wires user actions (search text, category selection, load
//! more, random pick, share) through filter → pager → render in sequence.

pub mod filter;
pub mod pagination;
pub mod session;

pub use filter::{filter, CategoryFilter, FilterState};
pub use pagination::Pager;
pub use session::BrowseSession;
