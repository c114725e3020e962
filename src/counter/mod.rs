//! Cosmetic visitor counter.
//!
//! Reads one integer under a fixed key, bumps it by a small random amount on
//! each load, writes it back best-effort, and renders it with grouping
//! separators. Strictly decorative: storage failure is silent and never
//! blocks anything else.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::types::CounterConfig;
use rand::Rng;
use std::fmt;

/// Key-value storage for the counter.
///
/// Implementations swallow their own I/O errors (debug-logged); a failure
/// surfaces as a missing count, nothing else.
pub trait CounterStore {
    /// Stored count for a key, if any.
    fn load(&self, key: &str) -> Option<u64>;

    /// Persist a count, best effort.
    fn store(&mut self, key: &str, value: u64);
}

/// The visitor counter itself.
#[derive(Debug)]
pub struct VisitorCounter<S> {
    store: S,
    config: CounterConfig,
}

impl<S: CounterStore> VisitorCounter<S> {
    pub fn new(store: S, config: CounterConfig) -> Self {
        Self { store, config }
    }

    /// One page load: read (or seed), bump by a random 1..=3, write back.
    pub fn bump<R: Rng + ?Sized>(&mut self, rng: &mut R) -> DisplayCount {
        let current = self
            .store
            .load(&self.config.key)
            .unwrap_or(self.config.seed);
        let step = rng.gen_range(self.config.increment_min..=self.config.increment_max);
        let next = current.saturating_add(step);
        self.store.store(&self.config.key, next);
        DisplayCount(next)
    }
}

/// A count formatted with thousands separators when displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayCount(pub u64);

impl fmt::Display for DisplayCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.0.to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }
        f.write_str(&grouped)
    }
}
