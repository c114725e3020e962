//! In-memory counter store for tests and hosts without persistence.

use crate::counter::CounterStore;
use std::collections::HashMap;

/// Volatile store; contents die with the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: HashMap<String, u64>,
}

impl CounterStore for MemoryStore {
    fn load(&self, key: &str) -> Option<u64> {
        self.values.get(key).copied()
    }

    fn store(&mut self, key: &str, value: u64) {
        self.values.insert(key.to_string(), value);
    }
}
