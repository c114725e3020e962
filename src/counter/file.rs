//! File-backed counter store.
//!
//! One JSON object file mapping keys to counts. Every I/O or parse failure
//! is swallowed and debug-logged — an unavailable store means the counter
//! simply starts from its seed again.

use crate::counter::CounterStore;
use std::collections::HashMap;
use std::path::PathBuf;

/// Counter store persisted as a small JSON map on disk.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_map(&self) -> Option<HashMap<String, u64>> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(error) => {
                tracing::debug!(path = %self.path.display(), %error, "counter file unreadable");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(map) => Some(map),
            Err(error) => {
                tracing::debug!(path = %self.path.display(), %error, "counter file unparseable");
                None
            }
        }
    }
}

impl CounterStore for FileStore {
    fn load(&self, key: &str) -> Option<u64> {
        self.read_map()?.get(key).copied()
    }

    fn store(&mut self, key: &str, value: u64) {
        let mut map = self.read_map().unwrap_or_default();
        map.insert(key.to_string(), value);

        let serialized = match serde_json::to_string(&map) {
            Ok(serialized) => serialized,
            Err(error) => {
                tracing::debug!(%error, "counter map failed to serialize");
                return;
            }
        };
        if let Err(error) = std::fs::write(&self.path, serialized) {
            tracing::debug!(path = %self.path.display(), %error, "counter file write failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::counter::VisitorCounter;
    use crate::types::CounterConfig;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_persists_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("counter.json");

        let mut store = FileStore::new(&path);
        store.store("visits", 42);
        assert_eq!(store.load("visits"), Some(42));

        let reopened = FileStore::new(&path);
        assert_eq!(reopened.load("visits"), Some(42));
        assert_eq!(reopened.load("other"), None);
    }

    #[test]
    fn test_missing_file_is_silent() {
        let store = FileStore::new("/nonexistent/dir/counter.json");
        assert_eq!(store.load("visits"), None);
    }

    #[test]
    fn test_unwritable_path_is_silent() {
        let mut store = FileStore::new("/nonexistent/dir/counter.json");
        // Must not panic; the failure is swallowed
        store.store("visits", 1);
        assert_eq!(store.load("visits"), None);
    }

    #[test]
    fn test_corrupt_file_restarts_from_seed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("counter.json");
        std::fs::write(&path, "{corrupt").unwrap();

        let config = CounterConfig::default();
        let mut counter = VisitorCounter::new(FileStore::new(&path), config.clone());
        let mut rng = StdRng::seed_from_u64(3);

        let shown = counter.bump(&mut rng);
        assert!(shown.0 >= config.seed + config.increment_min);
        // The bump healed the file
        assert_eq!(FileStore::new(&path).load(&config.key), Some(shown.0));
    }
}
