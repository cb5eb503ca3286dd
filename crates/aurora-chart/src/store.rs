// File: crates/aurora-chart/src/store.rs
// Summary: Injectable string preference store (memory and no-op implementations).

use std::collections::HashMap;

/// Get/set a string preference by key. The library ships memory and no-op
/// stores; hosts that want real persistence implement this themselves.
pub trait PrefStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// In-memory store, useful for tests and short-lived hosts.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PrefStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }
}

/// Store that remembers nothing. The default for tests.
#[derive(Debug, Default)]
pub struct NoopStore;

impl PrefStore for NoopStore {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&mut self, _key: &str, _value: &str) {}
}
