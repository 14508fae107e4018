//! In-memory store

use std::collections::HashMap;

use super::traits::ConfigStore;

/// Immutable in-memory store
///
/// Holds the override entries read from the local `.env` file. It is built
/// once and never changes afterwards, so it can be shared across threads
/// without locking. Tests also use it as a stand-in for the process
/// environment.
///
/// # Example
///
/// ```
/// use envboot_core::store::{ConfigStore, MemoryStore};
///
/// let store = MemoryStore::from_entries(vec![
///     ("CLOUD_NAME".to_string(), "demo".to_string()),
/// ]);
/// assert_eq!(store.get("CLOUD_NAME"), Some("demo".to_string()));
/// ```
#[derive(Debug, Clone)]
pub struct MemoryStore {
    name: String,
    values: HashMap<String, String>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::named("memory")
    }

    /// Create an empty store reporting `name` as its source
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: HashMap::new(),
        }
    }

    /// Build a store from ordered entries; later duplicates win
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Self::new().with_entries(entries)
    }

    /// Rename the store
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Add ordered entries; later duplicates win
    pub fn with_entries<I>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        for (key, value) in entries {
            self.values.insert(key, value);
        }
        self
    }

    /// Get the number of keys in the store
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Keys held by the store, sorted
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.values.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }
}

impl ConfigStore for MemoryStore {
    fn name(&self) -> &str {
        &self.name
    }

    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}
