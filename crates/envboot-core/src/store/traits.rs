//! Core traits and types for configuration stores

/// Information about a key in a store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyInfo {
    /// Whether the key is present (an empty value still counts as present)
    pub present: bool,
    /// Which store was asked
    pub source: String,
}

impl KeyInfo {
    pub fn new(present: bool, source: impl Into<String>) -> Self {
        Self {
            present,
            source: source.into(),
        }
    }

    pub fn not_found() -> Self {
        Self {
            present: false,
            source: "none".to_string(),
        }
    }
}

/// A read-only source of configuration values
///
/// Lookups are exact and case-sensitive. Stores return whatever they hold,
/// including empty strings; deciding what an empty value means is left to
/// the resolver.
pub trait ConfigStore: Send + Sync {
    /// Human-readable name of this store
    fn name(&self) -> &str;

    /// Retrieve a value by key
    fn get(&self, key: &str) -> Option<String>;

    /// Check if a key exists
    fn has(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Get information about a key
    fn get_info(&self, key: &str) -> KeyInfo {
        if self.has(key) {
            KeyInfo::new(true, self.name())
        } else {
            KeyInfo::not_found()
        }
    }
}
