//! Process environment store

use std::env;

use super::traits::ConfigStore;

/// Read-only view of the process environment
///
/// This is the ambient source: values supplied by the hosting platform.
/// Nothing in this crate writes to the process environment, so the view is
/// only ever changed by the embedding process itself.
///
/// Keys that the platform cannot hold (empty, or containing `=` or NUL)
/// resolve to absent instead of reaching `env::var`, which panics on them.
/// Values that are not valid unicode are also reported as absent.
///
/// # Example
///
/// ```
/// use envboot_core::store::{ConfigStore, EnvStore};
///
/// let store = EnvStore::new();
/// let _cloud = store.get("CLOUD_NAME");
/// ```
#[derive(Debug, Default)]
pub struct EnvStore {
    _private: (),
}

impl EnvStore {
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl ConfigStore for EnvStore {
    fn name(&self) -> &str {
        "environment"
    }

    fn get(&self, key: &str) -> Option<String> {
        // env::var panics on keys containing '=' or NUL
        if key.is_empty() || key.contains('=') || key.contains('\0') {
            return None;
        }
        env::var(key).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_store_name() {
        let store = EnvStore::new();
        assert_eq!(store.name(), "environment");
    }

    #[test]
    fn test_env_store_get_direct() {
        env::set_var("ENVBOOT_TEST_DIRECT_7731", "test_value");

        let store = EnvStore::new();
        assert_eq!(store.get("ENVBOOT_TEST_DIRECT_7731"), Some("test_value".to_string()));

        env::remove_var("ENVBOOT_TEST_DIRECT_7731");
    }

    #[test]
    fn test_env_store_keeps_empty_values() {
        env::set_var("ENVBOOT_TEST_EMPTY_7731", "");

        let store = EnvStore::new();
        assert_eq!(store.get("ENVBOOT_TEST_EMPTY_7731"), Some(String::new()));
        assert!(store.has("ENVBOOT_TEST_EMPTY_7731"));

        env::remove_var("ENVBOOT_TEST_EMPTY_7731");
    }

    #[test]
    fn test_env_store_is_case_sensitive() {
        env::set_var("ENVBOOT_TEST_CASE_7731", "upper");

        let store = EnvStore::new();
        assert_eq!(store.get("envboot_test_case_7731"), None);

        env::remove_var("ENVBOOT_TEST_CASE_7731");
    }

    #[test]
    fn test_env_store_invalid_keys() {
        let store = EnvStore::new();
        assert_eq!(store.get(""), None);
        assert_eq!(store.get("A=B"), None);
        assert_eq!(store.get("A\0B"), None);
    }

    #[test]
    fn test_env_store_get_info() {
        env::set_var("ENVBOOT_TEST_INFO_7731", "value");

        let store = EnvStore::new();
        let info = store.get_info("ENVBOOT_TEST_INFO_7731");
        assert!(info.present);
        assert_eq!(info.source, "environment");

        assert!(!store.get_info("ENVBOOT_TEST_NONEXISTENT_7731").present);

        env::remove_var("ENVBOOT_TEST_INFO_7731");
    }
}
