//! Builds the media client from resolved configuration

use std::sync::Arc;

use crate::resolver::EnvironmentResolver;
use super::client::MediaClient;
use super::config::MediaClientConfig;
use super::error::MediaResult;

/// Assembles a `MediaClientConfig` from the resolver and builds the client
///
/// Key names come from `BootstrapSettings::media` (`CLOUD_NAME`, `API_KEY`,
/// `API_SECRET` by default). Nothing is validated here.
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use envboot_core::{EnvironmentResolver, MediaClientFactory};
///
/// let resolver = Arc::new(EnvironmentResolver::from_default_env());
/// let client = MediaClientFactory::new(resolver).build_client()?;
/// # Ok::<(), envboot_core::MediaError>(())
/// ```
#[derive(Debug, Clone)]
pub struct MediaClientFactory {
    resolver: Arc<EnvironmentResolver>,
}

impl MediaClientFactory {
    pub fn new(resolver: Arc<EnvironmentResolver>) -> Self {
        Self { resolver }
    }

    pub fn resolver(&self) -> &Arc<EnvironmentResolver> {
        &self.resolver
    }

    /// Resolve the three credentials
    pub fn config(&self) -> MediaClientConfig {
        let keys = &self.resolver.settings().media;
        MediaClientConfig::new(
            self.resolver.get(&keys.cloud_name_key),
            self.resolver.get(&keys.api_key_key),
            self.resolver.get(&keys.api_secret_key),
        )
    }

    /// Build a client from the current resolver state
    pub fn build_client(&self) -> MediaResult<MediaClient> {
        let config = self.config();
        let missing = config.missing_fields();
        if !missing.is_empty() {
            crate::log_debug!(
                self.resolver.logger(),
                "media client built without {}",
                missing.join(", ")
            );
        }
        MediaClient::with_settings(config, &self.resolver.settings().media)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BootstrapSettings;
    use crate::logging::{NoOpLogger, RecordLevel, RecordingLogger};
    use crate::media::MediaError;
    use crate::store::{ConfigStore, MemoryStore};
    use std::fs;
    use tempfile::tempdir;

    fn ambient(entries: &[(&str, &str)]) -> Arc<dyn ConfigStore> {
        Arc::new(MemoryStore::from_entries(
            entries.iter().map(|(k, v)| (k.to_string(), v.to_string())),
        ))
    }

    #[test]
    fn test_config_from_override_and_ambient() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(".env");
        fs::write(&path, "CLOUD_NAME=demo\nAPI_KEY=abc123\n").unwrap();

        let resolver = EnvironmentResolver::with_ambient(
            BootstrapSettings::default().with_override_file(path),
            ambient(&[("API_KEY", "env-value"), ("API_SECRET", "shh")]),
            Arc::new(NoOpLogger::new()),
        );
        resolver.initialize();

        let factory = MediaClientFactory::new(Arc::new(resolver));
        assert_eq!(
            factory.config(),
            MediaClientConfig::new(
                Some("demo".to_string()),
                Some("abc123".to_string()),
                Some("shh".to_string()),
            )
        );

        let client = factory.build_client().unwrap();
        assert_eq!(client.cloud_name().unwrap(), "demo");
    }

    #[test]
    fn test_build_client_is_deterministic() {
        let dir = tempdir().unwrap();
        let resolver = EnvironmentResolver::with_ambient(
            BootstrapSettings::default().with_override_file(dir.path().join(".env")),
            ambient(&[("CLOUD_NAME", "demo"), ("API_KEY", "k"), ("API_SECRET", "s")]),
            Arc::new(NoOpLogger::new()),
        );
        resolver.initialize();
        let factory = MediaClientFactory::new(Arc::new(resolver));

        let first = factory.build_client().unwrap();
        let second = factory.build_client().unwrap();
        assert_eq!(first.config(), second.config());
    }

    #[test]
    fn test_missing_values_do_not_fail_construction() {
        let dir = tempdir().unwrap();
        let logger = Arc::new(RecordingLogger::new());
        let resolver = EnvironmentResolver::with_ambient(
            BootstrapSettings::default().with_override_file(dir.path().join(".env")),
            ambient(&[("CLOUD_NAME", "demo")]),
            logger.clone(),
        );
        resolver.initialize();

        let client = MediaClientFactory::new(Arc::new(resolver)).build_client().unwrap();
        assert_eq!(client.config().api_key, None);
        assert!(matches!(client.sign(&Default::default()), Err(MediaError::MissingCredential("api_secret"))));

        let debug = logger.messages_at(RecordLevel::Debug);
        assert!(debug.iter().any(|m| m == "media client built without api_key, api_secret"));
    }

    #[test]
    fn test_custom_key_names() {
        let dir = tempdir().unwrap();
        let mut settings = BootstrapSettings::default().with_override_file(dir.path().join(".env"));
        settings.media.cloud_name_key = "MEDIA_CLOUD".to_string();

        let resolver = EnvironmentResolver::with_ambient(
            settings,
            ambient(&[("MEDIA_CLOUD", "tenant"), ("CLOUD_NAME", "ignored")]),
            Arc::new(NoOpLogger::new()),
        );
        resolver.initialize();

        let config = MediaClientFactory::new(Arc::new(resolver)).config();
        assert_eq!(config.cloud_name.as_deref(), Some("tenant"));
    }
}
