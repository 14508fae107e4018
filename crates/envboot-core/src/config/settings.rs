//! YAML-backed bootstrap settings

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::dotenv::DEFAULT_OVERRIDE_FILE;

/// Errors that can occur while reading settings
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Top-level bootstrap settings
///
/// ```yaml
/// override_file: config/.env.local
/// media:
///   cloud_name_key: MEDIA_CLOUD
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BootstrapSettings {
    /// Override file path, relative to the working directory
    pub override_file: PathBuf,

    /// Media client wiring
    pub media: MediaSettings,
}

impl Default for BootstrapSettings {
    fn default() -> Self {
        Self {
            override_file: PathBuf::from(DEFAULT_OVERRIDE_FILE),
            media: MediaSettings::default(),
        }
    }
}

/// Which keys feed the media client, and where its API lives
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MediaSettings {
    pub cloud_name_key: String,
    pub api_key_key: String,
    pub api_secret_key: String,
    pub api_base_url: String,
    pub delivery_base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for MediaSettings {
    fn default() -> Self {
        Self {
            cloud_name_key: "CLOUD_NAME".to_string(),
            api_key_key: "API_KEY".to_string(),
            api_secret_key: "API_SECRET".to_string(),
            api_base_url: "https://api.cloudinary.com".to_string(),
            delivery_base_url: "https://res.cloudinary.com".to_string(),
            timeout_secs: 60,
        }
    }
}

impl BootstrapSettings {
    /// Load settings from a YAML file; a missing file yields defaults
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Parse settings from YAML text
    pub fn from_yaml_str(content: &str) -> ConfigResult<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Use a different override file
    pub fn with_override_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.override_file = path.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let settings = BootstrapSettings::default();
        assert_eq!(settings.override_file, PathBuf::from(".env"));
        assert_eq!(settings.media.cloud_name_key, "CLOUD_NAME");
        assert_eq!(settings.media.api_key_key, "API_KEY");
        assert_eq!(settings.media.api_secret_key, "API_SECRET");
        assert_eq!(settings.media.timeout_secs, 60);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let yaml = "override_file: config/.env.local\nmedia:\n  cloud_name_key: MEDIA_CLOUD\n";
        let settings = BootstrapSettings::from_yaml_str(yaml).unwrap();

        assert_eq!(settings.override_file, PathBuf::from("config/.env.local"));
        assert_eq!(settings.media.cloud_name_key, "MEDIA_CLOUD");
        assert_eq!(settings.media.api_key_key, "API_KEY");
        assert_eq!(settings.media.api_base_url, "https://api.cloudinary.com");
    }

    #[test]
    fn test_empty_yaml_is_default() {
        assert_eq!(BootstrapSettings::from_yaml_str("  \n").unwrap(), BootstrapSettings::default());
    }

    #[test]
    fn test_invalid_yaml() {
        let err = BootstrapSettings::from_yaml_str("media: [unclosed").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("Failed to parse YAML"));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let settings = BootstrapSettings::load(dir.path().join("envboot.yaml")).unwrap();
        assert_eq!(settings, BootstrapSettings::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("envboot.yaml");
        fs::write(&path, "override_file: .env.test\nmedia:\n  timeout_secs: 5\n").unwrap();

        let settings = BootstrapSettings::load(&path).unwrap();
        assert_eq!(settings.override_file, PathBuf::from(".env.test"));
        assert_eq!(settings.media.timeout_secs, 5);
    }

    #[test]
    fn test_with_override_file() {
        let settings = BootstrapSettings::default().with_override_file("/srv/app/.env");
        assert_eq!(settings.override_file, PathBuf::from("/srv/app/.env"));
        assert_eq!(settings.media, MediaSettings::default());
    }
}
