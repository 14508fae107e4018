//! Media client configuration

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::{MediaError, MediaResult};

/// The three values the media client is built from
///
/// Field names are the ones the media service expects (`cloud_name`,
/// `api_key`, `api_secret`). Each may be absent; absence is only an error
/// once an operation needs the value.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaClientConfig {
    pub cloud_name: Option<String>,
    pub api_key: Option<String>,
    pub api_secret: Option<String>,
}

impl MediaClientConfig {
    pub fn new(
        cloud_name: Option<String>,
        api_key: Option<String>,
        api_secret: Option<String>,
    ) -> Self {
        Self {
            cloud_name,
            api_key,
            api_secret,
        }
    }

    pub fn cloud_name(&self) -> MediaResult<&str> {
        required(&self.cloud_name, "cloud_name")
    }

    pub fn api_key(&self) -> MediaResult<&str> {
        required(&self.api_key, "api_key")
    }

    pub fn api_secret(&self) -> MediaResult<&str> {
        required(&self.api_secret, "api_secret")
    }

    /// Names of fields that are absent or empty
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("cloud_name", &self.cloud_name),
            ("api_key", &self.api_key),
            ("api_secret", &self.api_secret),
        ]
        .into_iter()
        .filter(|(_, value)| value.as_deref().map_or(true, str::is_empty))
        .map(|(name, _)| name)
        .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }
}

fn required<'a>(value: &'a Option<String>, field: &'static str) -> MediaResult<&'a str> {
    match value.as_deref() {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(MediaError::MissingCredential(field)),
    }
}

// The secret never shows up in logs
impl fmt::Debug for MediaClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MediaClientConfig")
            .field("cloud_name", &self.cloud_name)
            .field("api_key", &self.api_key)
            .field("api_secret", &self.api_secret.as_ref().map(|_| "***"))
            .finish()
    }
}
