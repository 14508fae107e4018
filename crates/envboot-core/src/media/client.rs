//! Media storage API client

use std::collections::BTreeMap;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::config::MediaSettings;
use super::config::MediaClientConfig;
use super::error::{MediaError, MediaResult};
use super::signing::sign_params;

/// Kind of asset an operation targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResourceType {
    #[default]
    Image,
    Video,
    Raw,
    /// Let the service detect the type (upload only)
    Auto,
}

impl ResourceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceType::Image => "image",
            ResourceType::Video => "video",
            ResourceType::Raw => "raw",
            ResourceType::Auto => "auto",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "image" => Some(ResourceType::Image),
            "video" => Some(ResourceType::Video),
            "raw" => Some(ResourceType::Raw),
            "auto" => Some(ResourceType::Auto),
            _ => None,
        }
    }
}

/// Optional upload parameters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadOptions {
    pub public_id: Option<String>,
    pub folder: Option<String>,
    pub resource_type: ResourceType,
    pub overwrite: Option<bool>,
}

impl UploadOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_public_id(mut self, public_id: impl Into<String>) -> Self {
        self.public_id = Some(public_id.into());
        self
    }

    pub fn with_folder(mut self, folder: impl Into<String>) -> Self {
        self.folder = Some(folder.into());
        self
    }

    pub fn with_resource_type(mut self, resource_type: ResourceType) -> Self {
        self.resource_type = resource_type;
        self
    }

    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = Some(overwrite);
        self
    }

    fn signed_params(&self) -> BTreeMap<String, String> {
        let mut params = BTreeMap::new();
        if let Some(public_id) = &self.public_id {
            params.insert("public_id".to_string(), public_id.clone());
        }
        if let Some(folder) = &self.folder {
            params.insert("folder".to_string(), folder.clone());
        }
        if let Some(overwrite) = self.overwrite {
            params.insert("overwrite".to_string(), overwrite.to_string());
        }
        params
    }
}

/// Response to a successful upload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadResult {
    pub public_id: String,
    #[serde(default)]
    pub version: Option<u64>,
    #[serde(default)]
    pub resource_type: Option<String>,
    #[serde(default)]
    pub format: Option<String>,
    #[serde(default)]
    pub bytes: Option<u64>,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub secure_url: Option<String>,
}

/// Response to a destroy call (`"ok"` or `"not found"`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DestroyResult {
    pub result: String,
}

impl DestroyResult {
    pub fn is_ok(&self) -> bool {
        self.result == "ok"
    }
}

#[derive(Deserialize)]
struct ApiErrorBody {
    error: ApiErrorMessage,
}

#[derive(Deserialize)]
struct ApiErrorMessage {
    message: String,
}

/// Handle to the media storage service
///
/// Construction does no network I/O and does not check the credentials.
/// Each operation checks the values it needs and fails with
/// `MediaError::MissingCredential` if one is absent.
#[derive(Debug, Clone)]
pub struct MediaClient {
    config: MediaClientConfig,
    http: reqwest::Client,
    api_base_url: String,
    delivery_base_url: String,
}

impl MediaClient {
    /// Create a client with default endpoints
    pub fn new(config: MediaClientConfig) -> MediaResult<Self> {
        Self::with_settings(config, &MediaSettings::default())
    }

    /// Create a client using endpoints and timeout from `settings`
    pub fn with_settings(config: MediaClientConfig, settings: &MediaSettings) -> MediaResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()?;

        Ok(Self {
            config,
            http,
            api_base_url: settings.api_base_url.trim_end_matches('/').to_string(),
            delivery_base_url: settings.delivery_base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn config(&self) -> &MediaClientConfig {
        &self.config
    }

    pub fn cloud_name(&self) -> MediaResult<&str> {
        self.config.cloud_name()
    }

    /// Endpoint for an API action, e.g. `.../v1_1/demo/image/upload`
    pub fn api_url(&self, resource_type: ResourceType, action: &str) -> MediaResult<String> {
        Ok(format!(
            "{}/v1_1/{}/{}/{}",
            self.api_base_url,
            self.cloud_name()?,
            resource_type.as_str(),
            action
        ))
    }

    /// Public delivery URL for an uploaded asset
    pub fn delivery_url(&self, resource_type: ResourceType, public_id: &str) -> MediaResult<String> {
        // Delivery has no "auto" type
        let resource_type = match resource_type {
            ResourceType::Auto => ResourceType::Image,
            other => other,
        };
        Ok(format!(
            "{}/{}/{}/upload/{}",
            self.delivery_base_url,
            self.cloud_name()?,
            resource_type.as_str(),
            public_id.trim_start_matches('/')
        ))
    }

    /// Sign `params` with the configured API secret
    pub fn sign(&self, params: &BTreeMap<String, String>) -> MediaResult<String> {
        Ok(sign_params(params, self.config.api_secret()?))
    }

    /// Add `timestamp`, `api_key` and the signature to `params`
    pub fn signed_form(
        &self,
        mut params: BTreeMap<String, String>,
        timestamp: u64,
    ) -> MediaResult<BTreeMap<String, String>> {
        let api_key = self.config.api_key()?.to_string();
        params.insert("timestamp".to_string(), timestamp.to_string());
        let signature = self.sign(&params)?;

        params.insert("api_key".to_string(), api_key);
        params.insert("signature".to_string(), signature);
        params.insert("signature_algorithm".to_string(), "sha256".to_string());
        Ok(params)
    }

    /// Build (without sending) a signed upload request
    ///
    /// `file` is a remote URL or a `data:` URI.
    pub fn build_upload_request(
        &self,
        file: &str,
        options: &UploadOptions,
        timestamp: u64,
    ) -> MediaResult<reqwest::Request> {
        let url = self.api_url(options.resource_type, "upload")?;
        let mut form = self.signed_form(options.signed_params(), timestamp)?;
        form.insert("file".to_string(), file.to_string());

        Ok(self.http.post(url).form(&form).build()?)
    }

    /// Build (without sending) a signed destroy request
    pub fn build_destroy_request(
        &self,
        public_id: &str,
        resource_type: ResourceType,
        timestamp: u64,
    ) -> MediaResult<reqwest::Request> {
        let url = self.api_url(resource_type, "destroy")?;
        let mut params = BTreeMap::new();
        params.insert("public_id".to_string(), public_id.to_string());
        let form = self.signed_form(params, timestamp)?;

        Ok(self.http.post(url).form(&form).build()?)
    }

    /// Upload an asset
    pub async fn upload(&self, file: &str, options: &UploadOptions) -> MediaResult<UploadResult> {
        let request = self.build_upload_request(file, options, unix_timestamp())?;
        self.execute(request).await
    }

    /// Delete an asset by public id
    pub async fn destroy(&self, public_id: &str, resource_type: ResourceType) -> MediaResult<DestroyResult> {
        let request = self.build_destroy_request(public_id, resource_type, unix_timestamp())?;
        self.execute(request).await
    }

    async fn execute<T: DeserializeOwned>(&self, request: reqwest::Request) -> MediaResult<T> {
        let response = self.http.execute(request).await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        parse_response(status, &body)
    }
}

fn parse_response<T: DeserializeOwned>(status: u16, body: &str) -> MediaResult<T> {
    if !(200..300).contains(&status) {
        let message = serde_json::from_str::<ApiErrorBody>(body)
            .map(|b| b.error.message)
            .unwrap_or_else(|_| body.trim().to_string());
        return Err(MediaError::api_error(status, message));
    }
    Ok(serde_json::from_str(body)?)
}

fn unix_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
