//! Media client error types

use thiserror::Error;

/// Errors that can occur during media client operations
#[derive(Error, Debug)]
pub enum MediaError {
    /// A credential was not configured
    #[error("Missing media credential: {0}")]
    MissingCredential(&'static str),

    /// The media API rejected the request
    #[error("Media API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Network/HTTP error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl MediaError {
    pub fn api_error(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }
}

pub type MediaResult<T> = Result<T, MediaError>;
