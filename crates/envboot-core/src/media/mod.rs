//! Media storage client wiring
//!
//! `MediaClientFactory` pulls the three credentials out of the
//! `EnvironmentResolver` and hands them to `MediaClient`. The factory does not
//! validate anything; a missing credential only surfaces when the client
//! needs it.

mod error;
mod config;
mod signing;
mod client;
mod factory;

pub use error::{MediaError, MediaResult};
pub use config::MediaClientConfig;
pub use signing::{sign_params, string_to_sign};
pub use client::{MediaClient, ResourceType, UploadOptions, UploadResult, DestroyResult};
pub use factory::MediaClientFactory;
