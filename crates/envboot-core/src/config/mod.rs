//! Settings for the bootstrap layer itself
//!
//! These say where the override file lives and which keys the media client
//! reads. Every field has a default, so an absent settings file means the
//! conventional `.env` + `CLOUD_NAME`/`API_KEY`/`API_SECRET` setup.

mod settings;

pub use settings::{BootstrapSettings, MediaSettings, ConfigError, ConfigResult};
