//! envboot Core
//!
//! Configuration bootstrap for a web backend. At startup the
//! `EnvironmentResolver` reads an optional local `.env` file once; every
//! lookup afterwards prefers a non-empty value from that file and falls back
//! to the process environment. The `MediaClientFactory` uses three of those
//! keys to build the media storage client.
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use envboot_core::{BootstrapSettings, ConsoleLogger, EnvironmentResolver, MediaClientFactory};
//!
//! let resolver = Arc::new(EnvironmentResolver::bootstrap(
//!     BootstrapSettings::default(),
//!     Arc::new(ConsoleLogger::new()),
//! ));
//!
//! let media = MediaClientFactory::new(resolver.clone()).build_client()?;
//! # Ok::<(), envboot_core::MediaError>(())
//! ```

pub mod logging;
pub mod store;
pub mod dotenv;
pub mod config;
pub mod resolver;
pub mod media;

// Re-export commonly used types
pub use logging::{Logger, LoggerExt, SharedLogger, NoOpLogger, ConsoleLogger, RecordingLogger};

pub use store::{ConfigStore, KeyInfo, EnvStore, MemoryStore};

pub use dotenv::{load_override_file, LoadOutcome, LoadError, DEFAULT_OVERRIDE_FILE};

pub use config::{BootstrapSettings, MediaSettings, ConfigError, ConfigResult};

pub use resolver::{EnvironmentResolver, ResolvedEntry, ResolverMode, ValueSource};

pub use media::{
    MediaClient, MediaClientConfig, MediaClientFactory,
    MediaError, MediaResult,
    ResourceType, UploadOptions, UploadResult, DestroyResult,
};
