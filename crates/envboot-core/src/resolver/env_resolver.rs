//! Environment resolver
//!
//! One resolver is created during application wiring and shared by `Arc`.
//! `initialize()` reads the optional override file once; after that every
//! lookup checks the override entries first and the process environment
//! second.
//!
//! Precedence:
//! 1. Override file entry, only when its value is non-empty
//! 2. Process environment, returned as-is (empty strings included)

use std::fmt;
use std::sync::Arc;

use once_cell::sync::OnceCell;

use crate::config::BootstrapSettings;
use crate::dotenv::{load_override_file, LoadOutcome};
use crate::logging::{ConsoleLogger, SharedLogger};
use crate::store::{ConfigStore, EnvStore, MemoryStore};

/// Where the process gets its configuration from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolverMode {
    /// Override file loaded (local development)
    Local,
    /// Platform-provided environment only
    Ambient,
}

impl ResolverMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResolverMode::Local => "local",
            ResolverMode::Ambient => "ambient",
        }
    }
}

/// Which store answered a lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueSource {
    Override,
    Ambient,
}

impl ValueSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueSource::Override => "override file",
            ValueSource::Ambient => "environment",
        }
    }
}

/// A resolved value with source tracking
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedEntry {
    pub value: String,
    pub source: ValueSource,
}

struct LoadedState {
    outcome: LoadOutcome,
    overrides: MemoryStore,
}

/// Resolves configuration keys, preferring override file values
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use envboot_core::{BootstrapSettings, ConsoleLogger, EnvironmentResolver};
///
/// let resolver = EnvironmentResolver::bootstrap(
///     BootstrapSettings::default(),
///     Arc::new(ConsoleLogger::new()),
/// );
/// let cloud = resolver.get("CLOUD_NAME");
/// ```
pub struct EnvironmentResolver {
    settings: BootstrapSettings,
    ambient: Arc<dyn ConfigStore>,
    logger: SharedLogger,
    state: OnceCell<LoadedState>,
}

impl EnvironmentResolver {
    /// Create a resolver backed by the process environment
    ///
    /// Does NOT read the override file; call `initialize()`.
    pub fn new(settings: BootstrapSettings, logger: SharedLogger) -> Self {
        Self::with_ambient(settings, Arc::new(EnvStore::new()), logger)
    }

    /// Create a resolver with a custom ambient store
    pub fn with_ambient(
        settings: BootstrapSettings,
        ambient: Arc<dyn ConfigStore>,
        logger: SharedLogger,
    ) -> Self {
        Self {
            settings,
            ambient,
            logger,
            state: OnceCell::new(),
        }
    }

    /// Create and initialize in one step
    pub fn bootstrap(settings: BootstrapSettings, logger: SharedLogger) -> Self {
        let resolver = Self::new(settings, logger);
        resolver.initialize();
        resolver
    }

    /// Resolver with default settings that logs to the console
    pub fn from_default_env() -> Self {
        Self::bootstrap(BootstrapSettings::default(), Arc::new(ConsoleLogger::new()))
    }

    /// Read the override file, once
    ///
    /// Later calls return the first outcome without touching the disk.
    /// Never fails: an unreadable or malformed file is logged and treated as
    /// if it did not exist.
    pub fn initialize(&self) -> &LoadOutcome {
        &self.state.get_or_init(|| self.load()).outcome
    }

    fn load(&self) -> LoadedState {
        let outcome = load_override_file(&self.settings.override_file);
        self.logger.info(&outcome.status_message());

        let overrides = MemoryStore::named("override").with_entries(outcome.entries().iter().cloned());
        crate::log_debug!(
            self.logger,
            "{} override entries, mode={}",
            overrides.len(),
            if outcome.is_loaded() { "local" } else { "ambient" }
        );

        LoadedState { outcome, overrides }
    }

    /// Whether `initialize()` has run
    pub fn is_initialized(&self) -> bool {
        self.state.get().is_some()
    }

    /// Outcome of the override file load, if initialized
    pub fn load_outcome(&self) -> Option<&LoadOutcome> {
        self.state.get().map(|s| &s.outcome)
    }

    pub fn mode(&self) -> ResolverMode {
        match self.state.get() {
            Some(state) if state.outcome.is_loaded() => ResolverMode::Local,
            _ => ResolverMode::Ambient,
        }
    }

    pub fn is_local(&self) -> bool {
        self.mode() == ResolverMode::Local
    }

    /// Number of distinct keys read from the override file
    pub fn override_count(&self) -> usize {
        self.state.get().map(|s| s.overrides.len()).unwrap_or(0)
    }

    pub fn settings(&self) -> &BootstrapSettings {
        &self.settings
    }

    pub fn logger(&self) -> &SharedLogger {
        &self.logger
    }

    /// Resolve a key; `None` when neither store has it
    pub fn get(&self, key: &str) -> Option<String> {
        self.resolve(key).map(|entry| entry.value)
    }

    /// Resolve a key and report which store answered
    pub fn resolve(&self, key: &str) -> Option<ResolvedEntry> {
        // An empty override counts as unset
        if let Some(value) = self.override_value(key).filter(|v| !v.is_empty()) {
            return Some(ResolvedEntry {
                value,
                source: ValueSource::Override,
            });
        }

        self.ambient.get(key).map(|value| ResolvedEntry {
            value,
            source: ValueSource::Ambient,
        })
    }

    fn override_value(&self, key: &str) -> Option<String> {
        self.state.get().and_then(|s| s.overrides.get(key))
    }
}

impl fmt::Debug for EnvironmentResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnvironmentResolver")
            .field("override_file", &self.settings.override_file)
            .field("ambient", &self.ambient.name())
            .field("mode", &self.mode())
            .field("override_count", &self.override_count())
            .finish()
    }
}
