//! Forwards core `Logger` calls to `tracing`

use envboot_core::Logger;

/// `Logger` adapter that emits `tracing` events under the `envboot` target
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn debug(&self, message: &str) {
        tracing::debug!(target: "envboot", "{}", message);
    }

    fn info(&self, message: &str) {
        tracing::info!(target: "envboot", "{}", message);
    }

    fn warn(&self, message: &str) {
        tracing::warn!(target: "envboot", "{}", message);
    }

    fn error(&self, message: &str) {
        tracing::error!(target: "envboot", "{}", message);
    }
}
