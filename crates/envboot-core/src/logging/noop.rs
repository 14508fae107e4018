//! No-op logger implementation

use super::traits::Logger;

/// A logger that does nothing
///
/// Pass it to `EnvironmentResolver` to silence the override file status
/// line, e.g. when a backend reports its own startup banner.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpLogger;

impl NoOpLogger {
    /// Create a new no-op logger
    pub fn new() -> Self {
        Self
    }
}

impl Logger for NoOpLogger {
    fn debug(&self, _message: &str) {}
    fn info(&self, _message: &str) {}
    fn warn(&self, _message: &str) {}
    fn error(&self, _message: &str) {}
}
