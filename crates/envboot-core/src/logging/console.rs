//! Console logger implementation

use super::traits::Logger;

/// A logger that writes status lines to the console
///
/// Info goes to stdout so startup status shows up next to the backend's own
/// output; everything else goes to stderr.
#[derive(Debug, Clone)]
pub struct ConsoleLogger {
    prefix: String,
    verbose: bool,
}

impl Default for ConsoleLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleLogger {
    /// Create a new console logger with default prefix
    pub fn new() -> Self {
        Self {
            prefix: "[envboot]".to_string(),
            verbose: false,
        }
    }

    /// Create a console logger with a custom prefix
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            verbose: false,
        }
    }

    /// Also print debug lines
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    fn line(&self, level: &str, message: &str) -> String {
        format!("{} {}: {}", self.prefix, level, message)
    }
}

impl Logger for ConsoleLogger {
    fn debug(&self, message: &str) {
        if self.verbose {
            eprintln!("{}", self.line("DEBUG", message));
        }
    }

    fn info(&self, message: &str) {
        println!("{}", self.line("INFO", message));
    }

    fn warn(&self, message: &str) {
        eprintln!("{}", self.line("WARN", message));
    }

    fn error(&self, message: &str) {
        eprintln!("{}", self.line("ERROR", message));
    }
}
