//! Logger trait definition

use std::sync::Arc;

/// Logger abstraction for runtime-agnostic logging
///
/// Implementations:
/// - `NoOpLogger`: Silent logger
/// - `ConsoleLogger`: Logs to stdout/stderr
/// - `RecordingLogger`: Keeps lines in memory for inspection
/// - Host adapters (the CLI forwards to `tracing`)
pub trait Logger: Send + Sync {
    /// Log a debug message
    fn debug(&self, message: &str);

    /// Log an info message
    fn info(&self, message: &str);

    /// Log a warning message
    fn warn(&self, message: &str);

    /// Log an error message
    fn error(&self, message: &str);
}

/// Type alias for an Arc-wrapped logger
pub type SharedLogger = Arc<dyn Logger>;

/// Extension trait for logging with format arguments
pub trait LoggerExt: Logger {
    fn debug_fmt(&self, args: std::fmt::Arguments<'_>) {
        self.debug(&args.to_string());
    }

    fn info_fmt(&self, args: std::fmt::Arguments<'_>) {
        self.info(&args.to_string());
    }

    fn warn_fmt(&self, args: std::fmt::Arguments<'_>) {
        self.warn(&args.to_string());
    }

    fn error_fmt(&self, args: std::fmt::Arguments<'_>) {
        self.error(&args.to_string());
    }
}

impl<T: Logger + ?Sized> LoggerExt for T {}

/// Convenience macros for logging
#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($arg:tt)*) => {
        $logger.debug(&format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:tt)*) => {
        $logger.info(&format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_warn {
    ($logger:expr, $($arg:tt)*) => {
        $logger.warn(&format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($arg:tt)*) => {
        $logger.error(&format!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::{RecordingLogger, RecordLevel};

    #[test]
    fn test_logger_ext_formats() {
        let logger = RecordingLogger::new();
        logger.info_fmt(format_args!("loaded {} keys", 3));
        logger.warn_fmt(format_args!("{}={}", "a", "b"));

        let records = logger.records();
        assert_eq!(records[0].message, "loaded 3 keys");
        assert_eq!(records[1].level, RecordLevel::Warn);
        assert_eq!(records[1].message, "a=b");
    }

    #[test]
    fn test_macros_through_shared_logger() {
        let recorder = Arc::new(RecordingLogger::new());
        let shared: SharedLogger = recorder.clone();

        crate::log_info!(shared, "mode={}", "local");
        crate::log_debug!(shared, "n={}", 1);

        assert!(recorder.contains("mode=local"));
        assert_eq!(recorder.records().len(), 2);
    }
}
