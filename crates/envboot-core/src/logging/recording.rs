//! In-memory logger that keeps every line

use std::sync::Mutex;

use super::traits::Logger;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RecordLevel {
    Debug,
    Info,
    Warn,
    Error,
}

/// A single captured log line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub level: RecordLevel,
    pub message: String,
}

/// Logger that records lines instead of printing them
///
/// Handy for asserting on startup status in tests, or for an embedder that
/// wants to replay bootstrap messages once its own logging is up.
#[derive(Debug, Default)]
pub struct RecordingLogger {
    records: Mutex<Vec<LogRecord>>,
}

impl RecordingLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything logged so far
    pub fn records(&self) -> Vec<LogRecord> {
        match self.records.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Messages logged at `level`
    pub fn messages_at(&self, level: RecordLevel) -> Vec<String> {
        self.records()
            .into_iter()
            .filter(|r| r.level == level)
            .map(|r| r.message)
            .collect()
    }

    /// Whether any message contains `needle`
    pub fn contains(&self, needle: &str) -> bool {
        self.records().iter().any(|r| r.message.contains(needle))
    }

    fn push(&self, level: RecordLevel, message: &str) {
        let record = LogRecord {
            level,
            message: message.to_string(),
        };
        match self.records.lock() {
            Ok(mut guard) => guard.push(record),
            Err(poisoned) => poisoned.into_inner().push(record),
        }
    }
}

impl Logger for RecordingLogger {
    fn debug(&self, message: &str) {
        self.push(RecordLevel::Debug, message);
    }

    fn info(&self, message: &str) {
        self.push(RecordLevel::Info, message);
    }

    fn warn(&self, message: &str) {
        self.push(RecordLevel::Warn, message);
    }

    fn error(&self, message: &str) {
        self.push(RecordLevel::Error, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_order() {
        let logger = RecordingLogger::new();
        logger.info("first");
        logger.error("second");

        let records = logger.records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0], LogRecord { level: RecordLevel::Info, message: "first".into() });
        assert_eq!(records[1].level, RecordLevel::Error);
    }

    #[test]
    fn test_messages_at_level() {
        let logger = RecordingLogger::new();
        logger.debug("d");
        logger.info("i1");
        logger.info("i2");

        assert_eq!(logger.messages_at(RecordLevel::Info), vec!["i1", "i2"]);
        assert!(logger.contains("d"));
        assert!(!logger.contains("missing"));
    }
}
