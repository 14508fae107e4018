//! Logging abstractions for runtime-agnostic logging

mod traits;
mod noop;
mod console;
mod recording;

pub use traits::{Logger, LoggerExt, SharedLogger};
pub use noop::NoOpLogger;
pub use console::ConsoleLogger;
pub use recording::{RecordingLogger, LogRecord, RecordLevel};
