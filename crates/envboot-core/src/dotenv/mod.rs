//! Local override file (`.env`) loading
//!
//! The loader never touches the process environment. It reads the file into
//! an ordered list of entries and reports what happened as a `LoadOutcome`;
//! the caller decides how to log it and carries on either way.

mod loader;

pub use loader::{load_override_file, parse_entries, read_entries, LoadError, LoadOutcome, LoadResult, DEFAULT_OVERRIDE_FILE};
