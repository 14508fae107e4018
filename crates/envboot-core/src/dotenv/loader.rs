//! Override file loader
//!
//! Grammar: one `KEY=VALUE` per line, blank lines and `#` comments skipped,
//! optional `export ` prefix, surrounding single or double quotes stripped,
//! ` #` starts a comment in unquoted values. Values are taken literally:
//! `$VAR` and `${VAR}` are not expanded.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Conventional location of the override file, relative to the working directory
pub const DEFAULT_OVERRIDE_FILE: &str = ".env";

/// Errors that can occur while reading an override file
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("{} is not a regular file", .0.display())]
    NotAFile(PathBuf),

    /// The line content is left out so secrets do not end up in logs
    #[error("malformed entry at line {0}")]
    Parse(usize),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type LoadResult<T> = Result<T, LoadError>;

/// What happened when the override file was looked for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// File found and parsed; entries are in file order
    Loaded {
        path: PathBuf,
        entries: Vec<(String, String)>,
    },
    /// No file at the path
    Absent { path: PathBuf },
    /// File present but unusable
    Failed { path: PathBuf, reason: String },
}

impl LoadOutcome {
    pub fn path(&self) -> &Path {
        match self {
            LoadOutcome::Loaded { path, .. }
            | LoadOutcome::Absent { path }
            | LoadOutcome::Failed { path, .. } => path,
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadOutcome::Loaded { .. })
    }

    /// Parsed entries; empty unless the file loaded
    pub fn entries(&self) -> &[(String, String)] {
        match self {
            LoadOutcome::Loaded { entries, .. } => entries,
            _ => &[],
        }
    }

    /// One-line status suitable for the startup log
    pub fn status_message(&self) -> String {
        match self {
            LoadOutcome::Loaded { path, .. } => {
                format!("Loaded environment variables from {}", path.display())
            }
            LoadOutcome::Absent { path } => {
                format!("{} not found - using system environment variables", path.display())
            }
            LoadOutcome::Failed { path, reason } => format!(
                "Could not load {}: {} - using system environment variables",
                path.display(),
                reason
            ),
        }
    }
}

/// Parse an override file into ordered `(key, value)` pairs
///
/// All-or-nothing: the first malformed line fails the whole file.
pub fn read_entries(path: &Path) -> LoadResult<Vec<(String, String)>> {
    if !path.is_file() {
        return Err(LoadError::NotAFile(path.to_path_buf()));
    }

    let content = fs::read_to_string(path)?;
    parse_entries(&content)
}

/// Parse override file text into ordered `(key, value)` pairs
pub fn parse_entries(content: &str) -> LoadResult<Vec<(String, String)>> {
    let mut entries = Vec::new();

    for (index, raw) in content.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let line = line.strip_prefix("export ").map(str::trim_start).unwrap_or(line);
        let (key, value) = line.split_once('=').ok_or(LoadError::Parse(index + 1))?;

        let key = key.trim();
        if !is_valid_key(key) {
            return Err(LoadError::Parse(index + 1));
        }

        entries.push((key.to_string(), parse_value(value.trim())));
    }

    Ok(entries)
}

fn is_valid_key(key: &str) -> bool {
    !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
}

fn parse_value(value: &str) -> String {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return value[1..value.len() - 1].to_string();
        }
    }

    match value.find(" #") {
        Some(pos) => value[..pos].trim_end().to_string(),
        None => value.to_string(),
    }
}

/// Look for the override file at `path` and read it if present
///
/// Never fails: every problem is folded into `LoadOutcome::Failed`.
pub fn load_override_file(path: impl AsRef<Path>) -> LoadOutcome {
    let path = path.as_ref().to_path_buf();

    match path.try_exists() {
        Ok(false) => return LoadOutcome::Absent { path },
        Err(e) => {
            return LoadOutcome::Failed {
                path,
                reason: LoadError::from(e).to_string(),
            }
        }
        Ok(true) => {}
    }

    match read_entries(&path) {
        Ok(entries) => LoadOutcome::Loaded { path, entries },
        Err(e) => LoadOutcome::Failed {
            path,
            reason: e.to_string(),
        },
    }
}
