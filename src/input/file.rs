//! Batch loading from files.
//!
//! Two formats are accepted:
//! - `.json`: an array of `{"id", "arrival_time", "burst_time"}` objects.
//! - anything else: one `pid, arrival, burst` entry per line; blank lines
//!   and lines starting with `#` are skipped.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use log::info;

use super::line::{parse_entry, InputError};
use crate::models::Process;
use crate::validation::{validate_processes, BurstPolicy, ValidationError};

/// Why a batch file could not be loaded.
#[derive(Debug)]
pub enum LoadError {
    /// The file could not be read.
    Io(std::io::Error),
    /// The JSON document is malformed or has the wrong shape.
    Json(serde_json::Error),
    /// A text line was rejected (1-based line number).
    Line { line: usize, error: InputError },
    /// The file holds no processes.
    Empty,
    /// The batch failed validation.
    Invalid(Vec<ValidationError>),
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "cannot read batch file: {e}"),
            Self::Json(e) => write!(f, "malformed JSON batch: {e}"),
            Self::Line { line, error } => write!(f, "line {line}: {error}"),
            Self::Empty => f.write_str("batch file contains no processes"),
            Self::Invalid(errors) => {
                let messages: Vec<&str> = errors.iter().map(|e| e.message.as_str()).collect();
                write!(f, "invalid batch: {}", messages.join("; "))
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Json(e) => Some(e),
            Self::Line { error, .. } => Some(error),
            Self::Empty | Self::Invalid(_) => None,
        }
    }
}

impl From<std::io::Error> for LoadError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

/// Loads a batch from `path`, choosing the format by extension.
pub fn load_file(path: impl AsRef<Path>, policy: BurstPolicy) -> Result<Vec<Process>, LoadError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let processes = if is_json {
        parse_json(&text, policy)?
    } else {
        parse_lines(&text, policy)?
    };

    info!("loaded {} processes from {}", processes.len(), path.display());
    Ok(processes)
}

/// Parses a JSON array of processes.
pub fn parse_json(text: &str, policy: BurstPolicy) -> Result<Vec<Process>, LoadError> {
    let processes: Vec<Process> = serde_json::from_str(text)?;
    check_batch(processes, policy)
}

/// Parses `pid, arrival, burst` lines.
pub fn parse_lines(text: &str, policy: BurstPolicy) -> Result<Vec<Process>, LoadError> {
    let mut processes = Vec::new();
    let mut ids = HashSet::new();

    for (idx, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let process = parse_entry(line, &ids, policy).map_err(|error| LoadError::Line {
            line: idx + 1,
            error,
        })?;
        ids.insert(process.id.clone());
        processes.push(process);
    }

    check_batch(processes, policy)
}

fn check_batch(processes: Vec<Process>, policy: BurstPolicy) -> Result<Vec<Process>, LoadError> {
    if processes.is_empty() {
        return Err(LoadError::Empty);
    }
    validate_processes(&processes, policy).map_err(LoadError::Invalid)?;
    Ok(processes)
}
