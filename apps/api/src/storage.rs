//! Session persister — one JSON file per completed interview session.
//!
//! Records live in a flat directory as `session_<N>.json`, where `N` is one
//! more than the number of existing entries. Two processes sharing the
//! directory can race on `N`; accepted limitation of the numbering scheme.

use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::errors::AppError;
use crate::models::session::SessionRecord;

/// Creates the storage directory if it does not exist. Called once at startup.
pub fn init_storage_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create storage directory {}", dir.display()))?;
    info!("Storage directory ready at {}", dir.display());
    Ok(())
}

/// Writes the record as indented UTF-8 JSON (non-ASCII preserved unescaped)
/// and returns the filename. The record goes to a temporary file in the same
/// directory first and is renamed into place, so a failed write never leaves
/// a partial session file.
pub fn persist_session(dir: &Path, record: &SessionRecord) -> Result<String, AppError> {
    let filename = next_session_filename(dir)?;
    let json = serde_json::to_string_pretty(record)
        .map_err(|e| AppError::Storage(format!("Failed to serialize session: {e}")))?;

    let mut tmp = tempfile::NamedTempFile::new_in(dir)
        .map_err(|e| AppError::Storage(format!("Failed to create temporary file: {e}")))?;
    tmp.write_all(json.as_bytes())
        .map_err(|e| AppError::Storage(format!("Failed to write session: {e}")))?;
    tmp.persist(dir.join(&filename))
        .map_err(|e| AppError::Storage(format!("Failed to persist session file: {e}")))?;

    Ok(filename)
}

/// Filenames of all persisted session records, in session-number order.
pub fn list_sessions(dir: &Path) -> Result<Vec<String>, AppError> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .map_err(|e| AppError::Storage(format!("Failed to read storage directory: {e}")))?
        .filter_map(|entry| entry.ok())
        .filter_map(|entry| entry.file_name().into_string().ok())
        .filter(|name| name.starts_with("session_") && name.ends_with(".json"))
        .collect();
    names.sort_by_key(|name| session_number(name));
    Ok(names)
}

/// Next sequential filename: one more than the count of existing entries.
/// Computed before the temp file is created so the temp file never counts.
fn next_session_filename(dir: &Path) -> Result<String, AppError> {
    let count = fs::read_dir(dir)
        .map_err(|e| AppError::Storage(format!("Failed to read storage directory: {e}")))?
        .count();
    Ok(format!("session_{}.json", count + 1))
}

fn session_number(name: &str) -> u64 {
    name.trim_start_matches("session_")
        .trim_end_matches(".json")
        .parse()
        .unwrap_or(0)
}
