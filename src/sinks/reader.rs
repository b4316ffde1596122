use std::path::Path;

use tracing::warn;

use crate::error::{AppError, AppResult, SinkError};
use crate::metrics::Summary;

use super::path::ensure_jsonl;

/// Reads every valid record from a `.jsonl` file.
///
/// # Errors
///
/// Returns an error when the path is not `.jsonl`, the file cannot be read,
/// or no line holds a valid record.
pub async fn read_summaries(path: &Path) -> AppResult<Vec<Summary>> {
    ensure_jsonl(path).map_err(|err| AppError::sink(SinkError::InvalidPath { source: err }))?;
    let content = tokio::fs::read_to_string(path).await.map_err(|err| {
        AppError::sink(SinkError::Read {
            path: path.to_path_buf(),
            source: err,
        })
    })?;
    parse_summaries(&content, path)
}

/// Parses a record stream, skipping blank and malformed lines.
///
/// # Errors
///
/// Returns `NoRecords` when nothing valid remains.
pub fn parse_summaries(content: &str, path: &Path) -> AppResult<Vec<Summary>> {
    let mut records = Vec::new();
    for (index, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match serde_json::from_str::<Summary>(line) {
            Ok(summary) => records.push(summary),
            Err(err) => warn!(
                "Skipping line {} of {}: {}",
                index.saturating_add(1),
                path.display(),
                err
            ),
        }
    }
    if records.is_empty() {
        return Err(AppError::sink(SinkError::NoRecords {
            path: path.to_path_buf(),
        }));
    }
    Ok(records)
}
