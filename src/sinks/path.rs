use std::path::{Path, PathBuf};

use crate::error::ValidationError;

const RECORD_EXTENSION: &str = "jsonl";

/// Checks that `path` names a `.jsonl` file.
///
/// # Errors
///
/// Returns `InvalidOutputExtension` for any other or missing extension.
pub fn ensure_jsonl(path: &Path) -> Result<(), ValidationError> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(RECORD_EXTENSION) => Ok(()),
        Some(_) | None => Err(ValidationError::InvalidOutputExtension {
            path: path.to_path_buf(),
        }),
    }
}

/// Resolves a user-supplied result name: a bare name gets `.jsonl` appended,
/// anything else must already end in `.jsonl`.
///
/// # Errors
///
/// Returns `InvalidOutputExtension` when the path carries another extension.
pub fn resolve_result_path(path: &Path) -> Result<PathBuf, ValidationError> {
    if path.extension().is_none() {
        return Ok(path.with_extension(RECORD_EXTENSION));
    }
    ensure_jsonl(path)?;
    Ok(path.to_path_buf())
}
