//! Dataset retrieval.
//!
//! Resolves a user-supplied dataset name against a data directory and
//! returns the decoded text. The session core only ever consumes the
//! resulting string; everything filesystem-shaped stays here.

use crate::error::SessionError;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Append `.csv` when the name does not already carry it.
pub fn resolve_dataset_name(name: &str) -> String {
    if name.ends_with(".csv") {
        name.to_string()
    } else {
        format!("{}.csv", name)
    }
}

/// Path of a named dataset inside `data_dir`.
pub fn dataset_path(data_dir: &Path, name: &str) -> PathBuf {
    data_dir.join(resolve_dataset_name(name))
}

/// Read and decode a dataset.
///
/// Bytes that are not valid UTF-8 surface as [`SessionError::Undecodable`]
/// in the error chain, so the caller can report a parse failure and keep
/// its previous session state.
pub fn fetch_dataset(data_dir: &Path, name: &str) -> Result<String> {
    let path = dataset_path(data_dir, name);
    let bytes = std::fs::read(&path)
        .with_context(|| format!("Failed to read dataset {}", path.display()))?;
    let text = String::from_utf8(bytes)
        .map_err(SessionError::Undecodable)
        .with_context(|| format!("Failed to decode dataset {}", path.display()))?;
    Ok(text)
}
