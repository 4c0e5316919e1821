//! Test fixtures and scratch directory helpers.

use anyhow::Result;
use tempfile::TempDir;

/// Create a uniquely named scratch directory that is removed on drop.
///
/// # Errors
///
/// Returns an error if the system temp directory is not writable.
pub fn temp_dir() -> Result<TempDir> {
    Ok(tempfile::Builder::new().prefix("falcogen-").tempdir()?)
}
