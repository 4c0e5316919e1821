//! Regular-file enumeration below a directory.

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{FsOpsError, FsOpsResult};

/// Collect the regular files under `dir`.
///
/// With `recursive` set, files at every depth are returned; otherwise only the files
/// directly inside `dir`, and subdirectories are neither descended nor reported. Order
/// follows the filesystem's directory enumeration and is not sorted.
///
/// # Errors
///
/// Returns an error if `dir` is missing or not a directory, or if any directory below it
/// cannot be read. No partial listing is returned.
pub fn list_files(dir: &Path, recursive: bool) -> FsOpsResult<Vec<PathBuf>> {
    let metadata =
        fs::metadata(dir).map_err(|source| FsOpsError::io("list_files.stat", dir, source))?;
    if !metadata.is_dir() {
        return Err(FsOpsError::InvalidInput {
            field: "dir",
            reason: "not_a_directory",
            value: Some(dir.display().to_string()),
        });
    }

    let max_depth = if recursive { usize::MAX } else { 1 };
    let mut files = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(max_depth) {
        let entry = entry.map_err(|source| FsOpsError::walkdir("list_files.walk", dir, source))?;
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}
