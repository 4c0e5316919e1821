//! ZIP extraction with per-entry idempotent skips.

use std::fs::{self, File};
use std::io;
use std::path::{Component, Path, PathBuf};

#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;

use tracing::{debug, info};
use zip::ZipArchive;
use zip::read::ZipFile;

use crate::error::{FsOpsError, FsOpsResult};
use crate::model::{ArchiveExtractionJob, ExtractSummary};

/// Expand `job.archive` into `job.destination`, leaving entries that already exist untouched.
///
/// Entries are processed in archive order. An interrupted run can be resumed by calling this
/// again: completed entries are skipped and only the remainder is written.
///
/// # Errors
///
/// Returns the first failure encountered (unreadable or malformed archive, unsafe entry
/// name, or a filesystem error) and abandons the remaining entries.
pub fn extract(job: ArchiveExtractionJob<'_>) -> FsOpsResult<ExtractSummary> {
    let ArchiveExtractionJob {
        archive: source,
        destination: target,
    } = job;
    info!(
        archive = %source.display(),
        destination = %target.display(),
        "unzipping archive"
    );

    let file = File::open(source)
        .map_err(|source_err| FsOpsError::io("extract_zip.open", source, source_err))?;
    let mut archive = ZipArchive::new(file)
        .map_err(|source_err| FsOpsError::zip("extract_zip.decode", source, source_err))?;

    let mut summary = ExtractSummary::default();
    for index in 0..archive.len() {
        let mut entry = archive
            .by_index(index)
            .map_err(|source_err| FsOpsError::zip("extract_zip.read_entry", source, source_err))?;
        let destination = target.join(entry_relative_path(entry.name())?);

        let present = destination.try_exists().map_err(|source_err| {
            FsOpsError::io("extract_zip.stat", &destination, source_err)
        })?;
        if present {
            debug!(path = %destination.display(), "entry already present; skipping");
            summary.skipped.push(destination);
        } else {
            debug!(path = %destination.display(), "extracting entry");
            unpack_entry(&mut entry, &destination)?;
            summary.extracted.push(destination);
        }
    }

    info!(
        extracted = summary.extracted.len(),
        skipped = summary.skipped.len(),
        "archive unzipped"
    );
    Ok(summary)
}

/// Materialise one entry at `destination`, creating any missing parent directories.
///
/// The output handle is closed before returning.
fn unpack_entry(entry: &mut ZipFile<'_>, destination: &Path) -> FsOpsResult<()> {
    if entry.is_dir() {
        return fs::create_dir_all(destination).map_err(|source_err| {
            FsOpsError::io("extract_zip.create_dir", destination, source_err)
        });
    }

    if let Some(parent) = destination.parent() {
        fs::create_dir_all(parent).map_err(|source_err| {
            FsOpsError::io("extract_zip.create_parent", parent, source_err)
        })?;
    }
    let mut output = File::create(destination).map_err(|source_err| {
        FsOpsError::io("extract_zip.create_file", destination, source_err)
    })?;
    io::copy(entry, &mut output)
        .map_err(|source_err| FsOpsError::io("extract_zip.copy", destination, source_err))?;

    #[cfg(unix)]
    if let Some(mode) = entry.unix_mode() {
        output
            .set_permissions(fs::Permissions::from_mode(mode))
            .map_err(|source_err| {
                FsOpsError::io("extract_zip.set_permissions", destination, source_err)
            })?;
    }
    Ok(())
}

/// Relative location of the entry called `name`, with `.` segments removed.
///
/// Rooted names, `..` segments and names with nothing left are refused.
fn entry_relative_path(name: &str) -> FsOpsResult<PathBuf> {
    let reject = |reason: &'static str| FsOpsError::InvalidInput {
        field: "archive_entry",
        reason,
        value: Some(name.to_string()),
    };

    let path = Path::new(name);
    if path.has_root() {
        return Err(reject("absolute_path"));
    }
    let relative = path
        .components()
        .try_fold(PathBuf::new(), |mut relative, component| match component {
            Component::Normal(segment) => {
                relative.push(segment);
                Ok(relative)
            }
            Component::CurDir => Ok(relative),
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                Err(reject("invalid_segment"))
            }
        })?;
    if relative.as_os_str().is_empty() {
        return Err(reject("empty_path"));
    }
    Ok(relative)
}
