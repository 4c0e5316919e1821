//! ZIP archive builders for extraction and pipeline tests.

use std::fs::File;
use std::io::{Cursor, Seek, Write};
use std::path::Path;

use anyhow::Result;
use zip::ZipWriter;
use zip::write::FileOptions;

/// One entry of a synthetic archive.
#[derive(Debug, Clone, Copy)]
pub enum ArchiveEntry<'a> {
    /// Explicit directory entry (name should end with `/`).
    Dir(&'a str),
    /// Regular file entry with its contents.
    File(&'a str, &'a [u8]),
}

/// Write a ZIP archive containing `entries`, in order, to `archive`.
///
/// # Errors
///
/// Returns an error if the file cannot be created or the archive cannot be encoded.
pub fn write_zip_archive(archive: &Path, entries: &[ArchiveEntry<'_>]) -> Result<()> {
    let file = File::create(archive)?;
    encode(file, entries)?;
    Ok(())
}

/// Encode `entries` into an in-memory ZIP archive, suitable as an HTTP response body.
///
/// # Errors
///
/// Returns an error if the archive cannot be encoded.
pub fn zip_bytes(entries: &[ArchiveEntry<'_>]) -> Result<Vec<u8>> {
    Ok(encode(Cursor::new(Vec::new()), entries)?.into_inner())
}

fn encode<W: Write + Seek>(writer: W, entries: &[ArchiveEntry<'_>]) -> Result<W> {
    let mut zip = ZipWriter::new(writer);
    let options = FileOptions::default();
    for entry in entries {
        match entry {
            ArchiveEntry::Dir(name) => zip.add_directory(*name, options)?,
            ArchiveEntry::File(name, contents) => {
                zip.start_file(*name, options)?;
                zip.write_all(contents)?;
            }
        }
    }
    Ok(zip.finish()?)
}
