//! Request and outcome types for the fetch/extract pipeline.
//!
//! # Design
//! - Keep request types lightweight and copyable; they only borrow caller-owned paths.
//! - Outcomes report what was done so callers and tests can observe idempotent skips.

use std::path::{Path, PathBuf};

use url::Url;

/// A remote archive and where it should be stored locally.
#[derive(Copy, Clone, Debug)]
pub struct RemoteResource<'a> {
    /// HTTP(S) location of the resource.
    pub url: &'a Url,
    /// Local file the response body is written to.
    pub destination: &'a Path,
}

/// A local ZIP archive and the directory it should be expanded into.
#[derive(Copy, Clone, Debug)]
pub struct ArchiveExtractionJob<'a> {
    /// Archive to read.
    pub archive: &'a Path,
    /// Directory entry paths are resolved against.
    pub destination: &'a Path,
}

/// Result of a [`crate::fetch`] call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The destination already existed; no request was sent.
    Skipped,
    /// The resource was downloaded.
    Downloaded {
        /// Number of body bytes written.
        bytes: u64,
    },
}

/// Paths touched by a [`crate::extract`] call, in archive order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExtractSummary {
    /// Entries written during this call (directories included).
    pub extracted: Vec<PathBuf>,
    /// Entries left alone because their destination already existed.
    pub skipped: Vec<PathBuf>,
}

impl ExtractSummary {
    /// True when the call wrote nothing to disk.
    #[must_use]
    pub const fn is_noop(&self) -> bool {
        self.extracted.is_empty()
    }
}
