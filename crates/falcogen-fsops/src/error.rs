//! # Design
//!
//! - Provide structured, constant-message errors for the fetch/extract/list pipeline.
//! - Capture operation context (paths, URLs, fields) to make failures reproducible in tests.
//! - Preserve source errors without interpolating context into error messages.

use std::io;
use std::path::{Path, PathBuf};

use falcogen_config::ConfigError;
use thiserror::Error;

/// Result type for pipeline operations.
pub type FsOpsResult<T> = Result<T, FsOpsError>;

/// Errors produced while fetching, extracting, or listing the source archive.
#[derive(Debug, Error)]
pub enum FsOpsError {
    /// IO failures while interacting with the filesystem.
    #[error("fsops io failure")]
    Io {
        /// Operation that triggered the IO failure.
        operation: &'static str,
        /// Path involved in the IO failure.
        path: PathBuf,
        /// Underlying IO error.
        source: io::Error,
    },
    /// Transport failures while talking to the remote server.
    #[error("fsops http failure")]
    Http {
        /// Operation that triggered the HTTP failure.
        operation: &'static str,
        /// Requested URL.
        url: String,
        /// Underlying client error.
        source: reqwest::Error,
    },
    /// The remote server answered with a non-success status.
    #[error("fsops unexpected http status")]
    HttpStatus {
        /// Requested URL.
        url: String,
        /// Status code returned by the server.
        status: u16,
    },
    /// Walkdir traversal failures.
    #[error("fsops walkdir failure")]
    Walkdir {
        /// Operation that triggered the walkdir failure.
        operation: &'static str,
        /// Path involved in the walkdir failure.
        path: PathBuf,
        /// Underlying walkdir error.
        source: walkdir::Error,
    },
    /// Zip archive failures.
    #[error("fsops zip failure")]
    Zip {
        /// Operation that triggered the archive failure.
        operation: &'static str,
        /// Path involved in the archive failure.
        path: PathBuf,
        /// Underlying zip error.
        source: zip::result::ZipError,
    },
    /// Input validation failures.
    #[error("fsops invalid input")]
    InvalidInput {
        /// Field that failed validation.
        field: &'static str,
        /// Static reason for the failure.
        reason: &'static str,
        /// Offending value when available.
        value: Option<String>,
    },
    /// The source configuration could not be turned into a pipeline request.
    #[error("fsops invalid configuration")]
    Config {
        /// Underlying configuration error.
        #[from]
        source: ConfigError,
    },
}

impl FsOpsError {
    pub(crate) fn io(operation: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            operation,
            path: path.into(),
            source,
        }
    }

    pub(crate) fn http(
        operation: &'static str,
        url: impl Into<String>,
        source: reqwest::Error,
    ) -> Self {
        Self::Http {
            operation,
            url: url.into(),
            source,
        }
    }

    pub(crate) fn walkdir(
        operation: &'static str,
        path: impl Into<PathBuf>,
        source: walkdir::Error,
    ) -> Self {
        Self::Walkdir {
            operation,
            path: path.into(),
            source,
        }
    }

    pub(crate) fn zip(
        operation: &'static str,
        path: impl Into<PathBuf>,
        source: zip::result::ZipError,
    ) -> Self {
        Self::Zip {
            operation,
            path: path.into(),
            source,
        }
    }

    /// Operation label recorded with the failure, when there is one.
    #[must_use]
    pub const fn operation(&self) -> Option<&'static str> {
        match self {
            Self::Io { operation, .. }
            | Self::Http { operation, .. }
            | Self::Walkdir { operation, .. }
            | Self::Zip { operation, .. } => Some(*operation),
            Self::HttpStatus { .. } | Self::InvalidInput { .. } | Self::Config { .. } => None,
        }
    }

    /// Filesystem path tied to the failure, when there is one.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Io { path, .. } | Self::Walkdir { path, .. } | Self::Zip { path, .. } => {
                Some(path)
            }
            Self::Http { .. }
            | Self::HttpStatus { .. }
            | Self::InvalidInput { .. }
            | Self::Config { .. } => None,
        }
    }
}
