//! Pinned defaults for the upstream Falco source archive.
//!
//! # Design
//! - Keep the release tag, download URL, and extracted folder name side by side so a
//!   version bump touches a single file.

/// Falco release the fixtures are generated from.
pub const FALCO_VERSION: &str = "0.33.1";
/// Download URL of the tagged source archive for [`FALCO_VERSION`].
pub const FALCO_SOURCE_URL: &str =
    "https://github.com/falcosecurity/falco/archive/refs/tags/0.33.1.zip";
/// Download directory used when none is configured.
pub const DEFAULT_DOWNLOAD_DIR: &str = "generated";
/// File name of the archive inside the download directory.
pub const DEFAULT_ARCHIVE_NAME: &str = "falco-code.zip";
/// Top-level folder the archive expands into.
pub const DEFAULT_EXTRACT_ROOT: &str = "falco-0.33.1";
