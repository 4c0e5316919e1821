//! Typed source configuration and the paths derived from it.
//!
//! # Design
//! - Passed explicitly into the fetch pipeline; nothing is read from process-wide state.
//! - Every field has a default, so a config file only needs the values it overrides.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use url::Url;

use crate::defaults::{
    DEFAULT_ARCHIVE_NAME, DEFAULT_DOWNLOAD_DIR, DEFAULT_EXTRACT_ROOT, FALCO_SOURCE_URL,
};
use crate::error::{ConfigError, ConfigResult};
use crate::validate::{parse_source_url, validate_archive_name, validate_extract_root};

/// Remote archive location and the local cache layout it is unpacked into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SourceConfig {
    /// HTTP(S) URL of the ZIP archive.
    pub url: String,
    /// Directory holding the downloaded archive and the extracted tree.
    pub download_dir: PathBuf,
    /// File name of the archive inside `download_dir`.
    pub archive_name: String,
    /// Top-level folder the archive expands into, relative to `download_dir`.
    pub extract_root: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: FALCO_SOURCE_URL.to_string(),
            download_dir: PathBuf::from(DEFAULT_DOWNLOAD_DIR),
            archive_name: DEFAULT_ARCHIVE_NAME.to_string(),
            extract_root: DEFAULT_EXTRACT_ROOT.to_string(),
        }
    }
}

impl SourceConfig {
    /// Load a JSON configuration document, filling omitted fields with defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid JSON for this shape, or
    /// fails [`SourceConfig::validate`].
    pub fn from_json_file(path: &Path) -> ConfigResult<Self> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check every field for values the pipeline cannot work with.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidField`] naming the first offending field.
    pub fn validate(&self) -> ConfigResult<()> {
        parse_source_url(&self.url)?;
        validate_archive_name(&self.archive_name)?;
        validate_extract_root(&self.extract_root)?;
        Ok(())
    }

    /// Parsed archive URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidField`] if the URL is malformed or not HTTP(S).
    pub fn source_url(&self) -> ConfigResult<Url> {
        parse_source_url(&self.url)
    }

    /// Local path the archive is downloaded to.
    #[must_use]
    pub fn archive_path(&self) -> PathBuf {
        self.download_dir.join(&self.archive_name)
    }

    /// Directory the archive is extracted into.
    #[must_use]
    pub fn extract_dir(&self) -> &Path {
        &self.download_dir
    }

    /// Root of the extracted source tree.
    #[must_use]
    pub fn extracted_root(&self) -> PathBuf {
        self.download_dir.join(&self.extract_root)
    }
}
