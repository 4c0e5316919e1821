//! Error types for source configuration.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result alias for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors raised while loading or validating a [`crate::SourceConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Field contained an invalid value.
    #[error("invalid value for '{field}': {reason}")]
    InvalidField {
        /// Field that failed validation.
        field: &'static str,
        /// Static reason for the failure.
        reason: &'static str,
        /// Offending value when available.
        value: Option<String>,
    },
    /// The configuration file could not be read.
    #[error("failed to read source configuration")]
    Read {
        /// Configuration file path.
        path: PathBuf,
        /// Underlying IO error.
        source: io::Error,
    },
    /// The configuration file was not valid JSON for the expected shape.
    #[error("failed to parse source configuration")]
    Parse {
        /// Configuration file path.
        path: PathBuf,
        /// Underlying JSON error.
        source: serde_json::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn invalid_field_message_names_field_and_reason() {
        let err = ConfigError::InvalidField {
            field: "url",
            reason: "unsupported scheme",
            value: Some("ftp://example.com".to_string()),
        };
        assert_eq!(err.to_string(), "invalid value for 'url': unsupported scheme");
        assert!(err.source().is_none());
    }

    #[test]
    fn read_error_exposes_source() {
        let err = ConfigError::Read {
            path: PathBuf::from("falcogen.json"),
            source: io::Error::other("io"),
        };
        assert_eq!(err.to_string(), "failed to read source configuration");
        assert!(err.source().is_some());
    }
}
