//! Shared HTTP client, resolved configuration, and error types for the CLI.

use std::fmt::{self, Display, Formatter};
use std::time::Duration;

use anyhow::anyhow;
use falcogen_codegen::RenderError;
use falcogen_config::{ConfigError, SourceConfig};
use falcogen_fsops::FsOpsError;
use reqwest::Client;

use crate::cli::Cli;

const USER_AGENT: &str = concat!("falcogen/", env!("CARGO_PKG_VERSION"));

/// CLI-level error type to distinguish validation from operational failures.
#[derive(Debug)]
pub(crate) enum CliError {
    Validation(String),
    Failure(anyhow::Error),
}

/// Convenience alias for functions returning a `CliError`.
pub(crate) type CliResult<T> = Result<T, CliError>;

impl CliError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub(crate) fn failure(error: impl Into<anyhow::Error>) -> Self {
        Self::Failure(error.into())
    }

    pub(crate) const fn exit_code(&self) -> i32 {
        match self {
            Self::Validation(_) => 2,
            Self::Failure(_) => 3,
        }
    }

    pub(crate) fn display_message(&self) -> String {
        match self {
            Self::Validation(message) => message.clone(),
            Self::Failure(error) => format!("{error:#}"),
        }
    }
}

impl Display for CliError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str("cli error")
    }
}

impl std::error::Error for CliError {}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::InvalidField { .. } => Self::validation(config_message(&err)),
            ConfigError::Read { .. } | ConfigError::Parse { .. } => {
                Self::failure(anyhow::Error::new(err))
            }
        }
    }
}

impl From<FsOpsError> for CliError {
    fn from(err: FsOpsError) -> Self {
        let context = match &err {
            FsOpsError::Config { source } => return Self::validation(config_message(source)),
            FsOpsError::InvalidInput { field, reason, .. } => {
                return Self::validation(format!("invalid {field}: {reason}"));
            }
            FsOpsError::HttpStatus { url, status } => format!("GET {url} returned HTTP {status}"),
            FsOpsError::Http { url, .. } => format!("GET {url} failed"),
            other => match (other.operation(), other.path()) {
                (Some(operation), Some(path)) => {
                    format!("{operation} failed for {}", path.display())
                }
                (Some(operation), None) => format!("{operation} failed"),
                _ => "source pipeline failed".to_string(),
            },
        };
        Self::failure(anyhow::Error::new(err).context(context))
    }
}

impl From<RenderError> for CliError {
    fn from(err: RenderError) -> Self {
        match err {
            RenderError::InvalidPackageName { .. }
            | RenderError::InvalidIdentifier { .. }
            | RenderError::DuplicateIdentifier { .. } => Self::validation(err.to_string()),
            RenderError::Template { .. } | RenderError::Write { .. } => {
                Self::failure(anyhow::Error::new(err))
            }
        }
    }
}

fn config_message(err: &ConfigError) -> String {
    match err {
        ConfigError::InvalidField {
            value: Some(value), ..
        } => format!("{err} (got '{value}')"),
        _ => err.to_string(),
    }
}

/// Application context passed to command handlers.
#[derive(Clone)]
pub(crate) struct AppContext {
    pub(crate) client: Client,
    pub(crate) source: SourceConfig,
}

impl AppContext {
    /// Resolve the source configuration and build the HTTP client.
    pub(crate) fn from_cli(cli: &Cli) -> CliResult<Self> {
        let source = resolve_source_config(cli)?;
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(secs) = cli.timeout {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|err| CliError::failure(anyhow!("failed to build HTTP client: {err}")))?;
        Ok(Self { client, source })
    }
}

/// Layer flags and environment overrides on top of the config file or the defaults.
pub(crate) fn resolve_source_config(cli: &Cli) -> CliResult<SourceConfig> {
    let mut config = match &cli.config {
        Some(path) => SourceConfig::from_json_file(path)?,
        None => SourceConfig::default(),
    };
    if let Some(url) = &cli.url {
        config.url.clone_from(url);
    }
    if let Some(dir) = &cli.download_dir {
        config.download_dir.clone_from(dir);
    }
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn exit_codes_split_validation_from_failure() {
        let validation = CliError::validation("bad flag");
        assert_eq!(validation.exit_code(), 2);
        assert_eq!(validation.display_message(), "bad flag");

        let failure = CliError::failure(anyhow!("inner").context("outer"));
        assert_eq!(failure.exit_code(), 3);
        assert_eq!(failure.display_message(), "outer: inner");
        assert_eq!(failure.to_string(), "cli error");
    }

    #[test]
    fn fsops_errors_carry_path_context() {
        let err: CliError = FsOpsError::HttpStatus {
            url: "http://127.0.0.1/falco.zip".to_string(),
            status: 404,
        }
        .into();
        assert_eq!(err.exit_code(), 3);
        assert!(
            err.display_message()
                .starts_with("GET http://127.0.0.1/falco.zip returned HTTP 404")
        );

        let err: CliError = FsOpsError::InvalidInput {
            field: "archive_entry",
            reason: "entry escapes the destination directory",
            value: Some("../x".to_string()),
        }
        .into();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn config_errors_are_validation_failures() {
        let err: CliError = ConfigError::InvalidField {
            field: "url",
            reason: "scheme must be http or https",
            value: Some("ftp://example.com".to_string()),
        }
        .into();
        assert_eq!(err.exit_code(), 2);
        assert!(err.display_message().contains("ftp://example.com"));

        let err: CliError = ConfigError::Read {
            path: PathBuf::from("/missing.json"),
            source: std::io::Error::other("gone"),
        }
        .into();
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn render_errors_split_by_kind() {
        let err: CliError = RenderError::DuplicateIdentifier {
            name: "Rules".to_string(),
        }
        .into();
        assert_eq!(err.exit_code(), 2);
        assert_eq!(err.display_message(), "duplicate accessor identifier 'Rules'");
    }
}
