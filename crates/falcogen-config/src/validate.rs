//! Validation helpers for source configuration fields.

use std::path::{Component, Path};

use url::Url;

use crate::error::{ConfigError, ConfigResult};

#[allow(clippy::redundant_pub_crate)]
pub(crate) fn parse_source_url(value: &str) -> ConfigResult<Url> {
    let url = Url::parse(value).map_err(|_| ConfigError::InvalidField {
        field: "url",
        reason: "not a valid URL",
        value: Some(value.to_string()),
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        _ => Err(ConfigError::InvalidField {
            field: "url",
            reason: "unsupported scheme",
            value: Some(value.to_string()),
        }),
    }
}

#[allow(clippy::redundant_pub_crate)]
pub(crate) fn validate_archive_name(value: &str) -> ConfigResult<()> {
    let mut components = Path::new(value).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(()),
        _ => Err(ConfigError::InvalidField {
            field: "archive_name",
            reason: "must be a single file name",
            value: Some(value.to_string()),
        }),
    }
}

#[allow(clippy::redundant_pub_crate)]
pub(crate) fn validate_extract_root(value: &str) -> ConfigResult<()> {
    if value.trim().is_empty() {
        return Err(ConfigError::InvalidField {
            field: "extract_root",
            reason: "must not be empty",
            value: None,
        });
    }

    for component in Path::new(value).components() {
        match component {
            Component::Normal(_) | Component::CurDir => {}
            _ => {
                return Err(ConfigError::InvalidField {
                    field: "extract_root",
                    reason: "must be relative without parent segments",
                    value: Some(value.to_string()),
                });
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_source_url_accepts_http_schemes() -> ConfigResult<()> {
        let url = parse_source_url("https://example.com/archive.zip")?;
        assert_eq!(url.host_str(), Some("example.com"));
        parse_source_url("http://127.0.0.1:8080/a.zip")?;
        Ok(())
    }

    #[test]
    fn parse_source_url_rejects_other_schemes_and_garbage() {
        assert!(matches!(
            parse_source_url("ftp://example.com/a.zip"),
            Err(ConfigError::InvalidField {
                reason: "unsupported scheme",
                ..
            })
        ));
        assert!(matches!(
            parse_source_url("not a url"),
            Err(ConfigError::InvalidField {
                reason: "not a valid URL",
                ..
            })
        ));
    }

    #[test]
    fn archive_name_must_be_single_component() {
        assert!(validate_archive_name("falco-code.zip").is_ok());
        assert!(validate_archive_name("nested/falco-code.zip").is_err());
        assert!(validate_archive_name("../falco-code.zip").is_err());
        assert!(validate_archive_name("").is_err());
    }

    #[test]
    fn extract_root_rejects_escapes() {
        assert!(validate_extract_root("falco-0.33.1").is_ok());
        assert!(validate_extract_root("nested/./root").is_ok());
        assert!(validate_extract_root("  ").is_err());
        assert!(validate_extract_root("../outside").is_err());
        assert!(validate_extract_root("/abs").is_err());
    }
}
