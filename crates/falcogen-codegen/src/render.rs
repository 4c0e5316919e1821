//! Template rendering for accessor modules.
//!
//! # Design
//! - One embedded template, rendered with strict undefined handling so a missing field is an
//!   error rather than an empty string.
//! - Inline content is emitted as a raw string whose `#` fence is sized to the content, so no
//!   payload can terminate the literal early.
//! - Identifiers are validated before rendering; the template itself never rewrites names.

use std::collections::HashSet;
use std::io::Write;

use minijinja::{AutoEscape, Environment, ErrorKind, UndefinedBehavior};
use tracing::debug;

use crate::error::{RenderError, RenderResult};
use crate::ident::is_valid_identifier;
use crate::model::GenerationRequest;

const TEMPLATE_NAME: &str = "accessors.rs";
const TEMPLATE_SOURCE: &str = include_str!("../templates/accessors.rs.j2");
const MAX_RAW_FENCE: usize = 255;

/// Render `request` into Rust source text.
///
/// # Errors
///
/// Returns an error when the package name or an accessor name is not a usable identifier,
/// when two accessors share a name, or when the template fails to render.
pub fn render(request: &GenerationRequest) -> RenderResult<String> {
    check_names(request)?;

    let env = environment()?;
    let mut output = env.get_template(TEMPLATE_NAME)?.render(request)?;
    if !output.ends_with('\n') {
        output.push('\n');
    }

    debug!(
        package = %request.package_name,
        inline = request.string_files.len(),
        local = request.large_files.len(),
        bytes = output.len(),
        "rendered accessor module"
    );
    Ok(output)
}

/// Render `request` and write the result to `out`.
///
/// # Errors
///
/// Returns the errors of [`render`], plus [`RenderError::Write`] when `out` fails.
pub fn render_to<W: Write>(request: &GenerationRequest, out: &mut W) -> RenderResult<()> {
    let source = render(request)?;
    out.write_all(source.as_bytes())
        .and_then(|()| out.flush())
        .map_err(|source| RenderError::Write { source })
}

fn environment() -> RenderResult<Environment<'static>> {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.set_lstrip_blocks(true);
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env.set_auto_escape_callback(|_| AutoEscape::None);
    env.add_filter("rust_str", rust_str);
    env.add_filter("raw_str", raw_str);
    env.add_template(TEMPLATE_NAME, TEMPLATE_SOURCE)?;
    Ok(env)
}

fn check_names(request: &GenerationRequest) -> RenderResult<()> {
    if !is_valid_identifier(&request.package_name) {
        return Err(RenderError::InvalidPackageName {
            value: request.package_name.clone(),
        });
    }

    let names = request
        .string_files
        .iter()
        .map(|file| file.var_name.as_str())
        .chain(request.large_files.iter().map(|file| file.var_name.as_str()));
    let mut seen = HashSet::new();
    for name in names {
        if !is_valid_identifier(name) {
            return Err(RenderError::InvalidIdentifier {
                value: name.to_string(),
            });
        }
        if !seen.insert(name) {
            return Err(RenderError::DuplicateIdentifier {
                name: name.to_string(),
            });
        }
    }
    Ok(())
}

fn rust_str(value: &str) -> String {
    format!("{value:?}")
}

fn raw_str(value: &str) -> Result<String, minijinja::Error> {
    // Raw strings cannot hold a bare carriage return.
    if value.contains('\r') {
        return Ok(rust_str(value));
    }

    let hashes = raw_fence_len(value);
    if hashes > MAX_RAW_FENCE {
        return Err(minijinja::Error::new(
            ErrorKind::InvalidOperation,
            "content needs a raw string fence longer than 255 hashes",
        ));
    }

    let fence = "#".repeat(hashes);
    Ok(format!("r{fence}\"{value}\"{fence}"))
}

fn raw_fence_len(value: &str) -> usize {
    let mut longest = 0;
    let mut run = None;
    for ch in value.chars() {
        run = match (ch, run) {
            ('"', _) => Some(0),
            ('#', Some(count)) => Some(count + 1),
            _ => None,
        };
        if let Some(count) = run {
            longest = longest.max(count);
        }
    }
    longest + 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DescriptorSet, LargeFileDescriptor, StringFileDescriptor};
    use anyhow::{Result, anyhow};
    use chrono::{TimeZone, Utc};
    use std::path::PathBuf;

    fn inline(var: &str, content: &str) -> StringFileDescriptor {
        StringFileDescriptor {
            var_name: var.to_string(),
            file_name: format!("{var}.txt"),
            file_content: content.to_string(),
        }
    }

    fn request(string_files: Vec<StringFileDescriptor>) -> Result<GenerationRequest> {
        let mut set = DescriptorSet::new();
        for file in string_files {
            set.push_string(file)?;
        }
        set.push_large(LargeFileDescriptor {
            var_name: "C".to_string(),
            file_name: "c.scap".to_string(),
            file_path: PathBuf::from("/data/c.scap"),
        })?;
        let timestamp = Utc
            .with_ymd_and_hms(2026, 10, 19, 8, 30, 0)
            .single()
            .ok_or_else(|| anyhow!("invalid timestamp"))?;
        Ok(set.into_request(timestamp, "fixtures"))
    }

    fn position(haystack: &str, needle: &str) -> Result<usize> {
        haystack
            .find(needle)
            .ok_or_else(|| anyhow!("'{needle}' missing from output"))
    }

    #[test]
    fn renders_inline_then_local_in_order() -> Result<()> {
        let output = render(&request(vec![inline("A", "alpha"), inline("B", "beta")])?)?;

        assert!(output.starts_with("// Code generated by falcogen; DO NOT EDIT.\n"));
        assert!(output.contains("// This file was generated at 2026-10-19T08:30:00Z"));
        assert!(output.contains("pub mod fixtures {"));

        let a = position(&output, "pub static A:")?;
        let b = position(&output, "pub static B:")?;
        let c = position(&output, "pub static C:")?;
        assert!(a < b && b < c);

        assert!(output.contains("FileAccessor::inline(\n            \"A.txt\",\n            r#\"alpha\"#,"));
        assert!(output.contains("FileAccessor::local(\n            \"c.scap\",\n            \"/data/c.scap\","));
        assert!(output.ends_with("}\n"));
        Ok(())
    }

    #[test]
    fn raw_string_fence_outgrows_embedded_terminators() -> Result<()> {
        let output = render(&request(vec![inline("A", "say \"#hi\"## done")])?)?;
        assert!(output.contains("r###\"say \"#hi\"## done\"###"));
        Ok(())
    }

    #[test]
    fn carriage_returns_fall_back_to_escaped_literal() -> Result<()> {
        let output = render(&request(vec![inline("A", "line\r\nnext")])?)?;
        assert!(output.contains("\"line\\r\\nnext\""));
        Ok(())
    }

    #[test]
    fn rejects_invalid_package_and_identifiers() -> Result<()> {
        let mut bad_package = request(vec![inline("A", "x")])?;
        bad_package.package_name = "not-a-module".to_string();
        assert!(matches!(
            render(&bad_package),
            Err(RenderError::InvalidPackageName { .. })
        ));

        let mut bad_name = request(vec![inline("A", "x")])?;
        bad_name.string_files[0].var_name = "1st".to_string();
        assert!(matches!(
            render(&bad_name),
            Err(RenderError::InvalidIdentifier { value }) if value == "1st"
        ));

        let mut duplicate = request(vec![inline("A", "x")])?;
        duplicate.large_files[0].var_name = "A".to_string();
        assert!(matches!(
            render(&duplicate),
            Err(RenderError::DuplicateIdentifier { .. })
        ));
        Ok(())
    }

    #[test]
    fn oversized_fence_is_a_template_error() -> Result<()> {
        let content = format!("\"{}", "#".repeat(MAX_RAW_FENCE));
        let result = render(&request(vec![inline("A", &content)])?);
        assert!(matches!(result, Err(RenderError::Template { .. })));
        Ok(())
    }

    #[test]
    fn render_to_writes_the_same_bytes() -> Result<()> {
        let request = request(vec![inline("A", "alpha")])?;
        let mut buffer = Vec::new();
        render_to(&request, &mut buffer)?;
        assert_eq!(String::from_utf8(buffer)?, render(&request)?);
        Ok(())
    }

    #[test]
    fn output_matches_the_module_compiled_by_the_accessor_tests() -> Result<()> {
        let files = [
            (
                "Rules",
                "rules.yaml",
                "- rule: \"spawned shell\"\n  output: \"#{proc.name}\"# ok\n".to_string(),
            ),
            (
                "Banner",
                "banner.txt",
                format!("banner: \"{}\"\n", "#".repeat(25)),
            ),
            ("Windows", "windows.ini", "line one\r\nline two\r\n".to_string()),
            (
                "Unicode",
                "unicode.txt",
                "größe: 5 µs → ✓\n日本語のルール\n".to_string(),
            ),
        ];
        let mut set = DescriptorSet::new();
        for (var_name, file_name, file_content) in files {
            set.push_string(StringFileDescriptor {
                var_name: var_name.to_string(),
                file_name: file_name.to_string(),
                file_content,
            })?;
        }
        set.push_large(LargeFileDescriptor {
            var_name: "Trace".to_string(),
            file_name: "trace.scap".to_string(),
            file_path: PathBuf::from("/nonexistent/falcogen/trace.scap"),
        })?;
        let timestamp = Utc
            .with_ymd_and_hms(2024, 5, 1, 12, 0, 0)
            .single()
            .ok_or_else(|| anyhow!("invalid timestamp"))?;

        let output = render(&set.into_request(timestamp, "fixtures"))?;
        let fixture = include_str!("../../falcogen-accessor/tests/fixtures/generated_module.rs");
        let non_blank = |text: &str| -> Vec<String> {
            text.lines()
                .filter(|line| !line.trim().is_empty())
                .map(str::to_string)
                .collect()
        };
        assert_eq!(non_blank(&output), non_blank(fixture));
        Ok(())
    }

    #[test]
    fn fence_length_tracks_longest_hash_run() {
        assert_eq!(raw_fence_len("plain"), 1);
        assert_eq!(raw_fence_len("\"quoted\""), 1);
        assert_eq!(raw_fence_len("\"#"), 2);
        assert_eq!(raw_fence_len("# \"## x\"#"), 3);
    }
}
