use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, anyhow};
use chrono::Utc;
use falcogen_codegen::{
    DescriptorSet, LargeFileDescriptor, StringFileDescriptor, derive_identifier,
    is_valid_identifier, render,
};
use falcogen_fsops::fetch_and_enumerate;
use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use tracing::{info, warn};

use crate::cli::GenerateArgs;
use crate::client::{AppContext, CliError, CliResult};

/// Render the accessor module for the files selected by `args`.
///
/// Files are keyed by their `/`-separated path below the extracted root and visited in key
/// order; a file matching both pattern lists is embedded inline. Returns the generated
/// source when no output file was requested.
pub(crate) async fn handle_generate(
    ctx: &AppContext,
    args: &GenerateArgs,
) -> CliResult<Option<String>> {
    if !is_valid_identifier(&args.package) {
        return Err(CliError::validation(format!(
            "package name '{}' is not a valid Rust identifier",
            args.package
        )));
    }
    if args.inline.is_empty() && args.local.is_empty() {
        return Err(CliError::validation(
            "at least one --inline or --local pattern is required",
        ));
    }
    let inline = build_globset(&args.inline)?;
    let local = build_globset(&args.local)?;

    let files = fetch_and_enumerate(&ctx.client, &ctx.source).await?;
    let root = ctx.source.extracted_root();
    let selected: BTreeMap<String, PathBuf> = files
        .into_iter()
        .filter_map(|path| Some((relative_key(&root, &path)?, path)))
        .collect();

    let mut descriptors = DescriptorSet::new();
    for (key, path) in &selected {
        if inline.is_match(key) {
            descriptors.push_string(inline_descriptor(key, path, &args.prefix)?)?;
        } else if local.is_match(key) {
            descriptors.push_large(local_descriptor(key, path, &args.prefix)?)?;
        }
    }
    if descriptors.is_empty() {
        warn!(root = %root.display(), "no files matched the requested patterns");
    }

    let accessors = descriptors.len();
    let request = descriptors.into_request(Utc::now(), args.package.clone());
    let source = render(&request)?;

    match &args.out {
        Some(out) => {
            write_output(out, &source)?;
            info!(out = %out.display(), accessors, "accessor module written");
            Ok(None)
        }
        None => Ok(Some(source)),
    }
}

fn build_globset(patterns: &[String]) -> CliResult<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = GlobBuilder::new(pattern)
            .literal_separator(true)
            .build()
            .map_err(|err| CliError::validation(format!("invalid pattern '{pattern}': {err}")))?;
        builder.add(glob);
    }
    builder
        .build()
        .map_err(|err| CliError::validation(format!("invalid pattern set: {err}")))
}

fn relative_key(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    let parts: Vec<_> = relative
        .components()
        .map(|component| component.as_os_str().to_string_lossy())
        .collect();
    Some(parts.join("/"))
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn inline_descriptor(key: &str, path: &Path, prefix: &str) -> CliResult<StringFileDescriptor> {
    let file_content = fs::read_to_string(path)
        .with_context(|| format!("failed to read {} as UTF-8 text", path.display()))
        .map_err(CliError::failure)?;
    Ok(StringFileDescriptor {
        var_name: derive_identifier(key, prefix),
        file_name: file_name(path),
        file_content,
    })
}

fn local_descriptor(key: &str, path: &Path, prefix: &str) -> CliResult<LargeFileDescriptor> {
    let file_path = std::path::absolute(path)
        .with_context(|| format!("failed to resolve {}", path.display()))
        .map_err(CliError::failure)?;
    Ok(LargeFileDescriptor {
        var_name: derive_identifier(key, prefix),
        file_name: file_name(path),
        file_path,
    })
}

fn write_output(out: &Path, source: &str) -> CliResult<()> {
    if let Some(parent) = out.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))
            .map_err(CliError::failure)?;
    }
    fs::write(out, source)
        .map_err(|err| CliError::failure(anyhow!("failed to write {}: {err}", out.display())))
}
