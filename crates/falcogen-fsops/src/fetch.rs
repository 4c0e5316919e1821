//! HTTP download of the source archive.
//!
//! The body is streamed into a `.part` sibling and renamed into place once complete, so a
//! destination that exists is always a finished download.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use futures_util::StreamExt;
use reqwest::Client;
use tokio::fs::{self, File};
use tokio::io::AsyncWriteExt;
use tracing::{debug, info};

use crate::error::{FsOpsError, FsOpsResult};
use crate::model::{FetchOutcome, RemoteResource};

const PARTIAL_SUFFIX: &str = ".part";

/// Download `resource.url` to `resource.destination` unless the destination already exists.
///
/// # Errors
///
/// Returns an error if parent directories cannot be created, the request fails or answers
/// with a non-success status, or the body cannot be written.
pub async fn fetch(client: &Client, resource: RemoteResource<'_>) -> FsOpsResult<FetchOutcome> {
    let RemoteResource { url, destination } = resource;

    if fs::metadata(destination)
        .await
        .is_ok_and(|metadata| metadata.is_file())
    {
        info!(
            url = %url,
            path = %destination.display(),
            "archive already present; skipping download"
        );
        return Ok(FetchOutcome::Skipped);
    }

    if let Some(parent) = destination.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .await
            .map_err(|source| FsOpsError::io("fetch.create_parent", parent, source))?;
    }

    info!(url = %url, path = %destination.display(), "downloading archive");
    let response = client
        .get(url.clone())
        .send()
        .await
        .map_err(|source| FsOpsError::http("fetch.send", url.as_str(), source))?;

    let status = response.status();
    if !status.is_success() {
        return Err(FsOpsError::HttpStatus {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let partial = partial_path(destination)?;
    let mut output = File::create(&partial)
        .await
        .map_err(|source| FsOpsError::io("fetch.create_file", &partial, source))?;

    let mut bytes: u64 = 0;
    let mut body = response.bytes_stream();
    while let Some(chunk) = body.next().await {
        let chunk =
            chunk.map_err(|source| FsOpsError::http("fetch.read_body", url.as_str(), source))?;
        output
            .write_all(&chunk)
            .await
            .map_err(|source| FsOpsError::io("fetch.write", &partial, source))?;
        bytes += chunk.len() as u64;
    }
    output
        .flush()
        .await
        .map_err(|source| FsOpsError::io("fetch.flush", &partial, source))?;
    drop(output);

    fs::rename(&partial, destination)
        .await
        .map_err(|source| FsOpsError::io("fetch.rename", destination, source))?;

    debug!(path = %destination.display(), bytes, "download complete");
    Ok(FetchOutcome::Downloaded { bytes })
}

fn partial_path(destination: &Path) -> FsOpsResult<PathBuf> {
    let file_name = destination
        .file_name()
        .ok_or_else(|| FsOpsError::InvalidInput {
            field: "destination",
            reason: "missing_file_name",
            value: Some(destination.display().to_string()),
        })?;
    let mut partial = OsString::from(file_name);
    partial.push(PARTIAL_SUFFIX);
    Ok(destination.with_file_name(partial))
}
