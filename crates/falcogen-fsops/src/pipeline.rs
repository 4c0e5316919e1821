//! Fetch, extract, and list composed into a single call.

use std::path::PathBuf;

use falcogen_config::SourceConfig;
use reqwest::Client;
use tracing::info;

use crate::archive::extract;
use crate::error::FsOpsResult;
use crate::fetch::fetch;
use crate::listing::list_files;
use crate::model::{ArchiveExtractionJob, RemoteResource};

/// Make sure the configured archive is downloaded and unpacked, then list every file in
/// the extracted source tree.
///
/// Stages run strictly in order and the first failure is returned without attempting the
/// next stage.
///
/// # Errors
///
/// Returns an error if the configured URL is invalid or any stage fails.
pub async fn fetch_and_enumerate(
    client: &Client,
    config: &SourceConfig,
) -> FsOpsResult<Vec<PathBuf>> {
    let url = config.source_url()?;
    let archive_path = config.archive_path();

    fetch(
        client,
        RemoteResource {
            url: &url,
            destination: &archive_path,
        },
    )
    .await?;

    extract(ArchiveExtractionJob {
        archive: &archive_path,
        destination: config.extract_dir(),
    })?;

    let root = config.extracted_root();
    let files = list_files(&root, true)?;
    info!(root = %root.display(), files = files.len(), "source tree enumerated");
    Ok(files)
}
