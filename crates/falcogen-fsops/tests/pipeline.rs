use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use falcogen_config::SourceConfig;
use falcogen_fsops::{FsOpsError, fetch_and_enumerate};
use falcogen_test_support::archive::{ArchiveEntry, zip_bytes};
use falcogen_test_support::fixtures::temp_dir;
use httpmock::prelude::*;
use reqwest::Client;

fn config_for(server: &MockServer, download_dir: PathBuf) -> SourceConfig {
    SourceConfig {
        url: server.url("/falco.zip"),
        download_dir,
        archive_name: "falco-code.zip".to_string(),
        extract_root: "root".to_string(),
    }
}

#[tokio::test]
async fn pipeline_downloads_extracts_and_lists_tree() -> Result<()> {
    let server = MockServer::start_async().await;
    let body = zip_bytes(&[
        ArchiveEntry::File("root/a.txt", b"hello"),
        ArchiveEntry::File("root/sub/b.txt", b"world"),
    ])?;
    let mock = server.mock(|when, then| {
        when.method(GET).path("/falco.zip");
        then.status(200).body(body.clone());
    });

    let temp = temp_dir()?;
    let dest = temp.path().join("generated");
    let config = config_for(&server, dest.clone());
    let client = Client::new();

    let files = fetch_and_enumerate(&client, &config).await?;
    let again = fetch_and_enumerate(&client, &config).await?;

    let expected = BTreeSet::from([dest.join("root/a.txt"), dest.join("root/sub/b.txt")]);
    assert_eq!(files.into_iter().collect::<BTreeSet<_>>(), expected);
    assert_eq!(again.into_iter().collect::<BTreeSet<_>>(), expected);
    assert_eq!(fs::read_to_string(dest.join("root/sub/b.txt"))?, "world");
    assert!(dest.join("falco-code.zip").is_file());
    mock.assert();
    Ok(())
}

#[tokio::test]
async fn pipeline_stops_before_extraction_when_download_fails() -> Result<()> {
    let server = MockServer::start_async().await;
    let mock = server.mock(|when, then| {
        when.method(GET).path("/falco.zip");
        then.status(500);
    });

    let temp = temp_dir()?;
    let dest = temp.path().join("generated");
    let config = config_for(&server, dest.clone());

    let result = fetch_and_enumerate(&Client::new(), &config).await;

    assert!(matches!(
        result,
        Err(FsOpsError::HttpStatus { status: 500, .. })
    ));
    assert!(!dest.join("root").exists());
    mock.assert();
    Ok(())
}

#[tokio::test]
async fn pipeline_fails_when_archive_lacks_expected_root() -> Result<()> {
    let server = MockServer::start_async().await;
    let body = zip_bytes(&[ArchiveEntry::File("other/a.txt", b"hello")])?;
    server.mock(|when, then| {
        when.method(GET).path("/falco.zip");
        then.status(200).body(body.clone());
    });

    let temp = temp_dir()?;
    let config = config_for(&server, temp.path().join("generated"));

    let result = fetch_and_enumerate(&Client::new(), &config).await;

    assert!(matches!(
        result,
        Err(FsOpsError::Io {
            operation: "list_files.stat",
            ..
        })
    ));
    Ok(())
}

#[tokio::test]
async fn pipeline_rejects_invalid_url_before_any_io() -> Result<()> {
    let temp = temp_dir()?;
    let dest = temp.path().join("generated");
    let config = SourceConfig {
        url: "ftp://example.com/falco.zip".to_string(),
        download_dir: dest.clone(),
        ..SourceConfig::default()
    };

    let result = fetch_and_enumerate(&Client::new(), &config).await;

    assert!(matches!(result, Err(FsOpsError::Config { .. })));
    assert!(!dest.exists());
    Ok(())
}
