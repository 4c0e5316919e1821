#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]

//! Fetch, unpack, and enumerate the upstream source archive.
//!
//! Every stage treats an existing path as proof of prior completion, so re-running the
//! pipeline against a populated download directory performs no network or disk writes.
//! The download directory is not locked; run one pipeline per directory at a time.
//!
//! Layout: `fetch.rs` (HTTP download), `archive.rs` (ZIP extraction), `listing.rs`
//! (directory enumeration), `pipeline.rs` (composition), `model/` (request and outcome
//! types), `error.rs` (`FsOpsError`).

pub mod archive;
pub mod error;
pub mod fetch;
pub mod listing;
pub mod model;
pub mod pipeline;

pub use archive::extract;
pub use error::{FsOpsError, FsOpsResult};
pub use fetch::fetch;
pub use listing::list_files;
pub use model::{ArchiveExtractionJob, ExtractSummary, FetchOutcome, RemoteResource};
pub use pipeline::fetch_and_enumerate;
