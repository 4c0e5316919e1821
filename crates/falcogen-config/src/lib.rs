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

//! Configuration for the Falco source archive that fixtures are generated from.
//!
//! Layout: `defaults.rs` (pinned release constants), `model.rs` (`SourceConfig` and
//! derived paths), `validate.rs` (field validation), `error.rs` (`ConfigError`).

pub mod defaults;
pub mod error;
pub mod model;
mod validate;

pub use error::{ConfigError, ConfigResult};
pub use model::SourceConfig;
