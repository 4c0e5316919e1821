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

//! Turns file paths into accessor declarations.
//!
//! # Design
//! - `ident` is pure string manipulation with no failure mode.
//! - `render` is a pure function from a [`GenerationRequest`] to Rust source text; callers
//!   own any file IO.
//! - [`DescriptorSet`] rejects a repeated identifier as it is pushed; `render` checks again
//!   for requests built by hand.

pub mod error;
pub mod ident;
pub mod model;
pub mod render;

pub use error::{RenderError, RenderResult};
pub use ident::{derive_identifier, is_valid_identifier};
pub use model::{DescriptorSet, GenerationRequest, LargeFileDescriptor, StringFileDescriptor};
pub use render::{render, render_to};
