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

//! File accessors declared by generated fixture modules.
//!
//! A generated module holds one `static` [`FileAccessor`] per selected file. Inline
//! accessors carry their content in the binary; local accessors point at a file that must
//! still exist when the content is requested.

pub mod accessor;

pub use accessor::FileAccessor;
