//! Error types for accessor source generation.

use std::io;

use thiserror::Error;

/// Result alias for generation operations.
pub type RenderResult<T> = Result<T, RenderError>;

/// Errors raised while assembling or rendering a [`crate::GenerationRequest`].
#[derive(Debug, Error)]
pub enum RenderError {
    /// The template engine failed to produce output.
    #[error("failed to render accessor template")]
    Template {
        /// Underlying template error.
        source: minijinja::Error,
    },
    /// The module name is not a usable Rust identifier.
    #[error("invalid package name '{value}'")]
    InvalidPackageName {
        /// Offending package name.
        value: String,
    },
    /// A descriptor carries a name that is not a usable Rust identifier.
    #[error("invalid accessor identifier '{value}'")]
    InvalidIdentifier {
        /// Offending identifier.
        value: String,
    },
    /// Two descriptors in one request share an identifier.
    #[error("duplicate accessor identifier '{name}'")]
    DuplicateIdentifier {
        /// Identifier claimed twice.
        name: String,
    },
    /// Writing the rendered output failed.
    #[error("failed to write rendered accessors")]
    Write {
        /// Underlying IO error.
        source: io::Error,
    },
}

impl From<minijinja::Error> for RenderError {
    fn from(source: minijinja::Error) -> Self {
        Self::Template { source }
    }
}
