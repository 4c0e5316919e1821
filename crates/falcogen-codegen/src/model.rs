//! Descriptor types consumed by the renderer.

use std::collections::HashSet;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::{RenderError, RenderResult};

/// Accessor whose content is read from disk when the generated code runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LargeFileDescriptor {
    /// Identifier of the generated binding.
    pub var_name: String,
    /// File name reported by the accessor.
    pub file_name: String,
    /// Location of the file on disk.
    pub file_path: PathBuf,
}

/// Accessor whose content is embedded in the generated source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StringFileDescriptor {
    /// Identifier of the generated binding.
    pub var_name: String,
    /// File name reported by the accessor.
    pub file_name: String,
    /// Content embedded verbatim.
    pub file_content: String,
}

/// Everything needed to render one accessor module.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationRequest {
    /// Generation time written into the header.
    pub timestamp: DateTime<Utc>,
    /// Name of the generated module.
    pub package_name: String,
    /// Inline accessors, rendered first and in order.
    pub string_files: Vec<StringFileDescriptor>,
    /// File-reference accessors, rendered after the inline ones and in order.
    pub large_files: Vec<LargeFileDescriptor>,
}

/// Collects descriptors while refusing to hand out the same identifier twice.
#[derive(Debug, Default)]
pub struct DescriptorSet {
    claimed: HashSet<String>,
    string_files: Vec<StringFileDescriptor>,
    large_files: Vec<LargeFileDescriptor>,
}

impl DescriptorSet {
    /// Start an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an inline accessor.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::DuplicateIdentifier`] if the name is already taken.
    pub fn push_string(&mut self, descriptor: StringFileDescriptor) -> RenderResult<()> {
        self.claim(&descriptor.var_name)?;
        self.string_files.push(descriptor);
        Ok(())
    }

    /// Append a file-reference accessor.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::DuplicateIdentifier`] if the name is already taken.
    pub fn push_large(&mut self, descriptor: LargeFileDescriptor) -> RenderResult<()> {
        self.claim(&descriptor.var_name)?;
        self.large_files.push(descriptor);
        Ok(())
    }

    /// Number of descriptors collected so far.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.string_files.len() + self.large_files.len()
    }

    /// True when nothing has been collected.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Freeze the collected descriptors into a request.
    #[must_use]
    pub fn into_request(
        self,
        timestamp: DateTime<Utc>,
        package_name: impl Into<String>,
    ) -> GenerationRequest {
        GenerationRequest {
            timestamp,
            package_name: package_name.into(),
            string_files: self.string_files,
            large_files: self.large_files,
        }
    }

    fn claim(&mut self, name: &str) -> RenderResult<()> {
        if self.claimed.insert(name.to_string()) {
            Ok(())
        } else {
            Err(RenderError::DuplicateIdentifier {
                name: name.to_string(),
            })
        }
    }
}
