//! The [`FileAccessor`] type.

use std::borrow::Cow;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use tracing::debug;

/// A named file whose content is either embedded or read from disk on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileAccessor {
    /// Content compiled into the binary.
    Inline {
        /// File name reported to consumers.
        name: &'static str,
        /// Embedded content.
        content: &'static str,
    },
    /// Content read from `path` each time it is requested.
    Local {
        /// File name reported to consumers.
        name: &'static str,
        /// Location of the file on disk.
        path: &'static str,
    },
}

impl FileAccessor {
    /// Declare an accessor with embedded content.
    #[must_use]
    pub const fn inline(name: &'static str, content: &'static str) -> Self {
        Self::Inline { name, content }
    }

    /// Declare an accessor backed by a file on disk.
    #[must_use]
    pub const fn local(name: &'static str, path: &'static str) -> Self {
        Self::Local { name, path }
    }

    /// File name reported to consumers.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match *self {
            Self::Inline { name, .. } | Self::Local { name, .. } => name,
        }
    }

    /// On-disk location for local accessors; `None` for inline ones.
    #[must_use]
    pub fn path(&self) -> Option<&'static Path> {
        match *self {
            Self::Inline { .. } => None,
            Self::Local { path, .. } => Some(Path::new(path)),
        }
    }

    /// Content of the file.
    ///
    /// # Errors
    ///
    /// Returns the IO error raised while reading a local accessor's file.
    pub fn content(&self) -> io::Result<Cow<'static, str>> {
        match *self {
            Self::Inline { content, .. } => Ok(Cow::Borrowed(content)),
            Self::Local { path, .. } => fs::read_to_string(path).map(Cow::Owned),
        }
    }

    /// Make the content available as a file and return its path.
    ///
    /// Inline content is written to `dir/<name>`, replacing any previous copy. Local
    /// accessors already live on disk: their path is returned once it is confirmed to be a
    /// regular file, and `dir` is not touched.
    ///
    /// # Errors
    ///
    /// Returns [`io::ErrorKind::InvalidInput`] when the name is not a single path component,
    /// or the IO error raised while writing or inspecting the file.
    pub fn materialize(&self, dir: &Path) -> io::Result<PathBuf> {
        match *self {
            Self::Inline { name, content } => {
                if !is_plain_file_name(name) {
                    return Err(io::Error::new(
                        io::ErrorKind::InvalidInput,
                        "accessor name must be a single path component",
                    ));
                }
                fs::create_dir_all(dir)?;
                let target = dir.join(name);
                fs::write(&target, content)?;
                debug!(name, path = %target.display(), "materialized inline accessor");
                Ok(target)
            }
            Self::Local { path, .. } => {
                let metadata = fs::metadata(path)?;
                if !metadata.is_file() {
                    return Err(io::Error::new(
                        io::ErrorKind::InvalidInput,
                        "local accessor does not point at a regular file",
                    ));
                }
                Ok(PathBuf::from(path))
            }
        }
    }
}

fn is_plain_file_name(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;

    static RULES: FileAccessor = FileAccessor::inline("rules.yaml", "- rule: shell\n");

    #[test]
    fn inline_accessor_serves_embedded_content() -> Result<()> {
        assert_eq!(RULES.name(), "rules.yaml");
        assert_eq!(RULES.path(), None);
        assert_eq!(RULES.content()?, "- rule: shell\n");
        Ok(())
    }

    #[test]
    fn local_accessor_reads_file_on_demand() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let file = dir.path().join("trace.scap");
        fs::write(&file, "first")?;
        let leaked: &'static str = Box::leak(file.display().to_string().into_boxed_str());
        let accessor = FileAccessor::local("trace.scap", leaked);

        assert_eq!(accessor.path(), Some(file.as_path()));
        assert_eq!(accessor.content()?, "first");
        fs::write(&file, "second")?;
        assert_eq!(accessor.content()?, "second");
        assert_eq!(accessor.materialize(Path::new("/unused"))?, file);

        fs::remove_file(&file)?;
        assert_eq!(
            accessor.content().err().map(|err| err.kind()),
            Some(io::ErrorKind::NotFound)
        );
        Ok(())
    }

    #[test]
    fn materialize_writes_inline_content() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let target = dir.path().join("nested");

        let written = RULES.materialize(&target)?;

        assert_eq!(written, target.join("rules.yaml"));
        assert_eq!(fs::read_to_string(written)?, "- rule: shell\n");
        Ok(())
    }

    #[test]
    fn materialize_rejects_names_with_directories() -> Result<()> {
        let dir = tempfile::tempdir()?;
        for name in ["../escape.txt", "a/b.txt", ""] {
            let accessor = FileAccessor::inline(name, "x");
            let err = accessor
                .materialize(dir.path())
                .err()
                .ok_or_else(|| anyhow::anyhow!("expected rejection for {name:?}"))?;
            assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
        }
        Ok(())
    }
}
