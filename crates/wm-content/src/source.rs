//! Content source trait and filesystem backend.
//!
//! A content body is addressed by a section `folder` and a page `file`
//! identifier, both taken from the catalog. Sources decide how that pair maps
//! to storage; [`FsContentSource`] reads `<root>/<folder>/<file>.md`.

use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Default content file extension.
pub const DEFAULT_EXTENSION: &str = "md";

/// A raw content body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Content {
    /// Markdown source.
    pub text: String,
    /// Path of the body relative to the source root.
    pub source_path: PathBuf,
    /// Last modification time, if the source tracks it.
    pub modified: Option<SystemTime>,
}

/// Error returned when a content body cannot be read.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    /// No body exists for the requested page.
    #[error("Content not found: {}", .0.display())]
    NotFound(PathBuf),
    /// The body exists but could not be read.
    #[error("I/O error reading {}: {source}", path.display())]
    Io {
        /// Path relative to the source root.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
}

/// Backend that loads content bodies.
pub trait ContentSource: Send + Sync {
    /// Path of the body for `folder`/`file`, relative to the source root.
    fn content_path(&self, folder: &str, file: &str) -> PathBuf;

    /// Read the body for `folder`/`file`.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::NotFound`] if no body exists, or
    /// [`ContentError::Io`] if it cannot be read.
    fn read(&self, folder: &str, file: &str) -> Result<Content, ContentError>;

    /// Check whether a body exists for `folder`/`file`.
    fn exists(&self, folder: &str, file: &str) -> bool;
}

/// Filesystem content source.
#[derive(Clone, Debug)]
pub struct FsContentSource {
    root: PathBuf,
    extension: String,
}

impl FsContentSource {
    /// Create a source rooted at `root` reading `.md` files.
    #[must_use]
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            extension: DEFAULT_EXTENSION.to_owned(),
        }
    }

    /// Read files with a different extension (without the dot).
    #[must_use]
    pub fn with_extension(mut self, extension: &str) -> Self {
        extension.trim_start_matches('.').clone_into(&mut self.extension);
        self
    }

    /// Root directory of the content tree.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl ContentSource for FsContentSource {
    fn content_path(&self, folder: &str, file: &str) -> PathBuf {
        Path::new(folder).join(format!("{file}.{}", self.extension))
    }

    fn read(&self, folder: &str, file: &str) -> Result<Content, ContentError> {
        let relative = self.content_path(folder, file);
        let path = self.root.join(&relative);

        let text = std::fs::read_to_string(&path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                ContentError::NotFound(relative.clone())
            } else {
                ContentError::Io {
                    path: relative.clone(),
                    source,
                }
            }
        })?;
        let modified = std::fs::metadata(&path).and_then(|m| m.modified()).ok();

        tracing::debug!(path = %path.display(), bytes = text.len(), "Read content file");

        Ok(Content {
            text,
            source_path: relative,
            modified,
        })
    }

    fn exists(&self, folder: &str, file: &str) -> bool {
        self.root.join(self.content_path(folder, file)).is_file()
    }
}
