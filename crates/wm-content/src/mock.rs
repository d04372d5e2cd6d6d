//! Mock content source for testing.
//!
//! Provides [`MockContentSource`] for unit testing without filesystem access.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::source::{Content, ContentError, ContentSource};

/// In-memory content source.
///
/// # Example
///
/// ```ignore
/// use wm_content::{ContentSource, MockContentSource};
///
/// let source = MockContentSource::new().with_page("01-git", "index", "# Git");
/// let content = source.read("01-git", "index").unwrap();
/// ```
#[derive(Debug, Default)]
pub struct MockContentSource {
    pages: HashMap<PathBuf, (String, Option<SystemTime>)>,
    failing: Vec<PathBuf>,
}

impl MockContentSource {
    /// Create an empty mock source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a body for `folder`/`file`.
    #[must_use]
    pub fn with_page(mut self, folder: &str, file: &str, text: impl Into<String>) -> Self {
        let path = self.content_path(folder, file);
        self.pages.insert(path, (text.into(), None));
        self
    }

    /// Add a body with a modification time.
    #[must_use]
    pub fn with_modified_page(
        mut self,
        folder: &str,
        file: &str,
        text: impl Into<String>,
        modified: SystemTime,
    ) -> Self {
        let path = self.content_path(folder, file);
        self.pages.insert(path, (text.into(), Some(modified)));
        self
    }

    /// Make reads of `folder`/`file` fail with an I/O error.
    #[must_use]
    pub fn with_failure(mut self, folder: &str, file: &str) -> Self {
        let path = self.content_path(folder, file);
        self.failing.push(path);
        self
    }
}

impl ContentSource for MockContentSource {
    fn content_path(&self, folder: &str, file: &str) -> PathBuf {
        Path::new(folder).join(format!("{file}.md"))
    }

    fn read(&self, folder: &str, file: &str) -> Result<Content, ContentError> {
        let path = self.content_path(folder, file);
        if self.failing.contains(&path) {
            return Err(ContentError::Io {
                path,
                source: std::io::Error::other("mock failure"),
            });
        }

        let (text, modified) = self
            .pages
            .get(&path)
            .ok_or_else(|| ContentError::NotFound(path.clone()))?;

        Ok(Content {
            text: text.clone(),
            source_path: path,
            modified: *modified,
        })
    }

    fn exists(&self, folder: &str, file: &str) -> bool {
        self.pages.contains_key(&self.content_path(folder, file))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_returns_added_page() {
        let source = MockContentSource::new().with_page("01-git", "index", "# Git");

        let content = source.read("01-git", "index").unwrap();

        assert_eq!(content.text, "# Git");
        assert_eq!(content.source_path, PathBuf::from("01-git/index.md"));
        assert!(content.modified.is_none());
    }

    #[test]
    fn test_read_missing_page() {
        let source = MockContentSource::new();

        assert!(matches!(
            source.read("01-git", "index"),
            Err(ContentError::NotFound(_))
        ));
        assert!(!source.exists("01-git", "index"));
    }

    #[test]
    fn test_read_failure() {
        let source = MockContentSource::new()
            .with_page("01-git", "index", "# Git")
            .with_failure("01-git", "index");

        assert!(matches!(
            source.read("01-git", "index"),
            Err(ContentError::Io { .. })
        ));
    }
}
