//! Resolve catalog pages to rendered HTML.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::SystemTime;

use wm_nav::{DocItem, DocSection, NavIndex};

use crate::render::{TocEntry, escape_html, render_markdown};
use crate::source::{ContentError, ContentSource};

/// A page ready to be served.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedPage {
    /// Rendered HTML body.
    pub html: String,
    /// Table of contents.
    pub toc: Vec<TocEntry>,
    /// Content file path relative to the source root.
    pub source_path: PathBuf,
    /// Last modification time of the content file.
    pub modified: Option<SystemTime>,
    /// Whether the content file is missing and `html` is a stand-in.
    pub placeholder: bool,
}

/// A catalog page without a content file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MissingContent {
    /// Section slug.
    pub section: String,
    /// Page slug.
    pub page: String,
    /// Expected content file path relative to the source root.
    pub source_path: PathBuf,
}

/// Loads and renders page content from a [`ContentSource`].
#[derive(Clone)]
pub struct ContentResolver {
    source: Arc<dyn ContentSource>,
}

impl ContentResolver {
    /// Create a resolver over `source`.
    #[must_use]
    pub fn new(source: Arc<dyn ContentSource>) -> Self {
        Self { source }
    }

    /// Render the content of `page` in `section`.
    ///
    /// A page whose content file does not exist yet still resolves, to a
    /// placeholder naming the expected file.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::Io`] if the content file exists but cannot be read.
    pub fn resolve(
        &self,
        section: &DocSection,
        page: &DocItem,
    ) -> Result<ResolvedPage, ContentError> {
        match self.source.read(&section.folder, &page.file) {
            Ok(content) => {
                let rendered = render_markdown(&content.text);
                Ok(ResolvedPage {
                    html: rendered.html,
                    toc: rendered.toc,
                    source_path: content.source_path,
                    modified: content.modified,
                    placeholder: false,
                })
            }
            Err(ContentError::NotFound(source_path)) => {
                tracing::warn!(
                    section = %section.slug,
                    page = %page.slug,
                    path = %source_path.display(),
                    "Content file missing, serving placeholder"
                );
                Ok(ResolvedPage {
                    html: placeholder_html(&source_path),
                    toc: Vec::new(),
                    source_path,
                    modified: None,
                    placeholder: true,
                })
            }
            Err(e) => Err(e),
        }
    }

    /// Every page in `index` whose content file does not exist.
    #[must_use]
    pub fn missing(&self, index: &NavIndex) -> Vec<MissingContent> {
        index
            .iter_pages()
            .filter(|p| !self.source.exists(&p.section.folder, &p.page.file))
            .map(|p| MissingContent {
                section: p.section.slug.clone(),
                page: p.page.slug.clone(),
                source_path: self.source.content_path(&p.section.folder, &p.page.file),
            })
            .collect()
    }
}

fn placeholder_html(source_path: &std::path::Path) -> String {
    format!(
        "<p>This documentation page is coming soon.</p>\n\
         <p>Content file: <code>{}</code></p>\n",
        escape_html(&source_path.display().to_string())
    )
}
