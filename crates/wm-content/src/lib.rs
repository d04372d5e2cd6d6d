//! Content loading and rendering for Waymark.
//!
//! The navigation catalog names a `folder` per section and a `file` per page;
//! this crate turns that pair into HTML:
//!
//! - [`ContentSource`]: backend abstraction, with [`FsContentSource`] for disk
//! - [`render_markdown`]: markdown to HTML with heading anchors and a TOC
//! - [`ContentResolver`]: catalog page to [`ResolvedPage`], falling back to a
//!   placeholder when the content file has not been written yet
//!
//! # Features
//!
//! - `mock`: exposes [`MockContentSource`] for tests in dependent crates

#[cfg(any(test, feature = "mock"))]
mod mock;
mod render;
mod resolver;
mod source;

#[cfg(feature = "mock")]
pub use mock::MockContentSource;
pub use render::{RenderedContent, TocEntry, escape_html, render_markdown, slugify};
pub use resolver::{ContentResolver, MissingContent, ResolvedPage};
pub use source::{Content, ContentError, ContentSource, DEFAULT_EXTENSION, FsContentSource};
