//! Catalog data model.
//!
//! A catalog is an ordered list of [`DocSection`]s, each holding its pages as
//! [`DocItem`]s. The model is plain data: ordering and lookups live in
//! [`NavIndex`](crate::NavIndex).

/// Slug of the page that acts as a section's landing page.
pub const INDEX_SLUG: &str = "index";

/// A single page within a section.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DocItem {
    /// Display title.
    pub title: String,
    /// URL segment, unique within the owning section.
    pub slug: String,
    /// Content body identifier inside the section folder (e.g. "03-fork").
    pub file: String,
    /// Optional subtitle.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub description: Option<String>,
}

impl DocItem {
    /// Create a page without a description.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        slug: impl Into<String>,
        file: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            slug: slug.into(),
            file: file.into(),
            description: None,
        }
    }

    /// Attach a description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Whether this page is its section's landing page.
    #[must_use]
    pub fn is_index(&self) -> bool {
        self.slug == INDEX_SLUG
    }
}

/// A top-level, ordered group of pages.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DocSection {
    /// Stable internal identifier.
    pub id: String,
    /// Display title.
    pub title: String,
    /// URL segment, unique across all sections.
    pub slug: String,
    /// Content group identifier (e.g. "02-git-github").
    pub folder: String,
    /// Sort rank. Need not be contiguous; ties keep declaration order.
    pub order: i32,
    /// Optional subtitle.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub description: Option<String>,
    /// Pages in reading order. The first one is the landing page by convention.
    #[cfg_attr(feature = "serde", serde(default))]
    pub items: Vec<DocItem>,
}

impl DocSection {
    /// Create an empty section whose id and slug are both `slug`.
    #[must_use]
    pub fn new(
        slug: impl Into<String>,
        title: impl Into<String>,
        folder: impl Into<String>,
        order: i32,
    ) -> Self {
        let slug = slug.into();
        Self {
            id: slug.clone(),
            title: title.into(),
            slug,
            folder: folder.into(),
            order,
            description: None,
            items: Vec::new(),
        }
    }

    /// Attach a description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Append a page.
    #[must_use]
    pub fn with_item(mut self, item: DocItem) -> Self {
        self.items.push(item);
        self
    }

    /// Look up a page by slug together with its position in `items`.
    #[must_use]
    pub fn item(&self, slug: &str) -> Option<(usize, &DocItem)> {
        self.items.iter().enumerate().find(|(_, item)| item.slug == slug)
    }
}
