//! Sidebar model for presentation layers.

use crate::index::NavIndex;
use crate::model::INDEX_SLUG;

/// Link to a single page in the sidebar.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SidebarLink {
    /// Page title.
    pub title: String,
    /// Canonical page path.
    pub path: String,
    /// Whether this link points at the current page.
    pub active: bool,
}

/// A collapsible sidebar group for one section.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SidebarSection {
    /// Section id.
    pub id: String,
    /// Section title.
    pub title: String,
    /// Section landing path.
    pub path: String,
    /// Whether the current page belongs to this section.
    pub active: bool,
    /// Whether the group starts expanded.
    pub expanded: bool,
    /// Page links in reading order.
    pub items: Vec<SidebarLink>,
}

/// Check whether `path` is `prefix` or lies below it, segment-wise.
fn is_within(path: &str, prefix: &str) -> bool {
    path.strip_prefix(prefix)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
}

impl NavIndex {
    /// Build the sidebar for the page at `current_path`.
    ///
    /// The section containing the current page is marked active and expanded;
    /// a link is active when its path equals the current path. Unknown paths
    /// yield a fully collapsed sidebar.
    #[must_use]
    pub fn sidebar(&self, current_path: &str) -> Vec<SidebarSection> {
        let current = match current_path.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        };

        self.sections
            .iter()
            .map(|section| {
                let path = self.canonical_path(&section.slug, INDEX_SLUG);
                let active = is_within(current, &path);
                let items = section
                    .items
                    .iter()
                    .map(|item| {
                        let item_path = self.canonical_path(&section.slug, &item.slug);
                        SidebarLink {
                            title: item.title.clone(),
                            active: item_path == current,
                            path: item_path,
                        }
                    })
                    .collect();

                SidebarSection {
                    id: section.id.clone(),
                    title: section.title.clone(),
                    path,
                    active,
                    expanded: active,
                    items,
                }
            })
            .collect()
    }
}
