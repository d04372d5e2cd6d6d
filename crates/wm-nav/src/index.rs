//! Navigation index over an immutable catalog.
//!
//! # Architecture
//!
//! Sections are sorted once at construction (stable by `order`), and two
//! lookup structures are precomputed:
//! - a slug → section map for O(1) section lookups
//! - the flattened global reading order, with per-section offsets so a page's
//!   global position is `offsets[section] + position`
//!
//! The index is never mutated after construction, so it can be shared across
//! request handlers behind an `Arc` without locking.

use std::collections::HashMap;

use crate::model::{DocItem, DocSection, INDEX_SLUG};
use crate::validate::{CatalogError, validate};

/// Default URL prefix of the documentation tree.
pub const DEFAULT_BASE_PATH: &str = "/docs";

/// Default title of the root breadcrumb.
pub const DEFAULT_ROOT_TITLE: &str = "Docs";

/// A page together with its owning section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageRef<'a> {
    /// Owning section.
    pub section: &'a DocSection,
    /// The page.
    pub page: &'a DocItem,
}

/// Result of [`NavIndex::find_page`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageMatch<'a> {
    /// Owning section.
    pub section: &'a DocSection,
    /// The page.
    pub page: &'a DocItem,
    /// Zero-based position of the page within `section.items`.
    pub position: usize,
}

/// Pages immediately before and after a page in global reading order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Adjacent<'a> {
    /// Previous page, `None` at the start of the guide.
    pub prev: Option<PageRef<'a>>,
    /// Next page, `None` at the end of the guide.
    pub next: Option<PageRef<'a>>,
}

/// Breadcrumb navigation item.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BreadcrumbItem {
    /// Display title.
    pub title: String,
    /// Link target path.
    pub path: String,
}

/// Read-only navigation queries over a catalog.
///
/// Every query is total: unknown slugs produce `None` (or a shorter result),
/// never an error.
#[derive(Debug)]
pub struct NavIndex {
    pub(crate) sections: Vec<DocSection>,
    by_slug: HashMap<String, usize>,
    offsets: Vec<usize>,
    flat: Vec<(usize, usize)>,
    pub(crate) base_path: String,
    root_title: String,
}

impl NavIndex {
    /// Build an index without validating the catalog.
    ///
    /// Sections are sorted by `order`; equal ranks keep their declaration
    /// order. If two sections share a slug, lookups resolve to the first one.
    #[must_use]
    pub fn new(mut sections: Vec<DocSection>) -> Self {
        sections.sort_by_key(|section| section.order);

        let mut by_slug = HashMap::with_capacity(sections.len());
        let mut offsets = Vec::with_capacity(sections.len());
        let mut flat = Vec::new();
        for (i, section) in sections.iter().enumerate() {
            by_slug.entry(section.slug.clone()).or_insert(i);
            offsets.push(flat.len());
            flat.extend((0..section.items.len()).map(|j| (i, j)));
        }

        tracing::debug!(
            sections = sections.len(),
            pages = flat.len(),
            "Built navigation index"
        );

        Self {
            sections,
            by_slug,
            offsets,
            flat,
            base_path: DEFAULT_BASE_PATH.to_owned(),
            root_title: DEFAULT_ROOT_TITLE.to_owned(),
        }
    }

    /// Build an index, rejecting catalogs with authoring issues.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] listing every issue reported by [`validate`].
    pub fn validated(sections: Vec<DocSection>) -> Result<Self, CatalogError> {
        let issues = validate(&sections);
        if issues.is_empty() {
            Ok(Self::new(sections))
        } else {
            Err(CatalogError { issues })
        }
    }

    /// Serve the documentation tree under a different URL prefix.
    ///
    /// A trailing slash is ignored; `"/"` mounts the tree at the site root.
    #[must_use]
    pub fn with_base_path(mut self, base_path: &str) -> Self {
        base_path.trim_end_matches('/').clone_into(&mut self.base_path);
        self
    }

    /// Override the title of the root breadcrumb.
    #[must_use]
    pub fn with_root_title(mut self, root_title: impl Into<String>) -> Self {
        self.root_title = root_title.into();
        self
    }

    /// URL prefix of the documentation tree (no trailing slash).
    #[must_use]
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Title of the root breadcrumb.
    #[must_use]
    pub fn root_title(&self) -> &str {
        &self.root_title
    }

    /// Path of the documentation landing page.
    #[must_use]
    pub fn landing_path(&self) -> &str {
        if self.base_path.is_empty() {
            "/"
        } else {
            &self.base_path
        }
    }

    /// All sections, sorted ascending by `order`.
    #[must_use]
    pub fn sections(&self) -> &[DocSection] {
        &self.sections
    }

    /// Look up a section by slug.
    #[must_use]
    pub fn find_section(&self, slug: &str) -> Option<&DocSection> {
        self.by_slug.get(slug).map(|&i| &self.sections[i])
    }

    /// Look up a page by section and page slug.
    #[must_use]
    pub fn find_page(&self, section: &str, page: &str) -> Option<PageMatch<'_>> {
        let (i, position) = self.locate(section, page)?;
        let section = &self.sections[i];
        Some(PageMatch {
            section,
            page: &section.items[position],
            position,
        })
    }

    /// Pages before and after the given page in global reading order.
    ///
    /// Unknown pages have neither neighbour.
    #[must_use]
    pub fn adjacent(&self, section: &str, page: &str) -> Adjacent<'_> {
        let Some((i, position)) = self.locate(section, page) else {
            return Adjacent::default();
        };
        let global = self.offsets[i] + position;

        Adjacent {
            prev: global
                .checked_sub(1)
                .map(|prev| self.page_at(self.flat[prev])),
            next: self.flat.get(global + 1).map(|&next| self.page_at(next)),
        }
    }

    /// Breadcrumb trail for a section and optional page.
    ///
    /// Always starts with the root entry. The section entry follows when the
    /// section exists, and the page entry when the page exists and is not the
    /// section's landing page. The trail never exceeds three items.
    #[must_use]
    pub fn breadcrumbs(&self, section: &str, page: Option<&str>) -> Vec<BreadcrumbItem> {
        let mut breadcrumbs = vec![BreadcrumbItem {
            title: self.root_title.clone(),
            path: self.landing_path().to_owned(),
        }];

        let Some(section) = self.find_section(section) else {
            return breadcrumbs;
        };
        breadcrumbs.push(BreadcrumbItem {
            title: section.title.clone(),
            path: self.canonical_path(&section.slug, INDEX_SLUG),
        });

        if let Some(page) = page.filter(|&page| page != INDEX_SLUG)
            && let Some((_, item)) = section.item(page)
        {
            breadcrumbs.push(BreadcrumbItem {
                title: item.title.clone(),
                path: self.canonical_path(&section.slug, &item.slug),
            });
        }

        breadcrumbs
    }

    /// URL path of a page.
    ///
    /// The `index` page maps to the section path so that each page has exactly
    /// one URL.
    #[must_use]
    pub fn canonical_path(&self, section: &str, page: &str) -> String {
        if page == INDEX_SLUG {
            format!("{}/{section}", self.base_path)
        } else {
            format!("{}/{section}/{page}", self.base_path)
        }
    }

    /// Total number of pages across all sections.
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.flat.len()
    }

    /// All pages in global reading order.
    pub fn iter_pages(&self) -> impl Iterator<Item = PageRef<'_>> {
        self.flat.iter().map(|&slot| self.page_at(slot))
    }

    fn locate(&self, section: &str, page: &str) -> Option<(usize, usize)> {
        let &i = self.by_slug.get(section)?;
        let (position, _) = self.sections[i].item(page)?;
        Some((i, position))
    }

    fn page_at(&self, (i, j): (usize, usize)) -> PageRef<'_> {
        let section = &self.sections[i];
        PageRef {
            section,
            page: &section.items[j],
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::validate::CatalogIssue;

    static_assertions::assert_impl_all!(NavIndex: Send, Sync);

    fn section(slug: &str, order: i32, pages: &[&str]) -> DocSection {
        pages.iter().fold(
            DocSection::new(slug, format!("{slug} title"), format!("{order:02}-{slug}"), order),
            |section, page| section.with_item(DocItem::new(format!("{page} title"), *page, *page)),
        )
    }

    fn alpha_beta() -> NavIndex {
        NavIndex::new(vec![
            section("alpha", 0, &["index", "one"]),
            section("beta", 1, &["index", "two"]),
        ])
    }

    /// Sections declared out of order, with a tie and a gap in ranks.
    fn shuffled() -> NavIndex {
        NavIndex::new(vec![
            section("gamma", 7, &["index", "g1", "g2"]),
            section("alpha", 0, &["index"]),
            section("beta", 3, &["index", "b1"]),
            section("delta", 3, &["index", "d1", "d2", "d3"]),
        ])
    }

    fn slugs(pair: Option<PageRef<'_>>) -> Option<(&str, &str)> {
        pair.map(|p| (p.section.slug.as_str(), p.page.slug.as_str()))
    }

    // sections

    #[test]
    fn test_sections_sorted_by_order() {
        let index = shuffled();

        let order: Vec<_> = index.sections().iter().map(|s| s.slug.as_str()).collect();

        assert_eq!(order, vec!["alpha", "beta", "delta", "gamma"]);
    }

    #[test]
    fn test_sections_ties_keep_declaration_order() {
        let index = NavIndex::new(vec![
            section("second", 1, &["index"]),
            section("first", 1, &["index"]),
            section("zero", 0, &["index"]),
        ]);

        let order: Vec<_> = index.sections().iter().map(|s| s.slug.as_str()).collect();

        assert_eq!(order, vec!["zero", "second", "first"]);
    }

    #[test]
    fn test_sections_empty_catalog() {
        let index = NavIndex::new(Vec::new());

        assert!(index.sections().is_empty());
        assert_eq!(index.page_count(), 0);
        assert_eq!(index.iter_pages().count(), 0);
    }

    // find_section

    #[test]
    fn test_find_section_returns_every_section() {
        let index = shuffled();

        for section in index.sections() {
            assert_eq!(index.find_section(&section.slug), Some(section));
        }
    }

    #[test]
    fn test_find_section_unknown_returns_none() {
        assert!(alpha_beta().find_section("gamma").is_none());
        assert!(alpha_beta().find_section("").is_none());
    }

    #[test]
    fn test_find_section_duplicate_slug_returns_first_declared() {
        let mut later = section("alpha", 0, &["index", "late"]);
        later.title = "Later".to_owned();
        let index = NavIndex::new(vec![section("alpha", 0, &["index"]), later]);

        assert_eq!(index.find_section("alpha").unwrap().title, "alpha title");
    }

    // find_page

    #[test]
    fn test_find_page_returns_pair_and_position() {
        let index = shuffled();

        for section in index.sections() {
            for (position, page) in section.items.iter().enumerate() {
                let found = index.find_page(&section.slug, &page.slug).unwrap();
                assert_eq!(found.section, section);
                assert_eq!(found.page, page);
                assert_eq!(found.position, position);
            }
        }
    }

    #[test]
    fn test_find_page_unknown_section_returns_none() {
        assert!(alpha_beta().find_page("gamma", "index").is_none());
    }

    #[test]
    fn test_find_page_unknown_page_returns_none() {
        assert!(alpha_beta().find_page("alpha", "two").is_none());
    }

    #[test]
    fn test_find_page_same_slug_in_two_sections() {
        let index = NavIndex::new(vec![
            section("alpha", 0, &["index", "setup"]),
            section("beta", 1, &["index", "extra", "setup"]),
        ]);

        assert_eq!(index.find_page("alpha", "setup").unwrap().position, 1);
        assert_eq!(index.find_page("beta", "setup").unwrap().position, 2);
    }

    // adjacent

    #[test]
    fn test_adjacent_crosses_section_boundary() {
        let index = alpha_beta();

        let adjacent = index.adjacent("alpha", "one");

        assert_eq!(slugs(adjacent.prev), Some(("alpha", "index")));
        assert_eq!(slugs(adjacent.next), Some(("beta", "index")));
    }

    #[test]
    fn test_adjacent_from_section_landing() {
        let index = alpha_beta();

        let adjacent = index.adjacent("beta", "index");

        assert_eq!(slugs(adjacent.prev), Some(("alpha", "one")));
        assert_eq!(slugs(adjacent.next), Some(("beta", "two")));
    }

    #[test]
    fn test_adjacent_boundaries() {
        let index = shuffled();

        assert!(index.adjacent("alpha", "index").prev.is_none());
        assert!(index.adjacent("gamma", "g2").next.is_none());
    }

    #[test]
    fn test_adjacent_unknown_returns_neither() {
        let index = alpha_beta();

        assert_eq!(index.adjacent("alpha", "missing"), Adjacent::default());
        assert_eq!(index.adjacent("missing", "index"), Adjacent::default());
    }

    #[test]
    fn test_adjacent_round_trips_through_reading_order() {
        let index = shuffled();
        let pages: Vec<_> = index.iter_pages().collect();

        for pair in pages.windows(2) {
            let (current, following) = (pair[0], pair[1]);
            let forward = index.adjacent(&current.section.slug, &current.page.slug);
            let backward = index.adjacent(&following.section.slug, &following.page.slug);
            assert_eq!(forward.next, Some(following));
            assert_eq!(backward.prev, Some(current));
        }
    }

    #[test]
    fn test_iter_pages_follows_section_order_then_item_order() {
        let index = shuffled();

        let order: Vec<_> = index
            .iter_pages()
            .map(|p| format!("{}/{}", p.section.slug, p.page.slug))
            .collect();

        assert_eq!(
            order,
            vec![
                "alpha/index",
                "beta/index",
                "beta/b1",
                "delta/index",
                "delta/d1",
                "delta/d2",
                "delta/d3",
                "gamma/index",
                "gamma/g1",
                "gamma/g2",
            ]
        );
    }

    // breadcrumbs

    #[test]
    fn test_breadcrumbs_unknown_section_returns_root_only() {
        let breadcrumbs = alpha_beta().breadcrumbs("missing", Some("one"));

        assert_eq!(
            breadcrumbs,
            vec![BreadcrumbItem {
                title: "Docs".to_owned(),
                path: "/docs".to_owned(),
            }]
        );
    }

    #[test]
    fn test_breadcrumbs_section_only() {
        let breadcrumbs = alpha_beta().breadcrumbs("alpha", None);

        assert_eq!(breadcrumbs.len(), 2);
        assert_eq!(breadcrumbs[1].title, "alpha title");
        assert_eq!(breadcrumbs[1].path, "/docs/alpha");
    }

    #[test]
    fn test_breadcrumbs_index_page_adds_nothing() {
        let breadcrumbs = alpha_beta().breadcrumbs("alpha", Some("index"));

        assert_eq!(breadcrumbs.len(), 2);
    }

    #[test]
    fn test_breadcrumbs_page() {
        let breadcrumbs = alpha_beta().breadcrumbs("alpha", Some("one"));

        assert_eq!(
            breadcrumbs,
            vec![
                BreadcrumbItem {
                    title: "Docs".to_owned(),
                    path: "/docs".to_owned(),
                },
                BreadcrumbItem {
                    title: "alpha title".to_owned(),
                    path: "/docs/alpha".to_owned(),
                },
                BreadcrumbItem {
                    title: "one title".to_owned(),
                    path: "/docs/alpha/one".to_owned(),
                },
            ]
        );
    }

    #[test]
    fn test_breadcrumbs_unknown_page_stops_at_section() {
        let breadcrumbs = alpha_beta().breadcrumbs("alpha", Some("two"));

        assert_eq!(breadcrumbs.len(), 2);
    }

    #[test]
    fn test_breadcrumbs_custom_root() {
        let index = alpha_beta()
            .with_base_path("/guide/")
            .with_root_title("Guide");

        let breadcrumbs = index.breadcrumbs("beta", Some("two"));

        assert_eq!(breadcrumbs[0].title, "Guide");
        assert_eq!(breadcrumbs[0].path, "/guide");
        assert_eq!(breadcrumbs[2].path, "/guide/beta/two");
    }

    // canonical_path

    #[test]
    fn test_canonical_path_index_is_section_path() {
        let index = alpha_beta();

        assert_eq!(index.canonical_path("alpha", "index"), "/docs/alpha");
        assert_eq!(index.canonical_path("beta", "two"), "/docs/beta/two");
        assert_ne!(
            index.canonical_path("alpha", "intro"),
            index.canonical_path("alpha", "index")
        );
    }

    #[test]
    fn test_canonical_path_at_site_root() {
        let index = alpha_beta().with_base_path("/");

        assert_eq!(index.landing_path(), "/");
        assert_eq!(index.canonical_path("alpha", "index"), "/alpha");
        assert_eq!(index.canonical_path("alpha", "one"), "/alpha/one");
    }

    // page_count

    #[test]
    fn test_page_count_sums_items() {
        let index = shuffled();

        let expected: usize = index.sections().iter().map(|s| s.items.len()).sum();

        assert_eq!(index.page_count(), expected);
        assert_eq!(index.page_count(), 10);
    }

    // validated

    #[test]
    fn test_validated_rejects_bad_catalog() {
        let result = NavIndex::validated(vec![
            section("alpha", 0, &["index"]),
            section("alpha", 1, &["index"]),
        ]);

        let err = result.unwrap_err();
        assert!(err.issues.contains(&CatalogIssue::DuplicateSectionSlug("alpha".to_owned())));
    }

    #[test]
    fn test_validated_accepts_good_catalog() {
        let index = NavIndex::validated(vec![section("alpha", 0, &["index", "one"])]).unwrap();

        assert_eq!(index.page_count(), 2);
    }
}
