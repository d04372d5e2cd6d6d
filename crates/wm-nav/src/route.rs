//! Route enumeration and URL resolution.

use crate::index::NavIndex;
use crate::model::INDEX_SLUG;

/// A servable URL in the documentation tree.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Route {
    /// Section slug.
    pub section: String,
    /// Page slug, `None` for the section landing page.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub page: Option<String>,
    /// Canonical URL path.
    pub path: String,
}

/// A (section, page) pair parsed from a URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Location {
    /// Section slug.
    pub section: String,
    /// Page slug (`"index"` for section landing URLs).
    pub page: String,
}

impl NavIndex {
    /// Every servable route: one per section, one per non-index page.
    ///
    /// Routes follow global reading order, each section's landing route first.
    #[must_use]
    pub fn routes(&self) -> Vec<Route> {
        let mut routes = Vec::with_capacity(self.page_count());
        for section in &self.sections {
            routes.push(Route {
                section: section.slug.clone(),
                page: None,
                path: self.canonical_path(&section.slug, INDEX_SLUG),
            });
            routes.extend(section.items.iter().filter(|item| !item.is_index()).map(
                |item| Route {
                    section: section.slug.clone(),
                    page: Some(item.slug.clone()),
                    path: self.canonical_path(&section.slug, &item.slug),
                },
            ));
        }
        routes
    }

    /// Parse a URL path below the base path into a [`Location`].
    ///
    /// `/docs/git` resolves to the landing page of `git` and `/docs/git/basics`
    /// to the `basics` page. The bare base path, deeper paths and paths outside
    /// the base path resolve to `None`, as does `/docs/git/index`: a landing
    /// page is only reachable through its section path. The catalog is not consulted, so the
    /// location may still be unknown to [`NavIndex::find_page`].
    #[must_use]
    pub fn resolve(&self, url_path: &str) -> Option<Location> {
        let rest = url_path.strip_prefix(self.base_path.as_str())?;
        if !self.base_path.is_empty() && !rest.is_empty() && !rest.starts_with('/') {
            return None;
        }

        let mut segments = rest.split('/').filter(|s| !s.is_empty());
        let section = segments.next()?;
        let page = match segments.next() {
            None => INDEX_SLUG,
            Some(INDEX_SLUG) => return None,
            Some(page) => page,
        };
        if segments.next().is_some() {
            return None;
        }

        Some(Location {
            section: section.to_owned(),
            page: page.to_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{DocItem, DocSection};

    fn index() -> NavIndex {
        NavIndex::new(vec![
            DocSection::new("beta", "Beta", "01-beta", 1)
                .with_item(DocItem::new("Overview", "index", "index"))
                .with_item(DocItem::new("Two", "two", "01-two")),
            DocSection::new("alpha", "Alpha", "00-alpha", 0)
                .with_item(DocItem::new("Overview", "index", "index"))
                .with_item(DocItem::new("One", "one", "01-one")),
        ])
    }

    fn location(section: &str, page: &str) -> Option<Location> {
        Some(Location {
            section: section.to_owned(),
            page: page.to_owned(),
        })
    }

    #[test]
    fn test_routes_visit_each_section_and_page_once() {
        let routes = index().routes();

        let paths: Vec<_> = routes.iter().map(|r| r.path.as_str()).collect();
        assert_eq!(
            paths,
            vec!["/docs/alpha", "/docs/alpha/one", "/docs/beta", "/docs/beta/two"]
        );
        let unique: HashSet<_> = paths.iter().collect();
        assert_eq!(unique.len(), paths.len());
    }

    #[test]
    fn test_routes_landing_has_no_page() {
        let routes = index().routes();

        assert_eq!(
            routes[0],
            Route {
                section: "alpha".to_owned(),
                page: None,
                path: "/docs/alpha".to_owned(),
            }
        );
        assert_eq!(routes[1].page.as_deref(), Some("one"));
    }

    #[test]
    fn test_routes_section_without_index_item_still_routed() {
        let index = NavIndex::new(vec![
            DocSection::new("odd", "Odd", "00-odd", 0).with_item(DocItem::new("Only", "only", "only")),
        ]);

        let paths: Vec<_> = index.routes().into_iter().map(|r| r.path).collect();

        assert_eq!(paths, vec!["/docs/odd", "/docs/odd/only"]);
    }

    #[test]
    fn test_resolve_section_landing() {
        assert_eq!(index().resolve("/docs/alpha"), location("alpha", "index"));
        assert_eq!(index().resolve("/docs/alpha/"), location("alpha", "index"));
    }

    #[test]
    fn test_resolve_page() {
        assert_eq!(index().resolve("/docs/alpha/one"), location("alpha", "one"));
    }

    #[test]
    fn test_resolve_is_inverse_of_canonical_path() {
        let index = index();

        for route in index.routes() {
            let resolved = index.resolve(&route.path).unwrap();
            assert_eq!(resolved.section, route.section);
            assert_eq!(resolved.page, route.page.unwrap_or_else(|| "index".to_owned()));
        }
    }

    #[test]
    fn test_resolve_rejects_other_paths() {
        let index = index();

        assert_eq!(index.resolve("/docs"), None);
        assert_eq!(index.resolve("/docs/"), None);
        assert_eq!(index.resolve("/docsalpha"), None);
        assert_eq!(index.resolve("/blog/alpha"), None);
        assert_eq!(index.resolve("/docs/alpha/one/extra"), None);
    }

    #[test]
    fn test_resolve_rejects_explicit_index_segment() {
        let index = index();

        assert_eq!(index.resolve("/docs/alpha/index"), None);
        assert_eq!(index.resolve("/docs/alpha/index/"), None);
        assert_eq!(index.with_base_path("/").resolve("/alpha/index"), None);
    }

    #[test]
    fn test_resolve_does_not_check_catalog() {
        assert_eq!(index().resolve("/docs/nope/never"), location("nope", "never"));
    }

    #[test]
    fn test_resolve_at_site_root() {
        let index = index().with_base_path("/");

        assert_eq!(index.resolve("/alpha/one"), location("alpha", "one"));
        assert_eq!(index.resolve("/"), None);
    }
}
