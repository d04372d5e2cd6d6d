//! Startup-time catalog validation.
//!
//! The index itself never rejects a catalog. [`validate`] reports authoring
//! mistakes so callers can refuse to start (see [`NavIndex::validated`]).
//!
//! [`NavIndex::validated`]: crate::NavIndex::validated

use std::collections::HashSet;
use std::fmt::Write;

use crate::model::{DocSection, INDEX_SLUG};

/// A single authoring problem found in a catalog.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CatalogIssue {
    /// Two sections share a slug.
    #[error("duplicate section slug `{0}`")]
    DuplicateSectionSlug(String),
    /// Two sections share an id.
    #[error("duplicate section id `{0}`")]
    DuplicateSectionId(String),
    /// A section has no pages.
    #[error("section `{0}` has no pages")]
    EmptySection(String),
    /// Two pages in one section share a slug.
    #[error("section `{section}` has duplicate page slug `{page}`")]
    DuplicatePageSlug {
        /// Owning section slug.
        section: String,
        /// Repeated page slug.
        page: String,
    },
    /// The first page of a section is not its landing page.
    #[error("section `{section}` starts with `{found}` instead of `index`")]
    MissingLandingPage {
        /// Section slug.
        section: String,
        /// Slug of the first page.
        found: String,
    },
    /// A slug is empty or contains a path separator.
    #[error("invalid slug `{slug}` in section `{section}`")]
    InvalidSlug {
        /// Section slug (or the offending slug itself for section slugs).
        section: String,
        /// The rejected slug.
        slug: String,
    },
}

/// Error returned by [`NavIndex::validated`](crate::NavIndex::validated).
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("invalid catalog ({}){}", issue_count(.issues.len()), issue_list(.issues))]
pub struct CatalogError {
    /// All issues found, in catalog order.
    pub issues: Vec<CatalogIssue>,
}

fn issue_count(count: usize) -> String {
    match count {
        1 => "1 issue".to_owned(),
        n => format!("{n} issues"),
    }
}

fn issue_list(issues: &[CatalogIssue]) -> String {
    issues.iter().fold(String::new(), |mut out, issue| {
        let _ = write!(out, "; {issue}");
        out
    })
}

fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty() && !slug.contains('/')
}

/// Check a catalog for duplicate slugs, empty sections and malformed slugs.
///
/// Returns every issue found; an empty vector means the catalog is valid.
#[must_use]
pub fn validate(sections: &[DocSection]) -> Vec<CatalogIssue> {
    let mut issues = Vec::new();
    let mut section_slugs = HashSet::new();
    let mut section_ids = HashSet::new();

    for section in sections {
        if !is_valid_slug(&section.slug) {
            issues.push(CatalogIssue::InvalidSlug {
                section: section.slug.clone(),
                slug: section.slug.clone(),
            });
        }
        if !section_slugs.insert(section.slug.as_str()) {
            issues.push(CatalogIssue::DuplicateSectionSlug(section.slug.clone()));
        }
        if !section_ids.insert(section.id.as_str()) {
            issues.push(CatalogIssue::DuplicateSectionId(section.id.clone()));
        }

        let Some(first) = section.items.first() else {
            issues.push(CatalogIssue::EmptySection(section.slug.clone()));
            continue;
        };
        if first.slug != INDEX_SLUG {
            issues.push(CatalogIssue::MissingLandingPage {
                section: section.slug.clone(),
                found: first.slug.clone(),
            });
        }

        let mut page_slugs = HashSet::new();
        for item in &section.items {
            if !is_valid_slug(&item.slug) {
                issues.push(CatalogIssue::InvalidSlug {
                    section: section.slug.clone(),
                    slug: item.slug.clone(),
                });
            }
            if !page_slugs.insert(item.slug.as_str()) {
                issues.push(CatalogIssue::DuplicatePageSlug {
                    section: section.slug.clone(),
                    page: item.slug.clone(),
                });
            }
        }
    }

    issues
}
