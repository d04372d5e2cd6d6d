//! Documentation navigation index for Waymark.
//!
//! This crate provides:
//! - [`DocSection`] and [`DocItem`]: the catalog data model
//! - [`NavIndex`]: section/page lookups, prev/next in global reading order,
//!   breadcrumbs, canonical paths, route enumeration and the sidebar model
//! - [`validate`]: startup-time catalog checks
//!
//! # Quick Start
//!
//! ```
//! use wm_nav::{DocItem, DocSection, NavIndex};
//!
//! let index = NavIndex::new(vec![
//!     DocSection::new("alpha", "Alpha", "00-alpha", 0)
//!         .with_item(DocItem::new("Overview", "index", "index"))
//!         .with_item(DocItem::new("One", "one", "01-one")),
//!     DocSection::new("beta", "Beta", "01-beta", 1)
//!         .with_item(DocItem::new("Overview", "index", "index")),
//! ]);
//!
//! let next = index.adjacent("alpha", "one").next.unwrap();
//! assert_eq!(next.section.slug, "beta");
//! assert_eq!(index.canonical_path("alpha", "index"), "/docs/alpha");
//! assert_eq!(index.breadcrumbs("alpha", Some("one")).len(), 3);
//! ```

mod index;
mod model;
mod route;
mod sidebar;
mod validate;

pub use index::{
    Adjacent, BreadcrumbItem, DEFAULT_BASE_PATH, DEFAULT_ROOT_TITLE, NavIndex, PageMatch, PageRef,
};
pub use model::{DocItem, DocSection, INDEX_SLUG};
pub use route::{Location, Route};
pub use sidebar::{SidebarLink, SidebarSection};
pub use validate::{CatalogError, CatalogIssue, validate};
