//! Application state shared by all handlers.

use wm_content::ContentResolver;
use wm_nav::NavIndex;

pub(crate) struct AppState {
    /// Navigation index with the configured base path.
    pub(crate) index: NavIndex,
    /// Page content loader.
    pub(crate) content: ContentResolver,
    /// Site name for head titles.
    pub(crate) site_title: String,
    /// Application version for `ETag`s.
    pub(crate) version: String,
}

impl AppState {
    /// Browser title of a page: `"<page> | <site> Docs"`.
    pub(crate) fn head_title(&self, page_title: &str) -> String {
        format!("{page_title} | {} Docs", self.site_title)
    }
}
