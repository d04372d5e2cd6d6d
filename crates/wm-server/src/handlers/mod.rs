//! HTTP request handlers.

pub(crate) mod config;
pub(crate) mod navigation;
pub(crate) mod pages;
pub(crate) mod routes;
pub(crate) mod sections;

/// Convert a wildcard capture (no leading slash) to a URL path.
pub(crate) fn to_url_path(path: &str) -> String {
    format!("/{}", path.trim_start_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_url_path() {
        assert_eq!(to_url_path(""), "/");
        assert_eq!(to_url_path("docs/git"), "/docs/git");
        assert_eq!(to_url_path("/docs"), "/docs");
    }
}
