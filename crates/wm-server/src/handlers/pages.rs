//! Pages API endpoint.
//!
//! Resolves a documentation URL to its catalog entry and returns metadata,
//! breadcrumbs, prev/next links, table of contents and rendered HTML.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use chrono::{DateTime, Utc};
use md5::{Digest, Md5};
use serde::Serialize;
use wm_content::TocEntry;
use wm_nav::{BreadcrumbItem, NavIndex, PageRef};

use crate::error::ServerError;
use crate::handlers::to_url_path;
use crate::state::AppState;

/// Response for GET /api/pages/{path}.
#[derive(Serialize)]
struct PageResponse {
    meta: PageMeta,
    breadcrumbs: Vec<BreadcrumbItem>,
    navigation: PageNavigation,
    toc: Vec<TocResponse>,
    content: String,
}

/// Page metadata.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PageMeta {
    title: String,
    /// Browser title, `"<page> | <site> Docs"`.
    head_title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    /// Canonical URL path.
    path: String,
    section: String,
    section_title: String,
    /// Content file path relative to the content directory.
    source_file: String,
    /// Last modification time (RFC 3339).
    #[serde(skip_serializing_if = "Option::is_none")]
    last_modified: Option<String>,
    /// Content file is missing and `content` is a stand-in.
    placeholder: bool,
}

/// Previous and next pages in reading order.
#[derive(Serialize)]
struct PageNavigation {
    prev: Option<AdjacentLink>,
    next: Option<AdjacentLink>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AdjacentLink {
    title: String,
    section_title: String,
    path: String,
}

impl AdjacentLink {
    fn new(index: &NavIndex, page: PageRef<'_>) -> Self {
        Self {
            title: page.page.title.clone(),
            section_title: page.section.title.clone(),
            path: index.canonical_path(&page.section.slug, &page.page.slug),
        }
    }
}

#[derive(Serialize)]
struct TocResponse {
    level: u8,
    title: String,
    id: String,
}

impl From<TocEntry> for TocResponse {
    fn from(entry: TocEntry) -> Self {
        Self {
            level: entry.level,
            title: entry.title,
            id: entry.id,
        }
    }
}

/// Handle GET /api/pages/{path}.
pub(crate) async fn get_page(
    Path(path): Path<String>,
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Response, ServerError> {
    let url_path = to_url_path(&path);
    let index = &state.index;

    let found = index
        .resolve(&url_path)
        .and_then(|location| index.find_page(&location.section, &location.page))
        .ok_or_else(|| ServerError::PageNotFound(url_path.clone()))?;
    let (section, page) = (found.section, found.page);

    let resolved = state.content.resolve(section, page)?;

    let etag = compute_etag(&state.version, &resolved.html);
    if let Some(if_none_match) = headers.get(header::IF_NONE_MATCH)
        && if_none_match.as_bytes() == etag.as_bytes()
    {
        return Ok(StatusCode::NOT_MODIFIED.into_response());
    }

    let last_modified: Option<DateTime<Utc>> = resolved.modified.map(DateTime::from);
    let adjacent = index.adjacent(&section.slug, &page.slug);

    let response = PageResponse {
        meta: PageMeta {
            title: page.title.clone(),
            head_title: state.head_title(&page.title),
            description: page.description.clone(),
            path: index.canonical_path(&section.slug, &page.slug),
            section: section.slug.clone(),
            section_title: section.title.clone(),
            source_file: resolved.source_path.display().to_string(),
            last_modified: last_modified.map(|t| t.to_rfc3339()),
            placeholder: resolved.placeholder,
        },
        breadcrumbs: index.breadcrumbs(&section.slug, Some(&page.slug)),
        navigation: PageNavigation {
            prev: adjacent.prev.map(|p| AdjacentLink::new(index, p)),
            next: adjacent.next.map(|p| AdjacentLink::new(index, p)),
        },
        toc: resolved.toc.into_iter().map(TocResponse::from).collect(),
        content: resolved.html,
    };

    let mut headers = vec![
        (header::ETAG, etag),
        (header::CACHE_CONTROL, "private, max-age=60".to_owned()),
    ];
    if let Some(modified) = last_modified {
        headers.push((
            header::LAST_MODIFIED,
            modified.format("%a, %d %b %Y %H:%M:%S GMT").to_string(),
        ));
    }

    let mut response = Json(response).into_response();
    for (name, value) in headers {
        if let Ok(value) = value.parse() {
            response.headers_mut().insert(name, value);
        }
    }
    Ok(response)
}

/// Compute `ETag` from version and content.
///
/// MD5 truncated to 64 bits (16 hex chars).
fn compute_etag(version: &str, content: &str) -> String {
    let hash = Md5::digest(format!("{version}:{content}").as_bytes());
    format!("\"{}\"", &hex::encode(hash)[..16])
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::Request;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use tower::ServiceExt;

    use super::*;
    use crate::app::tests::{get, get_json, test_router};

    #[test]
    fn test_compute_etag_includes_version_and_content() {
        assert_ne!(compute_etag("1.0.0", "a"), compute_etag("1.0.1", "a"));
        assert_ne!(compute_etag("1.0.0", "a"), compute_etag("1.0.0", "b"));
    }

    #[test]
    fn test_compute_etag_format() {
        let etag = compute_etag("1.0.0", "content");

        assert!(etag.starts_with('"'));
        assert!(etag.ends_with('"'));
        assert_eq!(etag.len(), 18);
    }

    #[tokio::test]
    async fn test_get_page_with_content() {
        let (status, json) = get_json("/api/pages/docs/getting-started/finding-projects").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            json["meta"],
            json!({
                "title": "Finding Projects",
                "headTitle": "Finding Projects | AlgoSource Docs",
                "description": "Where to look",
                "path": "/docs/getting-started/finding-projects",
                "section": "getting-started",
                "sectionTitle": "Getting Started",
                "sourceFile": "01-getting-started/01-finding-projects.md",
                "lastModified": "2023-11-14T22:13:20+00:00",
                "placeholder": false,
            })
        );
        assert_eq!(
            json["breadcrumbs"],
            json!([
                {"title": "Docs", "path": "/docs"},
                {"title": "Getting Started", "path": "/docs/getting-started"},
                {"title": "Finding Projects", "path": "/docs/getting-started/finding-projects"},
            ])
        );
        assert_eq!(
            json["navigation"],
            json!({
                "prev": {
                    "title": "Overview",
                    "sectionTitle": "Getting Started",
                    "path": "/docs/getting-started",
                },
                "next": null,
            })
        );
        assert_eq!(
            json["toc"],
            json!([{"level": 2, "title": "Good First Issues", "id": "good-first-issues"}])
        );
        assert!(
            json["content"]
                .as_str()
                .unwrap()
                .contains(r#"<h2 id="good-first-issues">"#)
        );
    }

    #[tokio::test]
    async fn test_get_section_landing_page_is_placeholder() {
        let (status, json) = get_json("/api/pages/docs/getting-started").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["meta"]["title"], "Overview");
        assert_eq!(json["meta"]["path"], "/docs/getting-started");
        assert_eq!(json["meta"]["placeholder"], true);
        assert!(json["meta"].get("lastModified").is_none());
        assert_eq!(json["breadcrumbs"].as_array().unwrap().len(), 2);
        assert_eq!(json["navigation"]["prev"]["path"], "/docs/before-you-start");
        assert_eq!(
            json["navigation"]["next"]["path"],
            "/docs/getting-started/finding-projects"
        );
        assert!(json["content"].as_str().unwrap().contains("coming soon"));
    }

    #[tokio::test]
    async fn test_get_first_page_has_no_prev() {
        let (_, json) = get_json("/api/pages/docs/before-you-start").await;

        assert_eq!(json["navigation"]["prev"], serde_json::Value::Null);
        assert_eq!(json["navigation"]["next"]["path"], "/docs/getting-started");
    }

    #[tokio::test]
    async fn test_get_explicit_index_slug_is_not_found() {
        let (status, json) = get_json("/api/pages/docs/getting-started/index").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(
            json,
            json!({"error": "Page not found", "path": "/docs/getting-started/index"})
        );
        let (status, json) = get_json("/api/pages/docs/getting-started").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["meta"]["path"], "/docs/getting-started");
    }

    #[tokio::test]
    async fn test_get_unknown_page() {
        let (status, json) = get_json("/api/pages/docs/getting-started/nope").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(
            json,
            json!({"error": "Page not found", "path": "/docs/getting-started/nope"})
        );
    }

    #[tokio::test]
    async fn test_get_unknown_section_and_outside_base() {
        for uri in [
            "/api/pages/docs/nope",
            "/api/pages/docs",
            "/api/pages/blog/getting-started",
            "/api/pages/docs/getting-started/finding-projects/extra",
        ] {
            let response = get(uri).await;
            assert_eq!(response.status(), StatusCode::NOT_FOUND, "{uri}");
        }
    }

    #[tokio::test]
    async fn test_page_cache_headers() {
        let response = get("/api/pages/docs/getting-started/finding-projects").await;

        let headers = response.headers();
        assert!(headers.contains_key(header::ETAG));
        assert_eq!(
            headers[header::LAST_MODIFIED],
            "Tue, 14 Nov 2023 22:13:20 GMT"
        );
        assert_eq!(headers[header::CACHE_CONTROL], "private, max-age=60");
    }

    #[tokio::test]
    async fn test_if_none_match_returns_304() {
        let uri = "/api/pages/docs/getting-started/finding-projects";
        let etag = get(uri).await.headers()[header::ETAG].clone();

        let response = test_router()
            .oneshot(
                Request::builder()
                    .uri(uri)
                    .header(header::IF_NONE_MATCH, etag)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_MODIFIED);
    }
}
