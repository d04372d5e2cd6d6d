//! Error types for the HTTP server.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use wm_content::ContentError;

/// Server error type.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// No page at the given URL path.
    #[error("Page not found: {0}")]
    PageNotFound(String),

    /// No section with the given slug.
    #[error("Section not found: {0}")]
    SectionNotFound(String),

    /// Content file exists but could not be loaded.
    #[error("Content error: {0}")]
    Content(#[from] ContentError),

    /// Listener could not be bound, including host resolution failures.
    #[error("Failed to bind {address}: {source}")]
    Bind {
        /// Requested `host:port`.
        address: String,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::PageNotFound(path) => (
                StatusCode::NOT_FOUND,
                json!({"error": "Page not found", "path": path}),
            ),
            Self::SectionNotFound(slug) => (
                StatusCode::NOT_FOUND,
                json!({"error": "Section not found", "slug": slug}),
            ),
            Self::Content(e) => {
                tracing::error!(error = %e, "Failed to load page content");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({"error": e.to_string()}),
                )
            }
            Self::Bind { .. } | Self::Io(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({"error": self.to_string()}),
            ),
        };

        (status, axum::Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_not_found_status() {
        let response = ServerError::PageNotFound("/docs/missing".to_owned()).into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_bind_error_status() {
        let error = ServerError::Bind {
            address: "docs.internal:7979".to_owned(),
            source: std::io::Error::other("no such host"),
        };

        assert_eq!(
            error.to_string(),
            "Failed to bind docs.internal:7979: no such host"
        );
        assert_eq!(error.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_content_error_status() {
        let error = ContentError::Io {
            path: "00-git/index.md".into(),
            source: std::io::Error::other("boom"),
        };

        let response = ServerError::from(error).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
