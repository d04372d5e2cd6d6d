//! Navigation API endpoint.
//!
//! Returns the sidebar model, with the section and link of the current page
//! marked active.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};
use serde::{Deserialize, Serialize};
use wm_nav::SidebarSection;

use crate::state::AppState;

/// Query parameters for GET /api/navigation.
#[derive(Deserialize)]
pub(crate) struct NavigationQuery {
    /// Current page URL path.
    path: Option<String>,
}

/// Response for GET /api/navigation.
#[derive(Serialize)]
pub(crate) struct NavigationResponse {
    sections: Vec<SidebarSection>,
}

/// Handle GET /api/navigation.
pub(crate) async fn get_navigation(
    State(state): State<Arc<AppState>>,
    Query(query): Query<NavigationQuery>,
) -> Json<NavigationResponse> {
    let current = query.path.as_deref().unwrap_or_default();
    Json(NavigationResponse {
        sections: state.index.sidebar(current),
    })
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use pretty_assertions::assert_eq;

    use crate::app::tests::get_json;

    #[tokio::test]
    async fn test_navigation_marks_current_page() {
        let (status, json) =
            get_json("/api/navigation?path=/docs/getting-started/finding-projects").await;

        assert_eq!(status, StatusCode::OK);
        let sections = json["sections"].as_array().unwrap();
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0]["active"], false);
        assert_eq!(sections[1]["id"], "getting-started");
        assert_eq!(sections[1]["active"], true);
        assert_eq!(sections[1]["expanded"], true);
        assert_eq!(sections[1]["items"][0]["active"], false);
        assert_eq!(sections[1]["items"][1]["active"], true);
        assert_eq!(
            sections[1]["items"][1]["path"],
            "/docs/getting-started/finding-projects"
        );
    }

    #[tokio::test]
    async fn test_navigation_without_path_is_collapsed() {
        let (_, json) = get_json("/api/navigation").await;

        let sections = json["sections"].as_array().unwrap();
        assert!(sections.iter().all(|s| s["expanded"] == false));
    }
}
