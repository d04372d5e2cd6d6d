//! Configuration API endpoint.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use serde::Serialize;

use crate::state::AppState;

/// Response for GET /api/config.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ConfigResponse {
    site_title: String,
    root_title: String,
    /// Landing page path.
    base_path: String,
    page_count: usize,
    version: String,
}

/// Handle GET /api/config.
pub(crate) async fn get_config(State(state): State<Arc<AppState>>) -> Json<ConfigResponse> {
    Json(ConfigResponse {
        site_title: state.site_title.clone(),
        root_title: state.index.root_title().to_owned(),
        base_path: state.index.landing_path().to_owned(),
        page_count: state.index.page_count(),
        version: state.version.clone(),
    })
}
