//! Routes API endpoint.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use serde::Serialize;
use wm_nav::Route;

use crate::state::AppState;

/// Response for GET /api/routes.
#[derive(Serialize)]
pub(crate) struct RoutesResponse {
    routes: Vec<Route>,
}

/// Handle GET /api/routes.
pub(crate) async fn list_routes(State(state): State<Arc<AppState>>) -> Json<RoutesResponse> {
    Json(RoutesResponse {
        routes: state.index.routes(),
    })
}
