//! Router construction.

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware::security;
use crate::state::AppState;

/// Create the application router.
pub(crate) fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/config", get(handlers::config::get_config))
        .route("/api/sections", get(handlers::sections::list_sections))
        .route("/api/sections/{slug}", get(handlers::sections::get_section))
        .route("/api/navigation", get(handlers::navigation::get_navigation))
        .route("/api/routes", get(handlers::routes::list_routes))
        .route("/api/pages/{*path}", get(handlers::pages::get_page))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(security::csp_layer())
                .layer(security::content_type_options_layer())
                .layer(security::frame_options_layer())
                .layer(security::referrer_policy_layer()),
        )
        .with_state(state)
}
