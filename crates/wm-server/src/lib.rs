//! HTTP API for Waymark.
//!
//! Serves the navigation index and rendered page content as JSON:
//!
//! - `GET /api/config`: site identity and totals
//! - `GET /api/sections`, `GET /api/sections/{slug}`: landing page model
//! - `GET /api/navigation?path=`: sidebar model
//! - `GET /api/routes`: every servable page URL
//! - `GET /api/pages/{*path}`: page payload with breadcrumbs and prev/next
//!
//! # Quick Start
//!
//! ```ignore
//! use wm_nav::NavIndex;
//! use wm_server::{ServerConfig, run_server};
//!
//! #[tokio::main]
//! async fn main() {
//!     let index = NavIndex::validated(wm_catalog::sections().to_vec()).unwrap();
//!     run_server(ServerConfig::default(), index).await.unwrap();
//! }
//! ```

mod app;
mod error;
mod handlers;
mod middleware;
mod state;

use std::path::PathBuf;
use std::sync::Arc;

use wm_content::{ContentResolver, ContentSource, FsContentSource};
use wm_nav::NavIndex;

pub use error::ServerError;
use state::AppState;

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Directory holding one folder per section.
    pub content_dir: PathBuf,
    /// Site name used in page head titles.
    pub site_title: String,
    /// Log missing content files at startup.
    pub verbose: bool,
    /// Application version, mixed into `ETag`s.
    pub version: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 7979,
            content_dir: PathBuf::from("content/docs"),
            site_title: "AlgoSource".to_owned(),
            verbose: false,
            version: String::new(),
        }
    }
}

/// Run the server until Ctrl-C.
///
/// `index` must already carry the configured base path and root title.
///
/// # Errors
///
/// Returns an error if the host does not resolve or the listener fails.
pub async fn run_server(config: ServerConfig, index: NavIndex) -> Result<(), ServerError> {
    let source: Arc<dyn ContentSource> =
        Arc::new(FsContentSource::new(config.content_dir.clone()));
    let content = ContentResolver::new(source);

    if config.verbose {
        for missing in content.missing(&index) {
            tracing::warn!(
                section = %missing.section,
                page = %missing.page,
                path = %missing.source_path.display(),
                "Content file missing"
            );
        }
    }

    let state = Arc::new(AppState {
        index,
        content,
        site_title: config.site_title.clone(),
        version: config.version.clone(),
    });
    let app = app::create_router(state);

    let listener = bind_listener(&config.host, config.port).await?;
    tracing::info!(
        host = %config.host,
        address = %listener.local_addr()?,
        content_dir = %config.content_dir.display(),
        "Starting server"
    );
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Bind a listener on `host`, which may be a hostname or an IP literal.
async fn bind_listener(host: &str, port: u16) -> Result<tokio::net::TcpListener, ServerError> {
    tokio::net::TcpListener::bind((host, port))
        .await
        .map_err(|e| ServerError::Bind {
            address: format!("{host}:{port}"),
            source: e,
        })
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for Ctrl+C");
        return;
    }
    tracing::info!("Shutdown signal received, stopping server...");
}

/// Create server configuration from a loaded [`wm_config::Config`].
#[must_use]
pub fn server_config_from_config(
    config: &wm_config::Config,
    version: String,
    verbose: bool,
) -> ServerConfig {
    ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
        content_dir: config.docs_resolved.content_dir.clone(),
        site_title: config.site.title.clone(),
        verbose,
        version,
    }
}
