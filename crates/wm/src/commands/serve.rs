//! `wm serve` command implementation.

use std::path::PathBuf;

use clap::Args;
use wm_config::{CliSettings, Config};
use wm_server::{run_server, server_config_from_config};

use super::build_index;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the serve command.
#[derive(Args)]
pub(crate) struct ServeArgs {
    /// Path to configuration file (default: auto-discover waymark.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Content directory (overrides config).
    #[arg(short = 's', long)]
    content_dir: Option<PathBuf>,

    /// Host to bind to (overrides config).
    #[arg(long, env = "WAYMARK_HOST")]
    host: Option<String>,

    /// Port to bind to (overrides config).
    #[arg(short, long, env = "WAYMARK_PORT")]
    port: Option<u16>,

    /// Enable verbose output (request logs, missing content files).
    #[arg(short, long)]
    pub verbose: bool,
}

impl ServeArgs {
    /// Execute the serve command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration or the catalog is invalid, or the
    /// server fails to start.
    pub(crate) async fn execute(self, version: &str) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            host: self.host,
            port: self.port,
            content_dir: self.content_dir,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let index = build_index(&config)?;

        output.highlight(&format!("{} documentation", config.site.title));
        output.info(&format!(
            "Starting server on {}:{}",
            config.server.host, config.server.port
        ));
        output.info(&format!(
            "Content directory: {}",
            config.docs_resolved.content_dir.display()
        ));
        output.info(&format!(
            "Catalog: {} sections, {} pages under {}",
            index.sections().len(),
            index.page_count(),
            index.landing_path()
        ));
        if let Some(path) = &config.config_path {
            output.info(&format!("Config: {}", path.display()));
        }

        let server_config = server_config_from_config(&config, version.to_owned(), self.verbose);
        run_server(server_config, index).await?;

        Ok(())
    }
}
