//! `wm routes` command implementation.

use std::path::PathBuf;

use clap::Args;
use wm_config::Config;

use super::build_index;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the routes command.
#[derive(Args)]
pub(crate) struct RoutesArgs {
    /// Path to configuration file (default: auto-discover waymark.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print routes as a JSON array.
    #[arg(long)]
    json: bool,
}

impl RoutesArgs {
    /// Execute the routes command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration or the catalog is invalid.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = Config::load(self.config.as_deref(), None)?;
        let index = build_index(&config)?;
        let routes = index.routes();

        if self.json {
            output.result(&serde_json::to_string_pretty(&routes)?);
        } else {
            for route in &routes {
                output.result(&route.path);
            }
        }
        Ok(())
    }
}
