//! `wm check` command implementation.
//!
//! Catalog issues are errors. Missing content files are warnings, since
//! those pages are served as placeholders.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use wm_config::{CliSettings, Config};
use wm_content::{ContentResolver, ContentSource, FsContentSource, MissingContent};
use wm_nav::{CatalogError, NavIndex};

use super::build_index;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    /// Path to configuration file (default: auto-discover waymark.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Content directory (overrides config).
    #[arg(short = 's', long)]
    content_dir: Option<PathBuf>,
}

impl CheckArgs {
    /// Execute the check command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration is invalid or the catalog has issues.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            content_dir: self.content_dir,
            ..Default::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let index = match build_index(&config) {
            Ok(index) => index,
            Err(CliError::Catalog(err)) => {
                report_issues(&output, &err);
                return Err(err.into());
            }
            Err(err) => return Err(err),
        };
        output.success(&format!(
            "Catalog OK: {} sections, {} pages",
            index.sections().len(),
            index.page_count()
        ));

        let content_dir = &config.docs_resolved.content_dir;
        let source: Arc<dyn ContentSource> =
            Arc::new(FsContentSource::new(content_dir.clone()));
        let missing = missing_content(&index, source);
        if missing.is_empty() {
            output.success(&format!(
                "All content files present in {}",
                content_dir.display()
            ));
        } else {
            output.warning(&format!(
                "{} of {} pages have no content file in {} (served as placeholders):",
                missing.len(),
                index.page_count(),
                content_dir.display()
            ));
            for entry in &missing {
                output.warning(&format!(
                    "  {}/{}: {}",
                    entry.section,
                    entry.page,
                    entry.source_path.display()
                ));
            }
        }

        Ok(())
    }
}

fn report_issues(output: &Output, err: &CatalogError) {
    output.error(&format!("Catalog has {} issue(s):", err.issues.len()));
    for issue in &err.issues {
        output.error(&format!("  {issue}"));
    }
}

fn missing_content(index: &NavIndex, source: Arc<dyn ContentSource>) -> Vec<MissingContent> {
    ContentResolver::new(source).missing(index)
}
