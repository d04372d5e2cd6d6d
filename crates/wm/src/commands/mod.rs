//! CLI command implementations.

pub(crate) mod check;
pub(crate) mod routes;
pub(crate) mod serve;

pub(crate) use check::CheckArgs;
pub(crate) use routes::RoutesArgs;
pub(crate) use serve::ServeArgs;

use wm_config::Config;
use wm_nav::NavIndex;

use crate::error::CliError;

/// Build the navigation index for the built-in catalog.
///
/// Fails if the catalog has authoring issues.
pub(crate) fn build_index(config: &Config) -> Result<NavIndex, CliError> {
    let index = NavIndex::validated(wm_catalog::sections().to_vec())?
        .with_base_path(&config.docs_resolved.base_path)
        .with_root_title(config.site.root_title.clone());
    tracing::debug!(
        base_path = index.base_path(),
        pages = index.page_count(),
        "Catalog validated"
    );
    Ok(index)
}
