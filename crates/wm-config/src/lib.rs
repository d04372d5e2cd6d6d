//! Configuration management for Waymark.
//!
//! Parses `waymark.toml` with serde and discovers it in the current directory
//! or its parents. CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! - `${VAR}` expands to the value of VAR and errors if unset
//! - `${VAR:-default}` falls back to `default` when VAR is unset
//!
//! Expanded fields: `server.host`, `docs.content_dir`, `site.title`.

mod expand;

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "waymark.toml";

/// Default content directory, relative to the config file.
const DEFAULT_CONTENT_DIR: &str = "content/docs";

/// Default URL prefix of the documentation tree.
const DEFAULT_BASE_PATH: &str = "/docs";

/// CLI settings that override configuration file values.
///
/// Only `Some` fields override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override server host.
    pub host: Option<String>,
    /// Override server port.
    pub port: Option<u16>,
    /// Override content directory.
    pub content_dir: Option<PathBuf>,
}

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Server configuration.
    pub server: ServerConfig,
    /// Site identity.
    pub site: SiteConfig,
    docs: DocsConfigRaw,

    /// Resolved docs configuration (set after loading).
    #[serde(skip)]
    pub docs_resolved: DocsConfig,
    /// Path to the config file, if one was loaded.
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Server configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address.
    pub host: String,
    /// Bind port.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 7979,
        }
    }
}

/// Site identity shown in page titles and breadcrumbs.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Site name, used in `"<page> | <site> Docs"` head titles.
    pub title: String,
    /// Title of the root breadcrumb.
    pub root_title: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "AlgoSource".to_owned(),
            root_title: "Docs".to_owned(),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct DocsConfigRaw {
    content_dir: Option<String>,
    base_path: Option<String>,
}

/// Resolved documentation configuration.
#[derive(Debug, Default)]
pub struct DocsConfig {
    /// Directory holding one folder per section.
    pub content_dir: PathBuf,
    /// URL prefix of the documentation tree.
    pub base_path: String,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Explicit config file does not exist.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g. `server.host`).
        field: String,
        /// Error message (e.g. `${HOST} not set`).
        message: String,
    },
}

fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

impl Config {
    /// Load configuration with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file. Otherwise searches
    /// for `waymark.toml` in the current directory and its parents, falling
    /// back to defaults relative to the current directory.
    ///
    /// CLI settings are applied last and take precedence.
    ///
    /// # Errors
    ///
    /// Returns error if an explicit `config_path` doesn't exist, or if the
    /// file cannot be read, parsed, expanded or validated.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = std::env::current_dir()
            .ok()
            .and_then(|cwd| Self::discover_from(&cwd))
        {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_base(&std::env::current_dir().unwrap_or_default())
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    /// Search for the config file in `start` and its parents.
    fn discover_from(start: &Path) -> Option<PathBuf> {
        start
            .ancestors()
            .map(|dir| dir.join(CONFIG_FILENAME))
            .find(|candidate| candidate.is_file())
    }

    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(host) = &settings.host {
            self.server.host.clone_from(host);
        }
        if let Some(port) = settings.port {
            self.server.port = port;
        }
        if let Some(content_dir) = &settings.content_dir {
            self.docs_resolved.content_dir.clone_from(content_dir);
        }
    }

    /// Default config with paths relative to `base`.
    fn default_with_base(base: &Path) -> Self {
        Self {
            server: ServerConfig::default(),
            site: SiteConfig::default(),
            docs: DocsConfigRaw::default(),
            docs_resolved: DocsConfig {
                content_dir: base.join(DEFAULT_CONTENT_DIR),
                base_path: DEFAULT_BASE_PATH.to_owned(),
            },
            config_path: None,
        }
    }

    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;
        config.resolve_paths(path.parent().unwrap_or(Path::new(".")));
        config.config_path = Some(path.to_path_buf());
        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` describing the first invalid field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.server.host, "server.host")?;
        if self.server.port == 0 {
            return Err(ConfigError::Validation(
                "server.port cannot be 0".to_owned(),
            ));
        }

        let base_path = &self.docs_resolved.base_path;
        if !base_path.starts_with('/') {
            return Err(ConfigError::Validation(format!(
                "docs.base_path must start with '/', got {base_path:?}"
            )));
        }
        if base_path.len() > 1 && base_path.ends_with('/') {
            return Err(ConfigError::Validation(format!(
                "docs.base_path must not end with '/', got {base_path:?}"
            )));
        }

        require_non_empty(&self.site.title, "site.title")?;
        require_non_empty(&self.site.root_title, "site.root_title")?;
        Ok(())
    }

    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.server.host = expand::expand_env(&self.server.host, "server.host")?;
        self.site.title = expand::expand_env(&self.site.title, "site.title")?;
        if let Some(content_dir) = &self.docs.content_dir {
            self.docs.content_dir = Some(expand::expand_env(content_dir, "docs.content_dir")?);
        }
        Ok(())
    }

    fn resolve_paths(&mut self, config_dir: &Path) {
        self.docs_resolved = DocsConfig {
            content_dir: config_dir
                .join(self.docs.content_dir.as_deref().unwrap_or(DEFAULT_CONTENT_DIR)),
            base_path: self
                .docs
                .base_path
                .clone()
                .unwrap_or_else(|| DEFAULT_BASE_PATH.to_owned()),
        };
    }
}
