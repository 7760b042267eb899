//! Layered defaults for `goforge new`
//!
//! Sources, lowest priority first: built-in defaults, an optional TOML file,
//! then `GOFORGE_*` environment variables. Command-line flags are applied on
//! top by the command itself.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::CliResult;

/// Default environment variable prefix
pub const ENV_PREFIX: &str = "GOFORGE";

/// Defaults applied when a choice is not given on the command line
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GoforgeConfig {
    /// Frontend name, e.g. `htmx-alpine`
    pub frontend: String,
    /// CSS framework name, e.g. `basecoat`
    pub css_framework: String,
    /// Whether to generate the database layer
    pub include_db: bool,
    /// Template directory used instead of the embedded scaffold
    pub templates_dir: Option<PathBuf>,
}

impl Default for GoforgeConfig {
    fn default() -> Self {
        Self {
            frontend: "htmx".to_string(),
            css_framework: "daisyui".to_string(),
            include_db: true,
            templates_dir: None,
        }
    }
}

/// Loads [`GoforgeConfig`] from file and environment
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config_path: PathBuf,
    required: bool,
    env_prefix: String,
}

impl ConfigLoader {
    /// Loader for the per-user configuration file, which may be absent
    pub fn new() -> Self {
        Self {
            config_path: Self::default_config_path(),
            required: false,
            env_prefix: ENV_PREFIX.to_string(),
        }
    }

    /// Loader for an explicitly requested file, which must exist
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            required: true,
            env_prefix: ENV_PREFIX.to_string(),
        }
    }

    /// Use a different environment variable prefix
    pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Path of the configuration file this loader reads
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Get default config path
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("goforge")
            .join("config.toml")
    }

    /// Merge every source into a configuration
    pub fn load(&self) -> CliResult<GoforgeConfig> {
        let config = Config::builder()
            .add_source(File::from(self.config_path.clone()).required(self.required))
            .add_source(Environment::with_prefix(&self.env_prefix).try_parsing(true))
            .build()?;

        let loaded: GoforgeConfig = config.try_deserialize()?;
        tracing::debug!(path = %self.config_path.display(), ?loaded, "loaded configuration");
        Ok(loaded)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
