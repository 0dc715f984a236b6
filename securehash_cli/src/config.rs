//! Layered CLI configuration
//!
//! Resolution order: built-in defaults, then the user's config file, then
//! `SECUREHASH_*` environment variables.

use anyhow::{Context, Result};
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use securehash_core::ServiceConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Deserialize, Serialize, Debug, Default, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub service: ServiceConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct OutputConfig {
    pub default_format: String,
    pub color_enabled: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            color_enabled: true,
        }
    }
}

/// Configuration manager resolving the XDG config file path
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self> {
        let config_dir = dirs::config_dir()
            .context("Could not determine user configuration directory")?
            .join("securehash");
        Ok(Self {
            config_path: config_dir.join("config.toml"),
        })
    }

    /// Override the config file location (used by tests)
    pub fn with_path(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    pub fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    /// Load the layered configuration
    pub fn load(&self) -> Result<AppConfig> {
        Figment::from(Serialized::defaults(AppConfig::default()))
            .merge(Toml::file(&self.config_path))
            .merge(Env::prefixed("SECUREHASH_").split("__"))
            .extract()
            .with_context(|| {
                format!(
                    "Failed to load configuration from {}",
                    self.config_path.display()
                )
            })
    }
}
