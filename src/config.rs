// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::error::{AuditError, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_MARKER: &str = ".oxen/config.toml";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub audit: AuditConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AuditConfig {
    /// Path, relative to a repo directory, whose presence marks the repo as configured.
    pub config_marker: PathBuf,
    pub skip_blank_lines: bool,
    pub skip_hidden: bool,
    pub follow_links: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ReportConfig {
    pub list_stale: bool,
    pub pretty_json: bool,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            config_marker: PathBuf::from(DEFAULT_CONFIG_MARKER),
            skip_blank_lines: true,
            skip_hidden: false,
            follow_links: true,
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            list_stale: true,
            pretty_json: true,
        }
    }
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();

        let mut builder = config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        } else {
            builder = builder
                .add_source(config::File::from(Path::new("config/default.toml")).required(false));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("REPO_AUDIT")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .map_err(|e| AuditError::Config(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| AuditError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self {
            audit: AuditConfig::default(),
            report: ReportConfig::default(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        let marker = &self.audit.config_marker;

        if marker.as_os_str().is_empty() {
            return Err(AuditError::Config(
                "config_marker must not be empty".to_string(),
            ));
        }

        if marker.is_absolute() {
            return Err(AuditError::Config(format!(
                "config_marker must be relative to the repo directory: {}",
                marker.display()
            )));
        }

        Ok(())
    }
}
