// Settings and dashboard file loading
use crate::domain::dashboard::DashboardDefinition;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_DASHBOARD_PATH: &str = "config/dashboard.json";

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Invalid settings: {0}")]
    Settings(#[from] config::ConfigError),

    #[error("Failed to read dashboard file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse dashboard file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    #[serde(default = "default_dashboard_path")]
    pub dashboard_path: PathBuf,
    /// When set, mobile mode follows this width instead of staying off
    #[serde(default)]
    pub viewport_width: Option<u32>,
    #[serde(default)]
    pub mobile_autofill_height: bool,
    #[serde(default)]
    pub autofill_height: bool,
}

fn default_dashboard_path() -> PathBuf {
    PathBuf::from(DEFAULT_DASHBOARD_PATH)
}

/// Load settings from `config/app` (optional) overlaid with `DASHBOARD_*` env vars
pub fn load_app_config() -> Result<AppConfig, LoadError> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/app").required(false))
        .add_source(config::Environment::with_prefix("DASHBOARD"))
        .build()?;

    Ok(settings.try_deserialize()?)
}

pub fn load_dashboard_definition(path: &Path) -> Result<DashboardDefinition, LoadError> {
    let contents = std::fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&contents).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
