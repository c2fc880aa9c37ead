use anyhow::{Context, Result, anyhow};
use directories::{BaseDirs, ProjectDirs};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    geocode::{DEFAULT_GEOCODE_SCHEME, GEOCODE_HOST},
    provider::darksky::DEFAULT_FORECAST_BASE_URL,
    state::API_KEY_ENV,
};

/// Optional overrides read from `config.toml`.
///
/// Example TOML:
/// geocode_scheme = "https"
/// state_dir = "/tmp/goforecast"
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Scheme used for the geocoding request, `http` or `https`.
    pub geocode_scheme: String,

    /// Host (optionally with port) of the geocoding service.
    pub geocode_host: String,

    /// Base URL of the forecast.io-compatible forecast service.
    pub forecast_base_url: String,

    /// Environment variable consulted when no key is stored.
    pub api_key_env: String,

    /// Directory holding the `.goforecast` state file. Defaults to `$HOME`.
    pub state_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            geocode_scheme: DEFAULT_GEOCODE_SCHEME.to_string(),
            geocode_host: GEOCODE_HOST.to_string(),
            forecast_base_url: DEFAULT_FORECAST_BASE_URL.to_string(),
            api_key_env: API_KEY_ENV.to_string(),
            state_dir: None,
        }
    }
}

impl Config {
    /// Load config from disk, or return defaults if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        if cfg.geocode_scheme != "http" && cfg.geocode_scheme != "https" {
            return Err(anyhow!(
                "Unsupported geocode_scheme '{}' in {}. Use \"http\" or \"https\".",
                cfg.geocode_scheme,
                path.display()
            ));
        }

        Ok(cfg)
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "goforecast", "goforecast")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Directory the state file lives in: the override if set, else the home directory.
    pub fn state_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.state_dir {
            return Ok(dir.clone());
        }

        BaseDirs::new()
            .map(|dirs| dirs.home_dir().to_path_buf())
            .ok_or_else(|| anyhow!("Could not determine home directory for the state file"))
    }
}
