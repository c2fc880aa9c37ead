//! The `.goforecast` state file and API key resolution.

use serde::{Deserialize, Serialize};
use std::{
    fs, io,
    path::{Path, PathBuf},
};
use tracing::{debug, info};

use crate::error::{ForecastError, StateFileError};

/// Name of the state file inside the state directory.
pub const STATE_FILE_NAME: &str = ".goforecast";

/// Environment variable holding the forecast API key.
pub const API_KEY_ENV: &str = "FORECAST_IO_API_KEY";

/// What we keep on disk between runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedState {
    #[serde(default)]
    pub api_key: String,
}

/// Reads and writes the state file in a given directory.
#[derive(Debug, Clone)]
pub struct StateStore {
    path: PathBuf,
}

impl StateStore {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(STATE_FILE_NAME),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `Ok(None)` when the file does not exist or holds JSON `null`.
    pub fn load(&self) -> Result<Option<PersistedState>, ForecastError> {
        let read_err = |source: StateFileError| ForecastError::StateRead {
            path: self.path.clone(),
            source,
        };

        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("No state file at {}", self.path.display());
                return Ok(None);
            }
            Err(e) => return Err(read_err(e.into())),
        };

        serde_json::from_slice::<Option<PersistedState>>(&bytes).map_err(|e| read_err(e.into()))
    }

    /// Overwrite the state file with `state`.
    pub fn save(&self, state: &PersistedState) -> Result<(), ForecastError> {
        let write_err = |source: StateFileError| ForecastError::StateWrite {
            path: self.path.clone(),
            source,
        };

        let bytes = serde_json::to_vec(state).map_err(|e| write_err(e.into()))?;
        fs::write(&self.path, bytes).map_err(|e| write_err(e.into()))
    }
}

/// Finds the API key: stored state first, then the environment.
///
/// Whatever key is found gets written back to the state file before it is
/// returned, so a key passed once through the environment sticks.
#[derive(Debug, Clone)]
pub struct KeyResolver {
    store: StateStore,
    env_var: String,
}

impl KeyResolver {
    pub fn new(state_dir: impl AsRef<Path>) -> Self {
        Self {
            store: StateStore::new(state_dir),
            env_var: API_KEY_ENV.to_string(),
        }
    }

    pub fn with_env_var(mut self, env_var: impl Into<String>) -> Self {
        self.env_var = env_var.into();
        self
    }

    pub fn store(&self) -> &StateStore {
        &self.store
    }

    /// Resolve against the process environment.
    pub fn resolve(&self) -> Result<String, ForecastError> {
        self.resolve_with(|name| std::env::var(name).ok())
    }

    /// Resolve with `lookup_env` standing in for the environment. It is only
    /// called when the state file has no usable key.
    pub fn resolve_with<F>(&self, lookup_env: F) -> Result<String, ForecastError>
    where
        F: FnOnce(&str) -> Option<String>,
    {
        let stored = self
            .store
            .load()?
            .map(|state| state.api_key)
            .filter(|key| !key.is_empty());

        let key = match stored {
            Some(key) => {
                debug!("Using API key from {}", self.store.path().display());
                key
            }
            None => {
                let key = lookup_env(&self.env_var)
                    .filter(|key| !key.is_empty())
                    .ok_or_else(|| ForecastError::MissingApiKey {
                        env_var: self.env_var.clone(),
                    })?;
                info!("Using API key from ${}", self.env_var);
                key
            }
        };

        self.store.save(&PersistedState {
            api_key: key.clone(),
        })?;

        Ok(key)
    }
}
