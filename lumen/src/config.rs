use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::widgets::settings::model::SyncPolicy;

const CONFIG_DIR_ENV: &str = "LUMEN_CONFIG_DIR";
const CONFIG_FILE: &str = "config.json";
const PREFERENCES_FILE: &str = "preferences.json";

/// Errors emitted while reading the application config.
#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("config IO failed")]
    Io(#[from] std::io::Error),
    #[error("config JSON failed")]
    Json(#[from] serde_json::Error),
}

/// Status describing how the config was loaded from disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ConfigLoadStatus {
    Loaded,
    Missing,
    Invalid(String),
}

/// Application configuration read once at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub(crate) struct AppConfig {
    /// How an open settings form reacts to out-of-band preference changes.
    pub(crate) sync_policy: SyncPolicy,
}

/// Where the application keeps its files.
#[derive(Debug, Clone)]
pub(crate) struct ConfigPaths {
    root: PathBuf,
}

impl ConfigPaths {
    /// Resolve from `LUMEN_CONFIG_DIR`, then `$HOME/.config/lumen`, then the
    /// temp dir.
    pub(crate) fn resolve() -> Self {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
            return Self::at(PathBuf::from(dir));
        }

        if let Ok(home) = std::env::var("HOME") {
            return Self::at(Path::new(&home).join(".config").join("lumen"));
        }

        Self::at(std::env::temp_dir().join("lumen"))
    }

    pub(crate) fn at(root: PathBuf) -> Self {
        Self { root }
    }

    pub(crate) fn config_file(&self) -> PathBuf {
        self.root.join(CONFIG_FILE)
    }

    pub(crate) fn preferences_file(&self) -> PathBuf {
        self.root.join(PREFERENCES_FILE)
    }
}

/// Load the config, falling back to defaults when it is missing or invalid.
pub(crate) fn load_config(
    paths: &ConfigPaths,
) -> Result<(AppConfig, ConfigLoadStatus), ConfigError> {
    load_config_from_path(&paths.config_file())
}

fn load_config_from_path(
    path: &Path,
) -> Result<(AppConfig, ConfigLoadStatus), ConfigError> {
    let data = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok((AppConfig::default(), ConfigLoadStatus::Missing));
        },
        Err(err) => return Err(err.into()),
    };

    match serde_json::from_str::<AppConfig>(&data) {
        Ok(config) => Ok((config, ConfigLoadStatus::Loaded)),
        Err(err) => Ok((
            AppConfig::default(),
            ConfigLoadStatus::Invalid(format!("{err}")),
        )),
    }
}
