use std::env;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use lexo_types::SearchMode;
use serde::{Deserialize, Serialize};

use self::log::LogConfig;
use self::services::ServicesConfig;
use self::ui::UiConfig;

pub mod log;
pub mod services;
pub mod ui;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to open config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub services: ServicesConfig,
    pub ui: UiConfig,
    pub log: LogConfig,

    /// Mode selected when the view starts
    pub default_mode: SearchMode,
}

impl Config {
    /// Build from environment variables, falling back to defaults
    pub fn new() -> Self {
        let default_mode = env::var("LEXO_DEFAULT_MODE")
            .ok()
            .and_then(|v| match v.parse() {
                Ok(mode) => Some(mode),
                Err(e) => {
                    tracing::warn!("Ignoring LEXO_DEFAULT_MODE: {e}");
                    None
                }
            })
            .unwrap_or_default();

        Config {
            services: ServicesConfig::new(),
            ui: UiConfig::new(),
            log: LogConfig::new(),

            default_mode,
        }
    }

    /// Apply a `.env` file if there is one, then read the environment
    pub fn load() -> Self {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!("Loaded environment from {}", path.display());
        }

        Self::new()
    }

    /// Load a JSON profile. Missing fields take their defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let file = File::open(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;

        serde_json::from_reader(BufReader::new(file)).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }
}

fn env_or(key: &str, default: impl FnOnce() -> String) -> String {
    env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(default)
}
