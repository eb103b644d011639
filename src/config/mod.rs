use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable overriding the log file location.
pub const LOG_FILE_ENV: &str = "TIMEFLOW_LOG_FILE";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_log_file")]
    pub log_file: String,
    #[serde(default)]
    pub editor: Option<String>,
}

fn default_log_file() -> String {
    "~/timelog.txt".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_file: default_log_file(),
            editor: None,
        }
    }
}

impl Config {
    /// Return the configuration directory (`~/.timeflow`)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".timeflow")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("timeflow.conf")
    }

    /// Load configuration from the standard location, or defaults if absent.
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Resolve the log file: CLI override, then `TIMEFLOW_LOG_FILE`, then
    /// the configured value.
    pub fn resolve_log_file(&self, cli_override: Option<&str>) -> PathBuf {
        let env_override = env::var(LOG_FILE_ENV).ok();
        let chosen = cli_override
            .or(env_override.as_deref())
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(&self.log_file);
        expand_tilde(chosen)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }
}
