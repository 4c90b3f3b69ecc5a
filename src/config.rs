//! Configuration handling for the TUI

use crate::state::ProductCatalog;
use crate::submission::DEFAULT_SUBMISSION_DELAY;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Environment variable that points at an alternative config file
pub const CONFIG_PATH_ENV: &str = "GIVEAWAY_TUI_CONFIG";

const DEFAULT_TITLE: &str = "Soul Calibre LLC Giveaway";
const DEFAULT_ORGANIZER: &str = "Soul Calibre LLC";
const DEFAULT_LOG_FILTER: &str = "giveaway_tui=info";
const LOG_FILE_NAME: &str = "giveaway-tui.log";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config json: {0}")]
    Json(#[from] serde_json::Error),
}

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GiveawayConfig {
    /// Heading shown above the form
    pub title: Option<String>,
    /// Name shown in the footer
    pub organizer: Option<String>,
    /// Offerings in display order
    pub products: Option<Vec<String>>,
    /// Length of the simulated submission window
    pub submission_delay_ms: Option<u64>,
    /// tracing filter directive, overridden by RUST_LOG
    pub log_level: Option<String>,
}

impl GiveawayConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("com", "soulcalibre", "giveaway-tui")
    }

    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
            if !path.is_empty() {
                return Some(PathBuf::from(path));
            }
        }
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Where the log file goes
    pub fn log_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.data_dir().join(LOG_FILE_NAME))
    }

    /// Load configuration from the default location
    pub fn load() -> Result<Self, ConfigError> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a file, defaulting when it does not exist
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config: GiveawayConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a file
    #[cfg(test)]
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or(DEFAULT_TITLE)
    }

    pub fn organizer(&self) -> &str {
        self.organizer.as_deref().unwrap_or(DEFAULT_ORGANIZER)
    }

    pub fn catalog(&self) -> ProductCatalog {
        match &self.products {
            Some(names) => ProductCatalog::from_names(names.iter().cloned()),
            None => ProductCatalog::default(),
        }
    }

    pub fn submission_delay(&self) -> Duration {
        self.submission_delay_ms
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_SUBMISSION_DELAY)
    }

    pub fn log_filter(&self) -> &str {
        self.log_level.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }
}
