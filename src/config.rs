//! Play configuration loaded from TOML.

use crate::error::ConfigError;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tictactoe_engine::Player;
use tracing::{debug, info, instrument};

/// Settings for a terminal game.
///
/// Every field has a default, so an empty file is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlayConfig {
    /// Mark the human plays. X always moves first.
    #[serde(default = "default_human_mark")]
    human_mark: Player,

    /// Seed for the random opponent. Unset means a fresh seed per game.
    #[serde(default)]
    seed: Option<u64>,

    /// `tracing` filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

fn default_human_mark() -> Player {
    Player::X
}

fn default_log_filter() -> String {
    "info,tictactoe_service=debug".to_string()
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            human_mark: default_human_mark(),
            seed: None,
            log_filter: default_log_filter(),
        }
    }
}

impl PlayConfig {
    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml_str(&content)?;
        info!(human_mark = %config.human_mark, seed = ?config.seed, "Config loaded successfully");
        Ok(config)
    }

    /// Applies command-line overrides on top of the file values.
    #[instrument(skip(self))]
    pub fn with_overrides(mut self, human_mark: Option<Player>, seed: Option<u64>) -> Self {
        if let Some(mark) = human_mark {
            self.human_mark = mark;
        }
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }
}
