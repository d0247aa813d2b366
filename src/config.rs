//! Game configuration loaded from TOML.

use crate::games::tictactoe::{MAX_EDGE_SIZE, MIN_EDGE_SIZE};
use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for one console game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
pub struct GameConfig {
    /// Number of cells along one side of the board.
    #[serde(default = "default_edge_size")]
    edge_size: usize,

    /// Name of the player using `X`; asked for at startup when absent.
    #[serde(default)]
    player_x: Option<String>,

    /// Name of the player using `O`; asked for at startup when absent.
    #[serde(default)]
    player_o: Option<String>,

    /// Clear the terminal before each redraw.
    #[serde(default = "default_clear_screen")]
    clear_screen: bool,
}

#[instrument]
fn default_edge_size() -> usize {
    MIN_EDGE_SIZE
}

#[instrument]
fn default_clear_screen() -> bool {
    true
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            edge_size: default_edge_size(),
            player_x: None,
            player_o: None,
            clear_screen: default_clear_screen(),
        }
    }
}

impl GameConfig {
    /// Loads and validates configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;

        info!(edge_size = config.edge_size, "Config loaded successfully");
        Ok(config)
    }

    /// Rejects settings no game can start with.
    #[instrument(skip(self), fields(edge_size = self.edge_size))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.edge_size < MIN_EDGE_SIZE {
            return Err(ConfigError::new(format!(
                "edge_size must be at least {}, got {}",
                MIN_EDGE_SIZE, self.edge_size
            )));
        }
        if self.edge_size > MAX_EDGE_SIZE {
            return Err(ConfigError::new(format!(
                "edge_size must be at most {}, got {}",
                MAX_EDGE_SIZE, self.edge_size
            )));
        }

        for name in [&self.player_x, &self.player_o].into_iter().flatten() {
            if name.trim().is_empty() {
                return Err(ConfigError::new("player names must not be blank".to_string()));
            }
        }
        Ok(())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
