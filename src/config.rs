//! Game configuration loaded from TOML.

use crate::{GameController, GameMode};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};
use ttt_core::{Mark, SearchEngine};

/// Settings for a game session.
///
/// ```toml
/// level = 1
/// engine_mark = "PlayerTwo"
/// mode = "PlayerVsEngine"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Engine difficulty: 0 plays at random, anything higher searches.
    #[serde(default = "default_level")]
    level: u8,

    /// Mark the engine plays.
    #[serde(default = "default_engine_mark")]
    engine_mark: Mark,

    /// Starting mode.
    #[serde(default)]
    mode: GameMode,
}

fn default_level() -> u8 {
    1
}

fn default_engine_mark() -> Mark {
    Mark::PlayerTwo
}

impl GameConfig {
    /// Creates a configuration from explicit values.
    pub fn new(level: u8, engine_mark: Mark, mode: GameMode) -> Self {
        Self {
            level,
            engine_mark,
            mode,
        }
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(level = config.level, mode = %config.mode, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Overrides the difficulty level.
    pub fn with_level(mut self, level: u8) -> Self {
        self.level = level;
        self
    }

    /// Overrides the starting mode.
    pub fn with_mode(mut self, mode: GameMode) -> Self {
        self.mode = mode;
        self
    }

    /// Builds the engine described by this configuration.
    #[instrument(skip(self), fields(level = self.level, engine_mark = ?self.engine_mark))]
    pub fn engine(&self) -> Result<SearchEngine, ConfigError> {
        SearchEngine::new(self.level, self.engine_mark)
            .map_err(|e| ConfigError::new(format!("Invalid engine_mark: {}", e)))
    }

    /// Builds a controller for a new game.
    pub fn controller(&self) -> Result<GameController, ConfigError> {
        Ok(GameController::new(self.engine()?, self.mode))
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(default_level(), default_engine_mark(), GameMode::default())
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
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
