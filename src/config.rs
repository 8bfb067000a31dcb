//! Game configuration loaded from TOML.

use crate::opponent::Difficulty;
use crate::settings::{FirstMover, GameSettings};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Startup configuration for the console game.
///
/// ```toml
/// opponent_moves_first = true
/// difficulty = "hard"
/// seed = 42
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Whether the computer opens each game.
    #[serde(default)]
    opponent_moves_first: bool,

    /// Opponent difficulty (`easy` or `hard`).
    #[serde(default)]
    difficulty: Difficulty,

    /// Optional RNG seed for reproducible opponents.
    #[serde(default)]
    seed: Option<u64>,
}

impl GameConfig {
    /// Creates a configuration.
    pub fn new(opponent_moves_first: bool, difficulty: Difficulty, seed: Option<u64>) -> Self {
        Self {
            opponent_moves_first,
            difficulty,
            seed,
        }
    }

    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(?config, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads `path` if it exists, otherwise returns defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Settings for the first game of a session.
    pub fn settings(&self) -> GameSettings {
        GameSettings {
            first_mover: if self.opponent_moves_first {
                FirstMover::Opponent
            } else {
                FirstMover::Player
            },
            difficulty: self.difficulty,
        }
    }

    /// Applies command-line overrides on top of the file values.
    ///
    /// `None` keeps the file value; `Some(false)` can switch off an
    /// `opponent_moves_first = true` from the file.
    pub fn with_overrides(
        mut self,
        opponent_moves_first: Option<bool>,
        difficulty: Option<Difficulty>,
        seed: Option<u64>,
    ) -> Self {
        if let Some(opponent_moves_first) = opponent_moves_first {
            self.opponent_moves_first = opponent_moves_first;
        }
        if let Some(difficulty) = difficulty {
            self.difficulty = difficulty;
        }
        if seed.is_some() {
            self.seed = seed;
        }
        self
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
