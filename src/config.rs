//! Game configuration loaded from TOML and overridden from the command line.

use crate::games::mnk::{Board, MnkError, Symbol};
use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Who sits in each seat.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum, Display,
)]
#[serde(rename_all = "kebab-case")]
pub enum PlayMode {
    /// One human against the search engine.
    #[default]
    #[display("human-vs-bot")]
    HumanVsBot,
    /// Two humans sharing the terminal.
    #[display("human-vs-human")]
    HumanVsHuman,
    /// The engine against itself.
    #[display("bot-vs-bot")]
    BotVsBot,
}

/// Settings for one game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
pub struct GameConfig {
    /// Board side length (N).
    #[serde(default = "default_size")]
    size: usize,

    /// Marks in a row needed to win (K).
    #[serde(default = "default_win_length")]
    win_length: usize,

    /// Seat assignment.
    #[serde(default)]
    mode: PlayMode,

    /// Mark played by the human in human-vs-bot games.
    #[serde(default = "default_symbol")]
    human_symbol: Symbol,

    /// Mark that moves first.
    #[serde(default = "default_symbol")]
    first: Symbol,

    /// Whether the engine uses alpha-beta pruning.
    #[serde(default = "default_pruning")]
    pruning: bool,
}

fn default_size() -> usize {
    3
}

fn default_win_length() -> usize {
    3
}

fn default_symbol() -> Symbol {
    Symbol::X
}

fn default_pruning() -> bool {
    true
}

impl GameConfig {
    /// Loads configuration from a TOML file. Missing keys take defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(
            size = config.size,
            win_length = config.win_length,
            mode = %config.mode,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Creates the empty board this configuration describes.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` for impossible dimensions.
    #[instrument(skip(self), fields(size = self.size, win_length = self.win_length))]
    pub fn new_board(&self) -> Result<Board, MnkError> {
        Board::new(self.size, self.win_length)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: default_size(),
            win_length: default_win_length(),
            mode: PlayMode::default(),
            human_symbol: default_symbol(),
            first: default_symbol(),
            pruning: default_pruning(),
        }
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
