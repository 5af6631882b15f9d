//! Configuration options for the elimination driver.
//!
//! This module provides the configuration struct that controls how a game is
//! reduced, and the statistics gathered while reducing it.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Largest number of players a game description may declare.
pub const MAX_PLAYERS: usize = 5;

/// Largest number of actions a single player may declare.
pub const MAX_ACTIONS: usize = 10;

/// Configuration for the elimination driver.
///
/// This struct controls:
/// - Whether elimination runs at all (the input's skip flag)
/// - Whether the two-strategy mixture phase is attempted
/// - Whether every removal is recorded
/// - The size limits enforced when games are parsed
///
/// # Example
/// ```
/// use iesds_solver::iesds::EliminationConfig;
///
/// let config = EliminationConfig::default();
/// assert!(config.mixed); // mixture domination is checked by default
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EliminationConfig {
    /// Skip elimination and report the game unchanged.
    pub skip: bool,

    /// Check domination by mixtures of two actions once no pure domination
    /// is left.
    ///
    /// Disabling this reduces the game with pure domination only.
    pub mixed: bool,

    /// Record every removal in the driver's history.
    pub record_history: bool,

    /// Maximum accepted number of players.
    pub max_players: usize,

    /// Maximum accepted number of actions per player.
    pub max_actions: usize,
}

impl Default for EliminationConfig {
    fn default() -> Self {
        Self {
            skip: false,
            mixed: true,
            record_history: true,
            max_players: MAX_PLAYERS,
            max_actions: MAX_ACTIONS,
        }
    }
}

impl EliminationConfig {
    /// Create a new EliminationConfig with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration that only removes purely dominated actions.
    pub fn pure_only() -> Self {
        Self {
            mixed: false,
            ..Default::default()
        }
    }

    /// Builder method: set whether elimination is skipped.
    pub fn with_skip(mut self, skip: bool) -> Self {
        self.skip = skip;
        self
    }

    /// Builder method: set whether mixture domination is checked.
    pub fn with_mixed(mut self, enable: bool) -> Self {
        self.mixed = enable;
        self
    }

    /// Builder method: set whether removals are recorded.
    pub fn with_history(mut self, enable: bool) -> Self {
        self.record_history = enable;
        self
    }

    /// Builder method: set the size limits enforced when parsing.
    pub fn with_limits(mut self, max_players: usize, max_actions: usize) -> Self {
        self.max_players = max_players;
        self.max_actions = max_actions;
        self
    }

    /// Load a configuration from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::IoError(e.to_string()))?;
        Self::from_json_str(&content)
    }

    /// Load a configuration from a JSON string.
    ///
    /// Missing fields take their default values.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration and return any errors.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_players == 0 {
            return Err(ConfigError::InvalidLimit("max_players", self.max_players));
        }
        if self.max_actions == 0 {
            return Err(ConfigError::InvalidLimit("max_actions", self.max_actions));
        }
        Ok(())
    }
}

/// Errors that can occur when loading or validating configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The configuration file could not be read.
    IoError(String),
    /// The configuration file is not valid JSON for this struct.
    ParseError(String),
    /// A size limit is zero.
    InvalidLimit(&'static str, usize),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::ParseError(e) => write!(f, "Parse error: {}", e),
            ConfigError::InvalidLimit(name, val) => {
                write!(f, "{} must be at least 1, got {}", name, val)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Statistics tracked while reducing a game.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EliminationStats {
    /// Actions removed because another single action dominated them.
    pub pure_removals: usize,

    /// Actions removed because a mixture of two actions dominated them.
    pub mixed_removals: usize,

    /// Completed scans with the pure checker (one scan covers every player).
    pub pure_scans: usize,

    /// Completed scans with the mixture checker.
    pub mixed_scans: usize,

    /// Total number of actions across all players before elimination.
    pub initial_actions: usize,

    /// Total number of actions across all players after elimination.
    pub final_actions: usize,

    /// Total time spent reducing (in seconds).
    pub elapsed_seconds: f64,
}

impl EliminationStats {
    /// Create new empty stats.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of removed actions.
    pub fn removals(&self) -> usize {
        self.pure_removals + self.mixed_removals
    }
}
