//! Errors raised while building, parsing or reducing a game.

use crate::iesds::config::ConfigError;

/// Errors that can occur anywhere in the elimination pipeline.
///
/// None of these are recoverable: the caller either fixes its input or
/// treats the error as a defect in the elimination logic.
#[derive(Debug, Clone, PartialEq)]
pub enum IesdsError {
    /// Payoff table dimensions do not match the declared player/action counts,
    /// or the counts themselves are out of range.
    MalformedGame(String),
    /// A removal targeted a missing player or action, or would leave a player
    /// without actions.
    InvariantViolation(String),
    /// A token in the textual game description could not be read.
    Parse(String),
    /// Reading or writing a file failed.
    Io(String),
    /// A report could not be encoded as JSON.
    Serialization(String),
    /// The elimination configuration is invalid.
    Config(ConfigError),
}

impl IesdsError {
    /// Check if this error reports a malformed game description.
    pub fn is_malformed(&self) -> bool {
        matches!(self, IesdsError::MalformedGame(_))
    }

    /// Check if this error reports a broken internal invariant.
    pub fn is_invariant_violation(&self) -> bool {
        matches!(self, IesdsError::InvariantViolation(_))
    }
}

impl std::fmt::Display for IesdsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IesdsError::MalformedGame(msg) => write!(f, "Malformed game: {}", msg),
            IesdsError::InvariantViolation(msg) => write!(f, "Invariant violation: {}", msg),
            IesdsError::Parse(msg) => write!(f, "Parse error: {}", msg),
            IesdsError::Io(msg) => write!(f, "IO error: {}", msg),
            IesdsError::Serialization(msg) => write!(f, "Serialization error: {}", msg),
            IesdsError::Config(e) => write!(f, "Config error: {}", e),
        }
    }
}

impl std::error::Error for IesdsError {}

impl From<ConfigError> for IesdsError {
    fn from(e: ConfigError) -> Self {
        IesdsError::Config(e)
    }
}

impl From<std::io::Error> for IesdsError {
    fn from(e: std::io::Error) -> Self {
        IesdsError::Io(e.to_string())
    }
}

impl From<serde_json::Error> for IesdsError {
    fn from(e: serde_json::Error) -> Self {
        IesdsError::Serialization(e.to_string())
    }
}
