//! Error types for the terminal driver
//!
//! Rules violations by the player are not errors here either: they are
//! reported back as prompts. [`InputError`] covers text that is not a move or
//! command at all, [`DriverError`] covers I/O and settings failures.

use chess_rules::RulesError;
use thiserror::Error;

/// Lines that could not be understood
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Empty input")]
    Empty,

    #[error("Unknown command {0:?} (try `help`)")]
    UnknownCommand(String),

    #[error(transparent)]
    Square(#[from] RulesError),
}

/// Failures of the driver itself
#[derive(Error, Debug)]
pub enum DriverError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Settings file error: {0}")]
    Settings(#[from] serde_json::Error),

    #[error(transparent)]
    Rules(#[from] RulesError),
}

/// Result type alias for driver operations
pub type DriverResult<T> = Result<T, DriverError>;
