//! Error type for the CLI.
//!
//! Command handlers return `Result<(), CliError>`; [`crate::run`] turns the
//! variant into an exit code.

use std::fmt;

use blackjack_engine::errors::GameError;

#[derive(Debug)]
pub enum CliError {
    /// I/O error (stdout/stderr writes, history file, etc.)
    Io(std::io::Error),

    /// Invalid command-line arguments
    InvalidInput(String),

    /// Configuration file or environment could not be used
    Config(String),

    /// The table engine refused to continue
    Engine(String),

    /// Input ended before the table was set up
    Interrupted(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io(e) => write!(f, "I/O error: {}", e),
            CliError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::Engine(msg) => write!(f, "Engine error: {}", msg),
            CliError::Interrupted(msg) => write!(f, "Interrupted: {}", msg),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(error: std::io::Error) -> Self {
        CliError::Io(error)
    }
}

impl From<GameError> for CliError {
    fn from(error: GameError) -> Self {
        match error {
            GameError::InputClosed => CliError::Interrupted(error.to_string()),
            other => CliError::Engine(other.to_string()),
        }
    }
}
