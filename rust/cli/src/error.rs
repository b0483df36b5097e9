//! Error types for the CLI application.
//!
//! Every command handler returns `Result<(), CliError>`; [`crate::run`] maps
//! any error to exit code `2`.

use std::fmt;
use tricklog_engine::ReplayError;

#[derive(Debug)]
pub enum CliError {
    /// I/O error (file operations, stdout/stderr writes, etc.)
    Io(std::io::Error),

    /// Invalid user input or command-line arguments
    InvalidInput(String),

    /// Configuration error
    Config(String),

    /// Replay engine error (unknown game index, etc.)
    Engine(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io(e) => write!(f, "I/O error: {}", e),
            CliError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::Engine(msg) => write!(f, "Engine error: {}", msg),
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

impl From<ReplayError> for CliError {
    fn from(error: ReplayError) -> Self {
        CliError::Engine(error.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(error: serde_json::Error) -> Self {
        CliError::InvalidInput(format!("Failed to serialize output: {}", error))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replay_error_maps_to_engine() {
        let err: CliError = ReplayError::GameOutOfRange {
            index: 4,
            available: 2,
        }
        .into();
        assert_eq!(
            err.to_string(),
            "Engine error: game index 4 out of range (2 games available)"
        );
    }

    #[test]
    fn io_error_keeps_source() {
        use std::error::Error;
        let err = CliError::from(std::io::Error::other("disk"));
        assert!(err.source().is_some());
    }
}
