//! Error types for the CLI application.
//!
//! This module defines the error types used throughout the CLI for better
//! error propagation and handling. Engine failures are carried through
//! unchanged so callers can still match on [`GameError`].

use blackjack_engine::errors::GameError;
use thiserror::Error;

use crate::config::ConfigError;

/// Custom error type for CLI operations.
///
/// This enum encompasses all error types that can occur during CLI execution,
/// allowing for proper error propagation using the `?` operator.
#[derive(Debug, Error)]
pub enum CliError {
    /// I/O error (file operations, stdout/stderr writes, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid user input or command-line arguments
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Engine rejected an operation
    #[error("Engine error: {0}")]
    Engine(#[from] GameError),

    /// Operation was interrupted (e.g., by user with Ctrl+C)
    #[error("Interrupted: {0}")]
    Interrupted(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engine_errors_keep_their_message() {
        let e: CliError = GameError::DeckExhausted.into();
        assert_eq!(e.to_string(), "Engine error: Deck exhausted: no card left to draw");
    }

    #[test]
    fn io_errors_convert() {
        let e: CliError = std::io::Error::other("boom").into();
        assert!(matches!(e, CliError::Io(_)));
        assert!(e.to_string().contains("boom"));
    }
}
