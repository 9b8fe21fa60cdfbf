//! Error types for intervals.

use thiserror::Error;

/// Errors surfaced by intervals commands.
///
/// The session machine itself never fails; these cover the edges around it
/// (settings, the workout file, user input and the terminal).
#[derive(Debug, Error)]
pub enum IntervalsError {
    /// Settings or workout file could not be read or written.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A requested item (exercise, file) does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// User input could not be interpreted.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Terminal setup, drawing or event polling failed.
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// Underlying I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization failure.
    #[error("JSON error: {0}")]
    Parse(#[from] serde_json::Error),
}
