//! Error types for textsim-core
//!
//! The similarity and formatting functions are total; errors only come from
//! elapsed-time rendering, configuration and the CLI surface.

use thiserror::Error;

use crate::config::ConfigError;

/// Main error type for textsim-core operations
#[derive(Debug, Error)]
pub enum TextError {
    /// End timestamp precedes the start timestamp
    #[error("Negative time span ({seconds}s): end is before start")]
    NegativeSpan { seconds: i64 },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed caller input (CLI arguments, timestamps)
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl TextError {
    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        TextError::InvalidInput(msg.into())
    }
}

/// Result type alias for textsim operations
pub type Result<T> = std::result::Result<T, TextError>;
