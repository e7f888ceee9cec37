//! Error handling module for the statement builder
//!
//! Provides centralized error types using thiserror. Selection and wizard
//! operations never fail; these errors cover the edges of the program
//! (configuration files, terminal setup, CLI input, JSON output).

use thiserror::Error;

/// Main error type for the statement builder
#[derive(Error, Debug)]
pub enum BuilderError {
    /// IO errors (terminal drawing and event polling)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration errors (reading, parsing, writing, range checks)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Validation errors (CLI option numbers, generator settings)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Terminal/UI errors
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for builder operations
pub type Result<T> = std::result::Result<T, BuilderError>;

impl BuilderError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a terminal error
    pub fn terminal(msg: impl Into<String>) -> Self {
        Self::Terminal(msg.into())
    }
}
