//! Error types for textkit.

use thiserror::Error;

/// Errors that can occur when transforming strings.
#[derive(Error, Debug)]
pub enum TextError {
    /// An argument violated a precondition.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The break pattern is not a valid regular expression.
    #[error("Invalid break pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// The configuration file could not be read or parsed.
    #[error("Config error: {0}")]
    Config(String),
}

/// Result type for textkit operations.
pub type TextResult<T> = Result<T, TextError>;
