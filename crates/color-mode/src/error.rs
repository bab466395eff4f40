//! Color mode errors

use thiserror::Error;

/// Errors from switching color modes
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModeError {
    /// The requested mode is neither the base nor a declared mode
    #[error("Unknown color mode: {0}")]
    UnknownMode(String),
}

/// Result type for color mode operations
pub type Result<T> = std::result::Result<T, ModeError>;
