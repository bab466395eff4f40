//! Theme construction and configuration errors

use std::fmt;
use thiserror::Error;

/// Errors that make a theme or configuration unusable
#[derive(Debug, Error)]
pub enum ThemeError {
    /// The initial color mode names neither the base nor a declared mode
    #[error("Unknown initial color mode: {0}")]
    UnknownInitialMode(String),

    /// A mode overrides a role the base palette does not define (strict mode)
    #[error("Color mode '{mode}' overrides unknown role '{role}'")]
    UnknownModeRole {
        /// Mode name
        mode: String,
        /// Role missing from the base palette
        role: String,
    },

    /// A breakpoint width is empty
    #[error("Invalid breakpoint at index {0}: width must not be empty")]
    InvalidBreakpoint(usize),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for theme operations
pub type Result<T> = std::result::Result<T, ThemeError>;

/// A non-fatal problem found while building a theme
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// A mode overrides a role absent from the base palette
    UnknownModeRole {
        /// Mode name
        mode: String,
        /// Role missing from the base palette
        role: String,
    },
    /// An element style references a color role absent from the base palette
    UnknownColorReference {
        /// Element style key
        element: String,
        /// Selector template of the nested rule (`&` for the element itself)
        selector: String,
        /// Property name
        property: String,
        /// Referenced role
        role: String,
    },
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigWarning::UnknownModeRole { mode, role } => {
                write!(f, "color mode '{}' overrides unknown role '{}'", mode, role)
            }
            ConfigWarning::UnknownColorReference {
                element,
                selector,
                property,
                role,
            } => write!(
                f,
                "element style '{}' ({}) sets {} to unknown color role '{}'",
                element, selector, property, role
            ),
        }
    }
}
