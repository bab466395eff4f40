//! Prop contract errors

use thiserror::Error;

/// Errors raised by primitive contracts
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PropsError {
    /// A primitive's default prop is not resolvable by any of its namespaces
    #[error("Default prop '{prop}' of {primitive} is outside its namespaces")]
    DefaultOutsideNamespaces {
        /// Primitive name
        primitive: String,
        /// Offending prop
        prop: String,
    },

    /// A primitive name did not parse
    #[error("Unknown primitive: {0}")]
    UnknownPrimitive(String),
}

/// Result type for prop contract operations
pub type Result<T> = std::result::Result<T, PropsError>;
