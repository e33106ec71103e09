use thiserror::Error;

use crate::config::ConfigError;

/// Custom error types for property discovery
#[derive(Debug, Error)]
pub enum ExpressionError {
    #[error("Invalid field on {type_name}: {reason}")]
    InvalidField { type_name: String, reason: String },

    #[error("Duplicate property id: {0}")]
    DuplicateProperty(String),

    #[error("Property not found: {0}")]
    PropertyNotFound(String),

    #[error("Resource catalog error: {0}")]
    ResourceError(String),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type specific to expression builder operations
pub type ExpressionResult<T> = Result<T, ExpressionError>;
