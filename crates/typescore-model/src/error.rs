//! Error types for the shared model.

use thiserror::Error;

/// Errors raised while building model values from text.
#[derive(Debug, Error)]
pub enum ModelError {
    /// Label name does not match any known label.
    #[error("unknown type label: {value}")]
    UnknownLabel { value: String },

    /// Dialect character value is not a single character.
    #[error("invalid {field} character '{value}': expected a single character")]
    InvalidDialectChar { field: &'static str, value: String },

    /// Score floor must be a finite value in (0, 1].
    #[error("invalid eps {value}: expected a finite value in (0, 1]")]
    InvalidEps { value: f64 },
}

/// Result type for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;
