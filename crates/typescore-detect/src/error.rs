//! Error types for catalog construction.
//!
//! Classification itself never fails; only building a catalog can.

use thiserror::Error;

/// Errors raised while compiling a pattern catalog.
#[derive(Debug, Error)]
pub enum DetectError {
    /// A pattern source is not valid regex syntax.
    #[error("failed to compile pattern {name}: {source}")]
    InvalidPattern {
        name: String,
        #[source]
        source: regex::Error,
    },

    /// Two sources share a name.
    #[error("duplicate pattern name: {name}")]
    DuplicatePattern { name: String },

    /// A custom catalog lacks a pattern the detector needs.
    #[error("pattern catalog is missing required pattern: {name}")]
    MissingPattern { name: String },
}

/// Result type for detector construction.
pub type Result<T> = std::result::Result<T, DetectError>;
