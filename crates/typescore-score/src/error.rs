//! Error types for table scoring.

use thiserror::Error;
use typescore_ingest::IngestError;
use typescore_model::ModelError;

/// Errors that can occur while scoring a table.
#[derive(Debug, Error)]
pub enum ScoreError {
    /// The parser could not turn the input into rows.
    #[error("failed to parse table: {0}")]
    Parse(#[from] IngestError),

    /// Scorer options were rejected.
    #[error("invalid score options: {0}")]
    Options(#[from] ModelError),
}

/// Result type for scoring operations.
pub type Result<T> = std::result::Result<T, ScoreError>;
