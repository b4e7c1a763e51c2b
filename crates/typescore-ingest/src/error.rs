//! Error types for table ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or parsing tabular text.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Input file not found.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File exceeds the size limit.
    #[error("file {path} is {size} bytes, larger than the {max_size} byte limit")]
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },

    // === Encoding Errors ===
    /// File starts with a byte order mark of an unsupported encoding.
    #[error("unsupported encoding {encoding} in {path}")]
    UnsupportedEncoding {
        path: PathBuf,
        encoding: &'static str,
    },

    /// File content is not valid UTF-8.
    #[error("file {path} is not valid UTF-8: {source}")]
    InvalidUtf8 {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },

    // === Parsing Errors ===
    /// The CSV reader only accepts single-byte dialect characters.
    #[error("dialect characters must be ASCII ({dialect})")]
    NonAsciiDialect { dialect: String },

    /// Failed to read a record.
    #[error("failed to parse record {record}: {source}")]
    CsvRecord {
        record: usize,
        #[source]
        source: csv::Error,
    },
}

impl IngestError {
    pub(crate) fn open(path: &std::path::Path, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            Self::FileRead {
                path: path.to_path_buf(),
                source,
            }
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
