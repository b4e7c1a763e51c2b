//! Tabular text ingestion for type scoring.
//!
//! - [`TableParser`]: the parser seam the scorer depends on
//! - [`CsvTableParser`]: dialect-driven parsing backed by the `csv` crate
//! - [`read_text`]: size-checked, encoding-checked file loading

#![deny(unsafe_code)]

pub mod error;
pub mod parser;
pub mod reader;

pub use error::{IngestError, Result};
pub use parser::{CsvTableParser, TableParser};
pub use reader::{
    MAX_INPUT_FILE_SIZE, check_file_size, check_file_size_with_limit, read_text,
    read_text_with_limit, validate_encoding,
};
