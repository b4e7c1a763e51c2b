//! Shared vocabulary for cell type detection and table type scoring.
//!
//! - [`TypeLabel`]: the fixed set of semantic cell types
//! - [`Dialect`]: delimiter, quote and escape characters handed to the parser
//! - [`DetectorOptions`] / [`ScoreOptions`]: detector and scorer configuration

#![deny(unsafe_code)]

pub mod dialect;
pub mod error;
pub mod label;
pub mod options;

pub use dialect::{Dialect, parse_dialect_char};
pub use error::{ModelError, Result};
pub use label::TypeLabel;
pub use options::{DEFAULT_EPS_TYPE, DetectorOptions, ScoreOptions};
