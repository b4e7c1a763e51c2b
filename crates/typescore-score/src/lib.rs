//! Table type scoring.
//!
//! The score of a parsed table is the share of its cells that the
//! [`TypeDetector`](typescore_detect::TypeDetector) assigns a known type,
//! floored at a small `eps` so that a table with nothing recognizable still
//! scores above zero.
//!
//! # Example
//!
//! ```
//! use typescore_ingest::CsvTableParser;
//! use typescore_model::Dialect;
//! use typescore_score::{DEFAULT_EPS_TYPE, type_score};
//!
//! let data = "id,when,price\n1,2023-01-01,$4.50\n";
//! let score = type_score(&CsvTableParser::new(), data, &Dialect::default(), DEFAULT_EPS_TYPE)?;
//! assert_eq!(score, 1.0);
//! # Ok::<(), typescore_score::ScoreError>(())
//! ```

#![deny(unsafe_code)]

mod error;
mod known;
mod profile;
mod score;
mod scorer;

pub use error::{Result, ScoreError};
pub use known::{KnownTypes, known_types};
pub use profile::{ColumnProfile, TableProfile, profile_rows};
pub use score::{ScoreReport, score_report, score_rows, type_score, type_score_with};
pub use scorer::TypeScorer;
pub use typescore_model::DEFAULT_EPS_TYPE;
