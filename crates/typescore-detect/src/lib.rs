//! Cell type detection.
//!
//! A [`PatternCatalog`] holds every full-string matcher (numbers, URLs,
//! times, currency, alphanumeric tokens and the generated date space). It is
//! compiled once per process and shared by every [`TypeDetector`].
//!
//! # Example
//!
//! ```
//! use typescore_detect::default_detector;
//! use typescore_model::TypeLabel;
//!
//! let detector = default_detector();
//! assert_eq!(detector.detect_type("19990101"), TypeLabel::Number);
//! assert_eq!(detector.detect_type("1999-01-01"), TypeLabel::Date);
//! assert!(!detector.is_known_type("#$%"));
//! ```

#![deny(unsafe_code)]

pub mod catalog;
mod detector;
mod error;

pub use catalog::{ALLOWED_SPECIALS, PatternCatalog, PatternKind, PatternSource, pattern_sources};
pub use detector::{TypeDetector, default_detector};
pub use error::{DetectError, Result};
