//! Ordered type detection for single cells.
//!
//! Each predicate is a total function over any string. [`TypeDetector::detect_type`]
//! tries them in [`TypeLabel::DETECTION_ORDER`] and returns the first hit.
//! The order matters: numbers are tested before dates (and `is_date` also
//! rejects numbers on its own), currency before alphanumeric tokens.

use std::sync::{Arc, LazyLock};

use tracing::trace;
use typescore_model::{DetectorOptions, TypeLabel};

use crate::catalog::{PatternCatalog, names};
use crate::error::{DetectError, Result};

static DEFAULT_DETECTOR: LazyLock<TypeDetector> = LazyLock::new(TypeDetector::default);

/// Shared detector with default options over the built-in catalog.
pub fn default_detector() -> &'static TypeDetector {
    &DEFAULT_DETECTOR
}

/// Classifies cells against a compiled [`PatternCatalog`].
#[derive(Debug, Clone)]
pub struct TypeDetector {
    catalog: Arc<PatternCatalog>,
    options: DetectorOptions,
}

impl Default for TypeDetector {
    fn default() -> Self {
        Self::new(DetectorOptions::default())
    }
}

impl TypeDetector {
    /// Detector over the shared built-in catalog.
    pub fn new(options: DetectorOptions) -> Self {
        Self {
            catalog: PatternCatalog::builtin(),
            options,
        }
    }

    /// Detector over a caller-supplied catalog.
    ///
    /// # Errors
    ///
    /// Returns [`DetectError::MissingPattern`] if the catalog lacks one of the
    /// fixed patterns the predicates use.
    pub fn with_catalog(catalog: Arc<PatternCatalog>, options: DetectorOptions) -> Result<Self> {
        if let Some(name) = names::REQUIRED.iter().find(|name| !catalog.contains(name)) {
            return Err(DetectError::MissingPattern {
                name: (*name).to_string(),
            });
        }
        Ok(Self { catalog, options })
    }

    pub fn options(&self) -> DetectorOptions {
        self.options
    }

    pub fn catalog(&self) -> &PatternCatalog {
        &self.catalog
    }

    fn prepare<'a>(&self, cell: &'a str) -> &'a str {
        if self.options.strip_whitespace {
            cell.trim_matches(' ')
        } else {
            cell
        }
    }

    fn run(&self, name: &str, cell: &str) -> bool {
        self.catalog.full_match(name, self.prepare(cell))
    }

    /// Label of the first predicate (in detection order) that holds, else `Unknown`.
    pub fn detect_type(&self, cell: &str) -> TypeLabel {
        let label = TypeLabel::DETECTION_ORDER
            .into_iter()
            .find(|&label| self.matches(label, cell))
            .unwrap_or(TypeLabel::Unknown);
        trace!(label = %label, len = cell.len(), "classified cell");
        label
    }

    pub fn is_known_type(&self, cell: &str) -> bool {
        self.detect_type(cell).is_known()
    }

    /// Evaluate the single predicate behind `label`.
    ///
    /// For `Unknown` this is true iff no known predicate holds.
    pub fn matches(&self, label: TypeLabel, cell: &str) -> bool {
        match label {
            TypeLabel::Empty => self.is_empty(cell),
            TypeLabel::UrlOrEmail => self.is_url_or_email(cell),
            TypeLabel::Number => self.is_number(cell),
            TypeLabel::Time => self.is_time(cell),
            TypeLabel::Percentage => self.is_percentage(cell),
            TypeLabel::Currency => self.is_currency(cell),
            TypeLabel::Alphanumeric => self.is_unicode_alphanum(cell),
            TypeLabel::NotANumber => self.is_nan(cell),
            TypeLabel::Date => self.is_date(cell),
            TypeLabel::DateTime => self.is_datetime(cell),
            TypeLabel::Unknown => !self.is_known_type(cell),
        }
    }

    pub fn is_empty(&self, cell: &str) -> bool {
        self.prepare(cell).is_empty()
    }

    pub fn is_url_or_email(&self, cell: &str) -> bool {
        self.run(names::URL, cell) || self.run(names::EMAIL, cell)
    }

    /// Plain/scientific, comma-grouped or dot-grouped number.
    pub fn is_number(&self, cell: &str) -> bool {
        if cell.is_empty() {
            return false;
        }
        [
            names::NUMBER_PLAIN,
            names::NUMBER_COMMA_GROUPED,
            names::NUMBER_DOT_GROUPED,
        ]
        .into_iter()
        .any(|name| self.run(name, cell))
    }

    pub fn is_time(&self, cell: &str) -> bool {
        self.run(names::TIME_HMM, cell)
            || self.run(names::TIME_HHMM, cell)
            || self.run(names::TIME_HHMMSS, cell)
    }

    /// A number followed by one or more `%`.
    pub fn is_percentage(&self, cell: &str) -> bool {
        let cell = self.prepare(cell);
        cell.ends_with('%') && self.is_number(cell.trim_end_matches('%'))
    }

    /// A currency symbol, an optional whitespace character, then a number.
    pub fn is_currency(&self, cell: &str) -> bool {
        let cell = self.prepare(cell);
        self.catalog
            .captures(names::CURRENCY, cell)
            .and_then(|caps| caps.get(1))
            .is_some_and(|amount| self.is_number(amount.as_str()))
    }

    pub fn is_unicode_alphanum(&self, cell: &str) -> bool {
        self.run(names::UNICODE_ALPHANUM, cell)
    }

    /// Only `n/a` in any case; `na` and `nan` are alphanumeric tokens.
    pub fn is_nan(&self, cell: &str) -> bool {
        self.prepare(cell).to_lowercase() == "n/a"
    }

    /// Any generated date format, unless the cell is also a number.
    pub fn is_date(&self, cell: &str) -> bool {
        if self.is_number(cell) {
            return false;
        }
        self.catalog.matches_any_date(self.prepare(cell))
    }

    /// `<date> <time>`, `<date>T<time>` or `<date>T<time>(+|-)<offset>`.
    ///
    /// The offset is either a time or four digits `HHMM`. Only the first two
    /// pieces around the offset sign are considered. The cell is split as
    /// given; stripping applies to each piece, so outer spaces add pieces.
    pub fn is_datetime(&self, cell: &str) -> bool {
        if cell.contains(' ') {
            let parts: Vec<&str> = cell.split(' ').collect();
            if parts.len() > 2 {
                return false;
            }
            return self.is_date(parts[0]) && self.is_time(parts[1]);
        }

        if !cell.contains('T') {
            return false;
        }
        let parts: Vec<&str> = cell.split('T').collect();
        if parts.len() > 2 {
            return false;
        }
        let (date, time) = (parts[0], parts[1]);
        if !self.is_date(date) {
            return false;
        }
        if self.is_time(time) {
            return true;
        }

        let sign = if time.contains('+') {
            '+'
        } else if time.contains('-') {
            '-'
        } else {
            return false;
        };
        let mut pieces = time.split(sign);
        let (Some(clock), Some(offset)) = (pieces.next(), pieces.next()) else {
            return false;
        };
        if !self.is_time(clock) {
            return false;
        }
        self.is_time(offset) || self.run(names::TIME_OFFSET, offset)
    }

    /// Absolute or home-relative path with at least two segments.
    ///
    /// Not part of the detection order.
    pub fn is_unix_path(&self, cell: &str) -> bool {
        self.run(names::UNIX_PATH, cell)
    }
}
