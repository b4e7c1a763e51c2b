//! Table type score: the share of cells with a known type.

use serde::Serialize;
use tracing::debug;
use typescore_detect::{TypeDetector, default_detector};
use typescore_ingest::TableParser;
use typescore_model::Dialect;

use crate::error::Result;
use crate::known::known_types;

/// Known and total cell counts with the resulting score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreReport {
    pub known: usize,
    pub total: usize,
    pub score: f64,
}

impl ScoreReport {
    /// Build a report, flooring the ratio at `eps`.
    ///
    /// A table with no cells scores exactly `eps`.
    pub fn new(known: usize, total: usize, eps: f64) -> Self {
        let score = if total == 0 {
            eps
        } else {
            (known as f64 / total as f64).max(eps)
        };
        Self {
            known,
            total,
            score,
        }
    }

    pub fn unknown(&self) -> usize {
        self.total - self.known
    }
}

/// Count known cells over already parsed rows.
pub fn score_report<R>(detector: &TypeDetector, rows: R, eps: f64) -> ScoreReport
where
    R: IntoIterator,
    R::Item: IntoIterator,
    <R::Item as IntoIterator>::Item: AsRef<str>,
{
    let mut known = 0usize;
    let mut total = 0usize;
    for is_known in known_types(detector, rows.into_iter().flatten()) {
        total += 1;
        known += usize::from(is_known);
    }

    let report = ScoreReport::new(known, total, eps);
    debug!(
        known = report.known,
        total = report.total,
        score = report.score,
        "scored table"
    );
    report
}

/// Type score of already parsed rows.
pub fn score_rows<R>(detector: &TypeDetector, rows: R, eps: f64) -> f64
where
    R: IntoIterator,
    R::Item: IntoIterator,
    <R::Item as IntoIterator>::Item: AsRef<str>,
{
    score_report(detector, rows, eps).score
}

/// Parse `data` with `dialect` and score it using the default detector.
///
/// # Errors
///
/// Returns [`crate::ScoreError::Parse`] if the parser rejects the input. An
/// empty table is not an error: it scores `eps`.
pub fn type_score<P>(parser: &P, data: &str, dialect: &Dialect, eps: f64) -> Result<f64>
where
    P: TableParser + ?Sized,
{
    type_score_with(default_detector(), parser, data, dialect, eps)
}

/// [`type_score`] with an explicit detector.
pub fn type_score_with<P>(
    detector: &TypeDetector,
    parser: &P,
    data: &str,
    dialect: &Dialect,
    eps: f64,
) -> Result<f64>
where
    P: TableParser + ?Sized,
{
    let rows = parser.parse(data, dialect)?;
    Ok(score_rows(detector, &rows, eps))
}
