//! Configured scorer bundling a detector with score options.

use tracing::info_span;
use typescore_detect::TypeDetector;
use typescore_ingest::TableParser;
use typescore_model::{Dialect, DetectorOptions, ScoreOptions};

use crate::error::Result;
use crate::profile::{TableProfile, profile_rows};
use crate::score::{ScoreReport, score_report};

/// Detector plus validated [`ScoreOptions`].
#[derive(Debug, Clone, Default)]
pub struct TypeScorer {
    detector: TypeDetector,
    options: ScoreOptions,
}

impl TypeScorer {
    /// # Errors
    ///
    /// Returns [`crate::ScoreError::Options`] if `options.eps` is out of range.
    pub fn new(detector: TypeDetector, options: ScoreOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self { detector, options })
    }

    /// Scorer over the built-in catalog.
    pub fn from_options(detector: DetectorOptions, options: ScoreOptions) -> Result<Self> {
        Self::new(TypeDetector::new(detector), options)
    }

    pub fn detector(&self) -> &TypeDetector {
        &self.detector
    }

    pub fn options(&self) -> ScoreOptions {
        self.options
    }

    /// Parse and score raw text.
    pub fn score_text<P>(&self, parser: &P, data: &str, dialect: &Dialect) -> Result<ScoreReport>
    where
        P: TableParser + ?Sized,
    {
        let span = info_span!("score_text", dialect = %dialect, bytes = data.len());
        let _guard = span.enter();
        let rows = parser.parse(data, dialect)?;
        Ok(self.score_rows(&rows))
    }

    pub fn score_rows<R>(&self, rows: R) -> ScoreReport
    where
        R: IntoIterator,
        R::Item: IntoIterator,
        <R::Item as IntoIterator>::Item: AsRef<str>,
    {
        score_report(&self.detector, rows, self.options.eps)
    }

    pub fn profile<R>(&self, rows: R) -> TableProfile
    where
        R: IntoIterator,
        R::Item: IntoIterator,
        <R::Item as IntoIterator>::Item: AsRef<str>,
    {
        profile_rows(&self.detector, rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScoreError;
    use typescore_ingest::CsvTableParser;

    #[test]
    fn rejects_invalid_eps() {
        for eps in [0.0, -1.0, 1.5, f64::NAN] {
            let result = TypeScorer::new(TypeDetector::default(), ScoreOptions { eps });
            assert!(matches!(result, Err(ScoreError::Options(_))));
        }
    }

    #[test]
    fn scores_text_with_options() {
        let scorer = TypeScorer::from_options(
            DetectorOptions::default().with_strip_whitespace(false),
            ScoreOptions::new(0.25).unwrap(),
        )
        .unwrap();
        let report = scorer
            .score_text(&CsvTableParser::new(), " 1 ,#\n", &Dialect::default())
            .unwrap();
        assert_eq!(report.total, 2);
        assert_eq!(report.known, 0);
        assert_eq!(report.score, 0.25);
    }

    #[test]
    fn profile_uses_configured_detector() {
        let scorer = TypeScorer::default();
        let profile = scorer.profile(vec![vec![" 7 "]]);
        assert_eq!(profile.columns[0].dominant(), Some(typescore_model::TypeLabel::Number));
    }
}
