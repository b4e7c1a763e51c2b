//! Per-column type profiles.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;
use typescore_detect::TypeDetector;
use typescore_model::TypeLabel;

/// Label counts for one column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnProfile {
    /// Zero-based column position.
    pub index: usize,
    /// Cells per detected label.
    pub counts: BTreeMap<TypeLabel, usize>,
    /// Cells present in this column (short rows contribute nothing).
    pub total: usize,
    /// Cells with a known label.
    pub known: usize,
}

impl ColumnProfile {
    fn new(index: usize) -> Self {
        Self {
            index,
            counts: BTreeMap::new(),
            total: 0,
            known: 0,
        }
    }

    fn record(&mut self, label: TypeLabel) {
        *self.counts.entry(label).or_insert(0) += 1;
        self.total += 1;
        if label.is_known() {
            self.known += 1;
        }
    }

    /// Most frequent label; ties go to the label earlier in detection order.
    pub fn dominant(&self) -> Option<TypeLabel> {
        self.counts
            .iter()
            .max_by(|a, b| a.1.cmp(b.1).then_with(|| b.0.cmp(a.0)))
            .map(|(label, _)| *label)
    }

    /// Share of known cells, `0.0` for an empty column.
    pub fn known_ratio(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.known as f64 / self.total as f64
        }
    }

    pub fn count(&self, label: TypeLabel) -> usize {
        self.counts.get(&label).copied().unwrap_or(0)
    }
}

/// Column profiles for a whole table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TableProfile {
    pub rows: usize,
    pub columns: Vec<ColumnProfile>,
}

impl TableProfile {
    pub fn total(&self) -> usize {
        self.columns.iter().map(|c| c.total).sum()
    }

    pub fn known(&self) -> usize {
        self.columns.iter().map(|c| c.known).sum()
    }

    pub fn column(&self, index: usize) -> Option<&ColumnProfile> {
        self.columns.get(index)
    }
}

/// Detect every cell and tally labels per column.
pub fn profile_rows<R>(detector: &TypeDetector, rows: R) -> TableProfile
where
    R: IntoIterator,
    R::Item: IntoIterator,
    <R::Item as IntoIterator>::Item: AsRef<str>,
{
    let mut profile = TableProfile::default();
    for row in rows {
        profile.rows += 1;
        for (index, cell) in row.into_iter().enumerate() {
            if index >= profile.columns.len() {
                let start = profile.columns.len();
                profile.columns.extend((start..=index).map(ColumnProfile::new));
            }
            profile.columns[index].record(detector.detect_type(cell.as_ref()));
        }
    }
    debug!(
        rows = profile.rows,
        columns = profile.columns.len(),
        "profiled table"
    );
    profile
}

#[cfg(test)]
mod tests {
    use super::*;
    use typescore_detect::default_detector;

    #[test]
    fn tallies_labels_per_column() {
        let rows = vec![
            vec!["1", "2023-01-01", "$5"],
            vec!["2", "2023-01-02", "#$%"],
            vec!["", "n/a"],
        ];
        let profile = profile_rows(default_detector(), &rows);
        assert_eq!(profile.rows, 3);
        assert_eq!(profile.columns.len(), 3);

        let first = &profile.columns[0];
        assert_eq!(first.count(TypeLabel::Number), 2);
        assert_eq!(first.count(TypeLabel::Empty), 1);
        assert_eq!(first.dominant(), Some(TypeLabel::Number));

        let second = &profile.columns[1];
        assert_eq!(second.dominant(), Some(TypeLabel::Date));
        assert_eq!(second.count(TypeLabel::NotANumber), 1);

        let third = &profile.columns[2];
        assert_eq!(third.total, 2);
        assert_eq!(third.known, 1);
        assert_eq!(third.known_ratio(), 0.5);
        assert_eq!(profile.total(), 8);
        assert_eq!(profile.known(), 7);
    }

    #[test]
    fn ties_follow_detection_order() {
        let rows = vec![vec!["12:30"], vec!["42"]];
        let profile = profile_rows(default_detector(), &rows);
        assert_eq!(profile.columns[0].dominant(), Some(TypeLabel::Number));
    }

    #[test]
    fn ties_prefer_known_over_unknown() {
        let rows = vec![vec!["#$%"], vec!["abc"]];
        let profile = profile_rows(default_detector(), &rows);
        assert_eq!(profile.columns[0].dominant(), Some(TypeLabel::Alphanumeric));
    }

    #[test]
    fn empty_table_has_no_columns() {
        let rows: Vec<Vec<String>> = Vec::new();
        let profile = profile_rows(default_detector(), &rows);
        assert_eq!(profile, TableProfile::default());
    }

    #[test]
    fn sparse_first_row_still_creates_columns() {
        let rows = vec![vec!["a1"], vec!["b2", "c3", "d4"]];
        let profile = profile_rows(default_detector(), &rows);
        assert_eq!(profile.columns.len(), 3);
        assert_eq!(profile.columns[2].index, 2);
        assert_eq!(profile.columns[0].total, 2);
        assert_eq!(profile.columns[1].known_ratio(), 1.0);
        assert_eq!(ColumnProfile::new(7).dominant(), None);
        assert_eq!(ColumnProfile::new(7).known_ratio(), 0.0);
    }
}
