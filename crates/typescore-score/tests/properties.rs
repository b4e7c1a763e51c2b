use proptest::prelude::*;
use typescore_detect::default_detector;
use typescore_score::{profile_rows, score_report};

fn table() -> impl Strategy<Value = Vec<Vec<String>>> {
    prop::collection::vec(prop::collection::vec(".{0,12}", 0..6), 0..8)
}

proptest! {
    #[test]
    fn score_stays_within_bounds(rows in table(), eps in 1e-12f64..0.5) {
        let report = score_report(default_detector(), &rows, eps);
        prop_assert!(report.score >= eps);
        prop_assert!(report.score <= 1.0);
        prop_assert!(report.known <= report.total);
        prop_assert_eq!(report.total, rows.iter().map(Vec::len).sum::<usize>());
    }

    #[test]
    fn score_ignores_row_order(rows in table()) {
        let mut reversed = rows.clone();
        reversed.reverse();
        let forward = score_report(default_detector(), &rows, 1e-10);
        let backward = score_report(default_detector(), &reversed, 1e-10);
        prop_assert_eq!(forward, backward);
    }

    #[test]
    fn profile_agrees_with_report(rows in table()) {
        let report = score_report(default_detector(), &rows, 1e-10);
        let profile = profile_rows(default_detector(), &rows);
        prop_assert_eq!(profile.total(), report.total);
        prop_assert_eq!(profile.known(), report.known);
        prop_assert_eq!(profile.rows, rows.len());
    }
}
