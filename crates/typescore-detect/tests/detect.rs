//! Behavior of the detector on the documented examples.

use typescore_detect::{TypeDetector, default_detector};
use typescore_model::{DetectorOptions, TypeLabel};

#[test]
fn numbers_in_all_three_forms() {
    let td = default_detector();
    assert!(!td.is_number(""));
    for cell in ["0", "-12", "3.14", "1e10", "1,234.56", "1.234,56"] {
        assert!(td.is_number(cell), "{cell}");
    }
}

#[test]
fn compact_date_is_reported_as_number() {
    let td = default_detector();
    assert!(td.is_number("19990101"));
    assert!(!td.is_date("19990101"));
    assert_eq!(td.detect_type("19990101"), TypeLabel::Number);
}

#[test]
fn time_hour_range() {
    let td = default_detector();
    assert!(td.is_time("23:59:59"));
    assert!(!td.is_time("24:00:00"));
}

#[test]
fn percentage_and_currency() {
    let td = default_detector();
    assert!(td.is_percentage("45.5%"));
    assert!(!td.is_percentage("abc%"));
    assert!(td.is_currency("$12.50"));
    assert!(!td.is_currency("$"));
    assert_eq!(td.detect_type("$12.50"), TypeLabel::Currency);
}

#[test]
fn datetime_forms() {
    let td = default_detector();
    assert!(td.is_datetime("2023-01-01 12:30:00"));
    assert!(td.is_datetime("2023-01-01T12:30:00+02:00"));
    assert!(td.is_datetime("2023-01-01T12:30:00+0200"));
    assert_eq!(
        td.detect_type("2023-01-01T12:30:00+02:00"),
        TypeLabel::DateTime
    );
}

#[test]
fn not_a_number_spellings() {
    let td = default_detector();
    assert_eq!(td.detect_type("N/A"), TypeLabel::NotANumber);
    assert_eq!(td.detect_type("NaN"), TypeLabel::Alphanumeric);
    assert_eq!(td.detect_type("na"), TypeLabel::Alphanumeric);
}

#[test]
fn strip_flag_changes_padded_cells() {
    let strip = TypeDetector::default();
    let keep = TypeDetector::new(DetectorOptions::new().with_strip_whitespace(false));
    assert_eq!(strip.detect_type("  "), TypeLabel::Empty);
    assert_eq!(keep.detect_type("  "), TypeLabel::Unknown);
    assert_eq!(strip.detect_type(" 7 "), TypeLabel::Number);
    assert_eq!(keep.detect_type(" 7 "), TypeLabel::Unknown);
}

#[test]
fn realistic_column_values() {
    let td = default_detector();
    let cases = [
        ("info@example.com", TypeLabel::UrlOrEmail),
        ("http://example.com/api/v1?page=2", TypeLabel::UrlOrEmail),
        ("0.001", TypeLabel::Number),
        ("7:45", TypeLabel::Time),
        ("-3.5%", TypeLabel::Percentage),
        ("€1.299,00", TypeLabel::Currency),
        ("Amsterdam", TypeLabel::Alphanumeric),
        ("12th Street", TypeLabel::Alphanumeric),
        ("n/A", TypeLabel::NotANumber),
        ("5/12/2021", TypeLabel::Date),
        ("21.3.5", TypeLabel::Date),
        ("2021-03-05 18:00", TypeLabel::DateTime),
        ("a", TypeLabel::Unknown),
        ("foo-bar", TypeLabel::Unknown),
        ("{\"a\": 1}", TypeLabel::Unknown),
    ];
    for (cell, expected) in cases {
        assert_eq!(td.detect_type(cell), expected, "{cell:?}");
    }
}
