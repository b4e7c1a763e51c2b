use typescore_model::{DEFAULT_EPS_TYPE, DetectorOptions, Dialect, ScoreOptions, TypeLabel};

#[test]
fn detection_order_matches_label_names() {
    let names: Vec<&str> = TypeLabel::DETECTION_ORDER
        .iter()
        .map(TypeLabel::as_str)
        .collect();
    assert_eq!(
        names,
        vec![
            "empty",
            "url_or_email",
            "number",
            "time",
            "percentage",
            "currency",
            "unicode_alphanum",
            "nan",
            "date",
            "datetime",
        ]
    );
}

#[test]
fn options_serialize_with_field_names() {
    let json = serde_json::to_string(&DetectorOptions::default()).expect("serialize");
    assert_eq!(json, r#"{"strip_whitespace":true}"#);
    let json = serde_json::to_string(&ScoreOptions::default()).expect("serialize");
    assert_eq!(json, r#"{"eps":1e-10}"#);
    assert_eq!(ScoreOptions::default().eps, DEFAULT_EPS_TYPE);
}

#[test]
fn dialect_builders_compose() {
    let dialect = Dialect::default()
        .with_delimiter(';')
        .with_quote_char(Some('\''))
        .with_escape_char(Some('\\'));
    assert_eq!(dialect, Dialect::new(';', Some('\''), Some('\\')));
}
