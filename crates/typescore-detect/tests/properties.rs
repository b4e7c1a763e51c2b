//! Property tests for detector totality and consistency.

use proptest::prelude::*;
use typescore_detect::{TypeDetector, default_detector};
use typescore_model::TypeLabel;

proptest! {
    #[test]
    fn unknown_iff_not_known(cell in any::<String>()) {
        let td = default_detector();
        let label = td.detect_type(&cell);
        prop_assert_eq!(label == TypeLabel::Unknown, !td.is_known_type(&cell));
        prop_assert!(td.matches(label, &cell));
    }

    #[test]
    fn earlier_labels_do_not_match(cell in "[a-zA-Z0-9:.,%$/@ +-]{0,24}") {
        let td = default_detector();
        let label = td.detect_type(&cell);
        for earlier in TypeLabel::DETECTION_ORDER.iter().take_while(|&&l| l != label) {
            prop_assert!(!td.matches(*earlier, &cell), "{} also matched", earlier);
        }
    }

    #[test]
    fn fresh_detectors_agree(cell in any::<String>()) {
        let first = TypeDetector::default().detect_type(&cell);
        let second = TypeDetector::default().detect_type(&cell);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn plain_integers_are_numbers(cell in "-?[1-9][0-9]{0,15}") {
        prop_assert_eq!(default_detector().detect_type(&cell), TypeLabel::Number);
    }

    #[test]
    fn outer_spaces_do_not_change_label(cell in "[a-zA-Z0-9:.,%$/@+-]{0,16}") {
        let td = default_detector();
        let padded = format!("  {cell} ");
        // Datetimes are split before stripping, so padding leaves extra pieces.
        let expected = match td.detect_type(&cell) {
            TypeLabel::DateTime => TypeLabel::Unknown,
            other => other,
        };
        prop_assert_eq!(td.detect_type(&padded), expected);
    }
}
