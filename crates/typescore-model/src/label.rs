//! Type labels assigned to individual cells.
//!
//! Variants are declared in detection order, so the derived `Ord` sorts
//! labels the same way the detector tries them, with `Unknown` last.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Semantic type of a single cell value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TypeLabel {
    /// Empty cell (after optional space stripping).
    #[serde(rename = "empty")]
    Empty,
    /// URL or e-mail address.
    #[serde(rename = "url_or_email")]
    UrlOrEmail,
    /// Plain, scientific or thousands-grouped number.
    #[serde(rename = "number")]
    Number,
    /// Clock time: H:MM, HH:MM or HH:MM:SS.
    #[serde(rename = "time")]
    Time,
    /// Number followed by one or more `%`.
    #[serde(rename = "percentage")]
    Percentage,
    /// Currency symbol followed by a number.
    #[serde(rename = "currency")]
    Currency,
    /// Letter-anchored alphanumeric token.
    #[serde(rename = "unicode_alphanum")]
    Alphanumeric,
    /// The `N/A` marker.
    #[serde(rename = "nan")]
    NotANumber,
    /// Calendar date in one of the generated formats.
    #[serde(rename = "date")]
    Date,
    /// Date and time, space or `T` separated.
    #[serde(rename = "datetime")]
    DateTime,
    /// No known type matched.
    #[serde(rename = "unknown")]
    Unknown,
}

impl TypeLabel {
    /// Known labels in the order the detector evaluates them.
    pub const DETECTION_ORDER: [TypeLabel; 10] = [
        TypeLabel::Empty,
        TypeLabel::UrlOrEmail,
        TypeLabel::Number,
        TypeLabel::Time,
        TypeLabel::Percentage,
        TypeLabel::Currency,
        TypeLabel::Alphanumeric,
        TypeLabel::NotANumber,
        TypeLabel::Date,
        TypeLabel::DateTime,
    ];

    /// Returns the stable name used in reports and serialized output.
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeLabel::Empty => "empty",
            TypeLabel::UrlOrEmail => "url_or_email",
            TypeLabel::Number => "number",
            TypeLabel::Time => "time",
            TypeLabel::Percentage => "percentage",
            TypeLabel::Currency => "currency",
            TypeLabel::Alphanumeric => "unicode_alphanum",
            TypeLabel::NotANumber => "nan",
            TypeLabel::Date => "date",
            TypeLabel::DateTime => "datetime",
            TypeLabel::Unknown => "unknown",
        }
    }

    /// Returns true for every label except `Unknown`.
    pub fn is_known(&self) -> bool {
        !matches!(self, TypeLabel::Unknown)
    }
}

impl fmt::Display for TypeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TypeLabel {
    type Err = ModelError;

    /// Parse a label from its stable name (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        TypeLabel::DETECTION_ORDER
            .iter()
            .chain(std::iter::once(&TypeLabel::Unknown))
            .find(|label| label.as_str() == normalized)
            .copied()
            .ok_or_else(|| ModelError::UnknownLabel {
                value: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip_through_from_str() {
        for label in TypeLabel::DETECTION_ORDER {
            assert_eq!(label.as_str().parse::<TypeLabel>().unwrap(), label);
        }
        assert_eq!("unknown".parse::<TypeLabel>().unwrap(), TypeLabel::Unknown);
        assert_eq!(" DateTime ".parse::<TypeLabel>().unwrap(), TypeLabel::DateTime);
    }

    #[test]
    fn rejects_unrecognized_name() {
        let err = "boolean".parse::<TypeLabel>().unwrap_err();
        assert_eq!(err.to_string(), "unknown type label: boolean");
    }

    #[test]
    fn ordering_follows_detection_order() {
        let mut sorted = TypeLabel::DETECTION_ORDER.to_vec();
        sorted.push(TypeLabel::Unknown);
        sorted.reverse();
        sorted.sort();
        assert_eq!(&sorted[..10], &TypeLabel::DETECTION_ORDER);
        assert_eq!(sorted[10], TypeLabel::Unknown);
    }

    #[test]
    fn serde_uses_stable_names() {
        let json = serde_json::to_string(&TypeLabel::Alphanumeric).unwrap();
        assert_eq!(json, "\"unicode_alphanum\"");
        let back: TypeLabel = serde_json::from_str("\"nan\"").unwrap();
        assert_eq!(back, TypeLabel::NotANumber);
    }

    #[test]
    fn only_unknown_is_not_known() {
        assert!(TypeLabel::DETECTION_ORDER.iter().all(TypeLabel::is_known));
        assert!(!TypeLabel::Unknown.is_known());
    }
}
