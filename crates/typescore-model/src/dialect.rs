//! Dialect describing how raw text is segmented into rows and cells.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use crate::error::{ModelError, Result};

/// Delimiter, quote and escape characters for a delimited text table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dialect {
    /// Field separator.
    #[serde(deserialize_with = "required_char")]
    pub delimiter: char,
    /// Quote character, `None` disables quoting.
    #[serde(default, deserialize_with = "optional_char")]
    pub quote_char: Option<char>,
    /// Escape character, `None` means quotes are escaped by doubling.
    #[serde(default, deserialize_with = "optional_char")]
    pub escape_char: Option<char>,
}

impl Default for Dialect {
    fn default() -> Self {
        Self {
            delimiter: ',',
            quote_char: Some('"'),
            escape_char: None,
        }
    }
}

impl Dialect {
    pub fn new(delimiter: char, quote_char: Option<char>, escape_char: Option<char>) -> Self {
        Self {
            delimiter,
            quote_char,
            escape_char,
        }
    }

    #[must_use]
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    #[must_use]
    pub fn with_quote_char(mut self, quote_char: Option<char>) -> Self {
        self.quote_char = quote_char;
        self
    }

    #[must_use]
    pub fn with_escape_char(mut self, escape_char: Option<char>) -> Self {
        self.escape_char = escape_char;
        self
    }

    /// Returns true when every dialect character is ASCII.
    pub fn is_ascii(&self) -> bool {
        self.delimiter.is_ascii()
            && self.quote_char.is_none_or(|c| c.is_ascii())
            && self.escape_char.is_none_or(|c| c.is_ascii())
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "delimiter={:?} quote={} escape={}",
            self.delimiter,
            display_optional(self.quote_char),
            display_optional(self.escape_char)
        )
    }
}

fn display_optional(value: Option<char>) -> String {
    value.map_or_else(|| "none".to_string(), |c| format!("{c:?}"))
}

/// Parse a dialect character from user input.
///
/// Accepts a single character, the escapes `\t`, `tab`, `space`, and the empty
/// string (or `none`) for "no character".
pub fn parse_dialect_char(field: &'static str, raw: &str) -> Result<Option<char>> {
    match raw {
        "" => return Ok(None),
        "\\t" => return Ok(Some('\t')),
        _ => {}
    }
    match raw.to_ascii_lowercase().as_str() {
        "none" => return Ok(None),
        "tab" => return Ok(Some('\t')),
        "space" => return Ok(Some(' ')),
        _ => {}
    }
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(Some(c)),
        _ => Err(ModelError::InvalidDialectChar {
            field,
            value: raw.to_string(),
        }),
    }
}

fn required_char<'de, D>(deserializer: D) -> std::result::Result<char, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_dialect_char("delimiter", &raw)
        .map_err(serde::de::Error::custom)?
        .ok_or_else(|| serde::de::Error::custom("delimiter must not be empty"))
}

fn optional_char<'de, D>(deserializer: D) -> std::result::Result<Option<char>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw {
        None => Ok(None),
        Some(raw) => parse_dialect_char("dialect", &raw).map_err(serde::de::Error::custom),
    }
}
