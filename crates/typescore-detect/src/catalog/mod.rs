//! Pattern catalog: the fixed and generated full-string matchers.
//!
//! The catalog is assembled as an ordered list of [`PatternSource`] values
//! before anything is compiled, then compiled once into an immutable
//! [`PatternCatalog`]. There is no way to add or replace a pattern after
//! compilation.

mod dates;
mod specials;

use std::collections::BTreeMap;
use std::sync::{Arc, LazyLock};

use regex::{Captures, Regex, RegexSet};
use tracing::debug;

use crate::error::{DetectError, Result};

pub use specials::ALLOWED_SPECIALS;

/// Names of the fixed catalog patterns.
pub mod names {
    pub const NUMBER_PLAIN: &str = "number_1";
    pub const NUMBER_COMMA_GROUPED: &str = "number_2";
    pub const NUMBER_DOT_GROUPED: &str = "number_3";
    pub const URL: &str = "url";
    pub const EMAIL: &str = "email";
    pub const UNICODE_ALPHANUM: &str = "unicode_alphanum";
    pub const TIME_HHMMSS: &str = "time_hhmmss";
    pub const TIME_HHMM: &str = "time_hhmm";
    pub const TIME_HMM: &str = "time_hmm";
    pub const TIME_OFFSET: &str = "time_HHMM";
    pub const CURRENCY: &str = "currency";
    pub const UNIX_PATH: &str = "unix_path";

    /// Prefix of every generated date pattern key.
    pub const DATE_PREFIX: &str = "date_";

    /// Fixed patterns the detector relies on.
    pub const REQUIRED: [&str; 11] = [
        NUMBER_PLAIN,
        NUMBER_COMMA_GROUPED,
        NUMBER_DOT_GROUPED,
        URL,
        EMAIL,
        UNICODE_ALPHANUM,
        TIME_HHMMSS,
        TIME_HHMM,
        TIME_HMM,
        TIME_OFFSET,
        CURRENCY,
    ];
}

/// Whether a pattern is one of the fixed matchers or part of the date space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternKind {
    Fixed,
    Date,
}

/// An uncompiled, unanchored pattern with its catalog key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternSource {
    pub name: String,
    pub source: String,
    pub kind: PatternKind,
}

impl PatternSource {
    pub fn fixed(name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
            kind: PatternKind::Fixed,
        }
    }

    pub fn date(name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
            kind: PatternKind::Date,
        }
    }

    /// The source wrapped so that only a full-string match succeeds.
    pub fn anchored(&self) -> String {
        format!("^(?:{})$", self.source)
    }
}

const EXPONENT: &str = r"[eE][+\-]?\d+";
const INTEGER: &str = r"(?:0|[1-9]\d*)";

/// Plain or scientific number with at most one decimal separator.
///
/// The first character must be a sign, a digit, a dot or a comma. After the
/// optional sign and integer part exactly one branch applies: a dot fraction,
/// a comma fraction (at least one digit), or an optional bare exponent.
fn plain_number_source() -> String {
    let dot_tail = format!(r"\.\d*(?:\d+{EXPONENT})?");
    let comma_tail = format!(r",\d+(?:\d+{EXPONENT})?");
    let tail = format!("(?:{dot_tail}|{comma_tail}|(?:{EXPONENT})?)");
    format!(
        "[+\\-]{INTEGER}?{tail}|{INTEGER}{tail}|{dot_tail}|{comma_tail}"
    )
}

fn alphanum_source() -> String {
    let specials = specials::class_body();
    format!(
        r"\p{{N}}+\p{{L}}+[\p{{N}}\p{{L}} {specials}]*|\p{{L}}+[\p{{N}}\p{{L}} {specials}]+"
    )
}

/// Ordered sources of every catalog pattern: fixed matchers first, then the
/// generated date space keyed `date_0`, `date_1`, ...
pub fn pattern_sources() -> Vec<PatternSource> {
    let mut sources = vec![
        PatternSource::fixed(names::NUMBER_PLAIN, plain_number_source()),
        PatternSource::fixed(
            names::NUMBER_COMMA_GROUPED,
            r"[+\-]?(?:[1-9]|[1-9]\d{0,2})(?:,\d{3})+\.\d*",
        ),
        PatternSource::fixed(
            names::NUMBER_DOT_GROUPED,
            r"[+\-]?(?:[1-9]|[1-9]\d{0,2})(?:\.\d{3})+,\d*",
        ),
        PatternSource::fixed(
            names::URL,
            r"(?:(?:[A-Za-z]{3,9}:(?://)?)(?:[\-;:&=+$,\w]+@)?[A-Za-z0-9.\-]+|(?:www.|[\-;:&=+$,\w]+@)[A-Za-z0-9.\-]+)(?:(?:/[+~%/.\w\-_]*)?\??(?:[\-+=&;%@.\w_]*)#?(?:\w*))?",
        ),
        PatternSource::fixed(
            names::EMAIL,
            r"[a-zA-Z0-9_.+\-]+@[a-zA-Z0-9\-]+\.[a-zA-Z0-9\-.]+",
        ),
        PatternSource::fixed(names::UNICODE_ALPHANUM, alphanum_source()),
        PatternSource::fixed(
            names::TIME_HHMMSS,
            r"(?:0[0-9]|1[0-9]|2[0-3]):(?:[0-5][0-9]):(?:[0-5][0-9])",
        ),
        PatternSource::fixed(names::TIME_HHMM, r"(?:0[0-9]|1[0-9]|2[0-3]):(?:[0-5][0-9])"),
        PatternSource::fixed(names::TIME_HMM, r"(?:[0-9]|1[0-9]|2[0-3]):(?:[0-5][0-9])"),
        PatternSource::fixed(names::TIME_OFFSET, r"(?:0[0-9]|1[0-9]|2[0-3])(?:[0-5][0-9])"),
        PatternSource::fixed(names::CURRENCY, r"\p{Sc}\s?(.*)"),
        PatternSource::fixed(
            names::UNIX_PATH,
            r"[/~]{1,2}(?:[a-zA-Z0-9.]+/{1,2})+[a-zA-Z0-9.]+",
        ),
    ];

    sources.extend(
        dates::date_sources()
            .into_iter()
            .enumerate()
            .map(|(idx, source)| PatternSource::date(format!("{}{idx}", names::DATE_PREFIX), source)),
    );

    sources
}

#[derive(Debug)]
struct CompiledPattern {
    name: String,
    kind: PatternKind,
    regex: Regex,
}

/// Immutable set of compiled, anchored matchers.
#[derive(Debug)]
pub struct PatternCatalog {
    patterns: Vec<CompiledPattern>,
    index: BTreeMap<String, usize>,
    dates: RegexSet,
}

static BUILTIN: LazyLock<Arc<PatternCatalog>> = LazyLock::new(|| {
    Arc::new(PatternCatalog::compile().expect("built-in type patterns must compile"))
});

impl PatternCatalog {
    /// Compile the built-in catalog.
    pub fn compile() -> Result<Self> {
        Self::from_sources(pattern_sources())
    }

    /// Process-wide shared built-in catalog, compiled on first use.
    pub fn builtin() -> Arc<PatternCatalog> {
        Arc::clone(&BUILTIN)
    }

    /// Compile an arbitrary ordered list of sources.
    ///
    /// # Errors
    ///
    /// Fails on the first source that does not compile or whose name is
    /// already taken.
    pub fn from_sources(sources: impl IntoIterator<Item = PatternSource>) -> Result<Self> {
        let mut patterns = Vec::new();
        let mut index = BTreeMap::new();
        let mut date_sources = Vec::new();

        for source in sources {
            if index.contains_key(&source.name) {
                return Err(DetectError::DuplicatePattern { name: source.name });
            }
            let anchored = source.anchored();
            let regex = Regex::new(&anchored).map_err(|e| DetectError::InvalidPattern {
                name: source.name.clone(),
                source: e,
            })?;
            if source.kind == PatternKind::Date {
                date_sources.push(anchored);
            }
            index.insert(source.name.clone(), patterns.len());
            patterns.push(CompiledPattern {
                name: source.name,
                kind: source.kind,
                regex,
            });
        }

        let dates = RegexSet::new(&date_sources).map_err(|e| DetectError::InvalidPattern {
            name: "date set".to_string(),
            source: e,
        })?;

        debug!(
            patterns = patterns.len(),
            date_patterns = dates.len(),
            "compiled pattern catalog"
        );

        Ok(Self {
            patterns,
            index,
            dates,
        })
    }

    /// Look up a compiled pattern by name.
    pub fn get(&self, name: &str) -> Option<&Regex> {
        self.index.get(name).map(|&idx| &self.patterns[idx].regex)
    }

    /// Pattern names in catalog order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(|p| p.name.as_str())
    }

    /// Names of the patterns of one kind, in catalog order.
    pub fn names_of(&self, kind: PatternKind) -> impl Iterator<Item = &str> {
        self.patterns
            .iter()
            .filter(move |p| p.kind == kind)
            .map(|p| p.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn date_pattern_count(&self) -> usize {
        self.dates.len()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// True if the named pattern consumes the whole text. Unknown names never match.
    pub fn full_match(&self, name: &str, text: &str) -> bool {
        self.get(name).is_some_and(|regex| regex.is_match(text))
    }

    /// Capture groups of a full-string match of the named pattern.
    pub fn captures<'t>(&self, name: &str, text: &'t str) -> Option<Captures<'t>> {
        self.get(name).and_then(|regex| regex.captures(text))
    }

    /// True if any pattern of the date space consumes the whole text.
    pub fn matches_any_date(&self, text: &str) -> bool {
        self.dates.is_match(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Arc<PatternCatalog> {
        PatternCatalog::builtin()
    }

    #[test]
    fn builtin_contains_required_and_date_patterns() {
        let catalog = catalog();
        for name in names::REQUIRED {
            assert!(catalog.contains(name), "missing {name}");
        }
        assert!(catalog.contains(names::UNIX_PATH));
        assert_eq!(catalog.date_pattern_count(), 46);
        assert_eq!(catalog.names_of(PatternKind::Date).count(), 46);
        assert_eq!(catalog.len(), 12 + 46);
        assert!(catalog.names().all(|n| !n.is_empty()));
    }

    #[test]
    fn date_keys_are_sequential() {
        let catalog = catalog();
        let keys: Vec<&str> = catalog.names_of(PatternKind::Date).collect();
        assert_eq!(keys.first(), Some(&"date_0"));
        assert_eq!(keys.last(), Some(&"date_45"));
    }

    #[test]
    fn patterns_only_match_full_strings() {
        let catalog = catalog();
        assert!(catalog.full_match(names::TIME_HHMM, "12:30"));
        assert!(!catalog.full_match(names::TIME_HHMM, "12:30x"));
        assert!(!catalog.full_match(names::TIME_HHMM, "x12:30"));
        assert!(!catalog.full_match(names::TIME_HHMM, "12:30\n"));
    }

    #[test]
    fn plain_number_language() {
        let catalog = catalog();
        let accepted = [
            "0", "-12", "3.14", "3,14", "1e10", "+3.14e-2", ".5", ",5", "1.", "+", "-e5",
            "1.5e3", "1,55e3",
        ];
        for cell in accepted {
            assert!(catalog.full_match(names::NUMBER_PLAIN, cell), "{cell}");
        }
        let rejected = ["", "01", "00", "e5", ",", "1,", "1,5e3", "1.e3", "1,234,567", "1.2.3"];
        for cell in rejected {
            assert!(!catalog.full_match(names::NUMBER_PLAIN, cell), "{cell}");
        }
    }

    #[test]
    fn grouped_number_languages() {
        let catalog = catalog();
        assert!(catalog.full_match(names::NUMBER_COMMA_GROUPED, "1,234.56"));
        assert!(catalog.full_match(names::NUMBER_COMMA_GROUPED, "-12,345,678."));
        assert!(!catalog.full_match(names::NUMBER_COMMA_GROUPED, "1,234"));
        assert!(!catalog.full_match(names::NUMBER_COMMA_GROUPED, "1234,567.8"));
        assert!(catalog.full_match(names::NUMBER_DOT_GROUPED, "1.234,56"));
        assert!(!catalog.full_match(names::NUMBER_DOT_GROUPED, "1.23,4"));
    }

    #[test]
    fn currency_captures_remainder() {
        let catalog = catalog();
        let caps = catalog.captures(names::CURRENCY, "€ 12,50").unwrap();
        assert_eq!(caps.get(1).map(|m| m.as_str()), Some("12,50"));
        assert!(catalog.captures(names::CURRENCY, "12").is_none());
    }

    #[test]
    fn unix_path_language() {
        let catalog = catalog();
        assert!(catalog.full_match(names::UNIX_PATH, "/usr/local/bin"));
        assert!(catalog.full_match(names::UNIX_PATH, "~/docs/notes.txt"));
        assert!(!catalog.full_match(names::UNIX_PATH, "/usr"));
    }

    #[test]
    fn date_set_matches_generated_formats() {
        let catalog = catalog();
        for cell in [
            "2023-01-31",
            "31/01/2023",
            "1.31.23",
            "2023 1 5",
            "2023年1月5日",
            "2023년01월05일",
            "20230131",
            "310123",
        ] {
            assert!(catalog.matches_any_date(cell), "{cell}");
        }
        for cell in ["2023-13-01", "2023-1-32", "3023-01-01", "2023/01", "202311"] {
            assert!(!catalog.matches_any_date(cell), "{cell}");
        }
    }

    #[test]
    fn rejects_invalid_source() {
        let err = PatternCatalog::from_sources([PatternSource::fixed("broken", "(")]).unwrap_err();
        assert!(matches!(err, DetectError::InvalidPattern { ref name, .. } if name == "broken"));
    }

    #[test]
    fn rejects_duplicate_names() {
        let err = PatternCatalog::from_sources([
            PatternSource::fixed("a", "a"),
            PatternSource::fixed("a", "b"),
        ])
        .unwrap_err();
        assert!(matches!(err, DetectError::DuplicatePattern { .. }));
    }

    #[test]
    fn unknown_name_never_matches() {
        assert!(!catalog().full_match("missing", ""));
    }
}
