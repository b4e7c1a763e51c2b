//! TOML configuration and flag precedence.
//!
//! Values come from three layers: built-in defaults, then an optional
//! `typescore.toml`, then command-line flags.
//!
//! ```toml
//! [detector]
//! strip_whitespace = true
//!
//! [score]
//! eps = 1e-10
//!
//! [dialect]
//! delimiter = ";"
//! quote_char = "\""
//! escape_char = ""
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};
use typescore_model::{Dialect, DetectorOptions, ModelError, ScoreOptions, parse_dialect_char};

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "typescore.toml";

/// Errors raised while loading or resolving configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("delimiter must not be empty")]
    EmptyDelimiter,

    #[error(transparent)]
    Invalid(#[from] ModelError),
}

/// Contents of a config file. Every section and key is optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub detector: DetectorOptions,
    pub score: ScoreOptions,
    pub dialect: DialectSection,
}

/// Raw dialect characters as written in the file.
///
/// Kept as strings so the same spellings work as on the command line
/// (`"tab"`, `"\\t"`, `""` for none).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DialectSection {
    pub delimiter: Option<String>,
    pub quote_char: Option<String>,
    pub escape_char: Option<String>,
}

/// Command-line values that take precedence over the config file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub delimiter: Option<String>,
    pub quote: Option<String>,
    pub escape: Option<String>,
    pub no_strip: bool,
    pub eps: Option<f64>,
}

/// Fully resolved settings for one command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    pub detector: DetectorOptions,
    pub score: ScoreOptions,
    pub dialect: Dialect,
}

impl Config {
    /// Parse config text. `path` is only used in error messages.
    pub fn parse(text: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load a config file that must exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&text, path)?;
        info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Load `explicit` if given, else `typescore.toml` from `dir` if present,
    /// else defaults.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        let candidate = dir.join(DEFAULT_CONFIG_FILE);
        if candidate.is_file() {
            Self::load(&candidate)
        } else {
            debug!(dir = %dir.display(), "no config file found, using defaults");
            Ok(Self::default())
        }
    }

    /// Apply `overrides` on top of this config and validate the result.
    pub fn resolve(&self, overrides: &Overrides) -> Result<Settings, ConfigError> {
        let mut dialect = Dialect::default();

        let delimiter = overrides
            .delimiter
            .as_deref()
            .or(self.dialect.delimiter.as_deref());
        if let Some(raw) = delimiter {
            dialect.delimiter =
                parse_dialect_char("delimiter", raw)?.ok_or(ConfigError::EmptyDelimiter)?;
        }

        let quote = overrides
            .quote
            .as_deref()
            .or(self.dialect.quote_char.as_deref());
        if let Some(raw) = quote {
            dialect.quote_char = parse_dialect_char("quote", raw)?;
        }

        let escape = overrides
            .escape
            .as_deref()
            .or(self.dialect.escape_char.as_deref());
        if let Some(raw) = escape {
            dialect.escape_char = parse_dialect_char("escape", raw)?;
        }

        let detector = if overrides.no_strip {
            self.detector.with_strip_whitespace(false)
        } else {
            self.detector
        };

        let score = match overrides.eps {
            Some(eps) => ScoreOptions::new(eps)?,
            None => {
                self.score.validate()?;
                self.score
            }
        };

        Ok(Settings {
            detector,
            score,
            dialect,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Config {
        Config::parse(text, Path::new("typescore.toml")).unwrap()
    }

    #[test]
    fn empty_file_is_default() {
        assert_eq!(parse(""), Config::default());
        let settings = Config::default().resolve(&Overrides::default()).unwrap();
        assert_eq!(settings.dialect, Dialect::default());
        assert!(settings.detector.strip_whitespace);
        assert_eq!(settings.score, ScoreOptions::default());
    }

    #[test]
    fn file_values_apply() {
        let config = parse(
            r#"
[detector]
strip_whitespace = false

[score]
eps = 0.001

[dialect]
delimiter = "tab"
quote_char = ""
escape_char = "\\"
"#,
        );
        let settings = config.resolve(&Overrides::default()).unwrap();
        assert!(!settings.detector.strip_whitespace);
        assert_eq!(settings.score.eps, 0.001);
        assert_eq!(settings.dialect, Dialect::new('\t', None, Some('\\')));
    }

    #[test]
    fn flags_override_file() {
        let config = parse("[dialect]\ndelimiter = \";\"\n[score]\neps = 0.5\n");
        let overrides = Overrides {
            delimiter: Some("|".to_string()),
            quote: Some("'".to_string()),
            no_strip: true,
            eps: Some(0.25),
            ..Overrides::default()
        };
        let settings = config.resolve(&overrides).unwrap();
        assert_eq!(settings.dialect.delimiter, '|');
        assert_eq!(settings.dialect.quote_char, Some('\''));
        assert!(!settings.detector.strip_whitespace);
        assert_eq!(settings.score.eps, 0.25);
    }

    #[test]
    fn rejects_bad_values() {
        let err = Config::default()
            .resolve(&Overrides {
                delimiter: Some(String::new()),
                ..Overrides::default()
            })
            .unwrap_err();
        assert!(matches!(err, ConfigError::EmptyDelimiter));

        let err = parse("[dialect]\ndelimiter = \";;\"\n")
            .resolve(&Overrides::default())
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid(ModelError::InvalidDialectChar { .. })
        ));

        let err = parse("[score]\neps = 2.0\n")
            .resolve(&Overrides::default())
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(ModelError::InvalidEps { .. })));
    }

    #[test]
    fn rejects_unknown_keys() {
        let result = Config::parse("[dialect]\nseparator = \";\"\n", Path::new("x.toml"));
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }
}
