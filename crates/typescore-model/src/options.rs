//! Configuration options for detection and scoring.

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Default floor for the type score.
pub const DEFAULT_EPS_TYPE: f64 = 1e-10;

/// Options for the type detector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorOptions {
    /// Strip ASCII spaces (U+0020 only) from both ends of a cell before matching.
    pub strip_whitespace: bool,
}

impl Default for DetectorOptions {
    fn default() -> Self {
        Self {
            strip_whitespace: true,
        }
    }
}

impl DetectorOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_strip_whitespace(mut self, enable: bool) -> Self {
        self.strip_whitespace = enable;
        self
    }
}

/// Options for the table scorer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreOptions {
    /// Minimum score returned, also the score of a table with no cells.
    pub eps: f64,
}

impl Default for ScoreOptions {
    fn default() -> Self {
        Self {
            eps: DEFAULT_EPS_TYPE,
        }
    }
}

impl ScoreOptions {
    /// Create options with a validated floor.
    pub fn new(eps: f64) -> Result<Self> {
        let options = Self { eps };
        options.validate()?;
        Ok(options)
    }

    /// Check that `eps` is finite and in (0, 1].
    pub fn validate(&self) -> Result<()> {
        if self.eps.is_finite() && self.eps > 0.0 && self.eps <= 1.0 {
            Ok(())
        } else {
            Err(ModelError::InvalidEps { value: self.eps })
        }
    }
}
