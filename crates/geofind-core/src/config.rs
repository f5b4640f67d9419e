// crates/geofind-core/src/config.rs

//! # Engine Configuration
//!
//! Tunables of the search engine. All structs deserialize with
//! `#[serde(default)]`, so a config file only needs the keys it changes:
//!
//! ```json
//! { "fuzzy": { "threshold": 0.25 }, "max_suggestions": 5 }
//! ```

use crate::error::{FindError, Result};
use crate::model::SearchField;
use serde::{Deserialize, Serialize};

pub const DEFAULT_FUZZY_THRESHOLD: f64 = 0.3;
pub const DEFAULT_MAX_CANDIDATES: usize = 100;
pub const DEFAULT_MAX_RESULTS: usize = 50;
pub const DEFAULT_MAX_SUGGESTIONS: usize = 10;

/// Relative importance of each fuzzy-indexed field, in `(0, 1]`.
///
/// `code` is deliberately absent: codes are matched exactly or by substring.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldWeights {
    pub name: f64,
    pub alt_name: f64,
    pub country: f64,
    pub country_code: f64,
}

impl Default for FieldWeights {
    fn default() -> Self {
        Self {
            name: 1.0,
            alt_name: 0.8,
            country: 0.6,
            country_code: 0.4,
        }
    }
}

impl FieldWeights {
    /// Weight for `field`, `None` if the field is not fuzzy-indexed.
    pub fn weight(&self, field: SearchField) -> Option<f64> {
        match field {
            SearchField::Name => Some(self.name),
            SearchField::AltName => Some(self.alt_name),
            SearchField::Country => Some(self.country),
            SearchField::CountryCode => Some(self.country_code),
            SearchField::Code => None,
        }
    }

    fn validate(&self) -> Result<()> {
        for (key, w) in [
            ("name", self.name),
            ("alt_name", self.alt_name),
            ("country", self.country),
            ("country_code", self.country_code),
        ] {
            if !(w > 0.0 && w <= 1.0) {
                return Err(FindError::InvalidOption(format!(
                    "fuzzy weight `{key}` must be in (0, 1], got {w}"
                )));
            }
        }
        Ok(())
    }
}

/// Options of the fuzzy matcher.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FuzzyOptions {
    /// Highest accepted score; `0` only accepts perfect matches.
    pub threshold: f64,
    /// Candidates kept after ranking and before threshold filtering.
    pub max_candidates: usize,
    pub weights: FieldWeights,
}

impl Default for FuzzyOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_FUZZY_THRESHOLD,
            max_candidates: DEFAULT_MAX_CANDIDATES,
            weights: FieldWeights::default(),
        }
    }
}

impl FuzzyOptions {
    /// Same options with a different threshold (validated).
    pub fn with_threshold(mut self, threshold: f64) -> Result<Self> {
        validate_threshold(threshold)?;
        self.threshold = threshold;
        Ok(self)
    }
}

/// Top-level engine configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub fuzzy: FuzzyOptions,
    /// Default cap of [`multi_search`](crate::search::SearchEngine::multi_search).
    pub max_results: usize,
    pub max_suggestions: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            fuzzy: FuzzyOptions::default(),
            max_results: DEFAULT_MAX_RESULTS,
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
        }
    }
}

impl EngineConfig {
    /// Reject values the engine cannot honour.
    pub fn validate(&self) -> Result<()> {
        validate_threshold(self.fuzzy.threshold)?;
        if self.fuzzy.max_candidates == 0 {
            return Err(FindError::InvalidOption(
                "fuzzy.max_candidates must be at least 1".into(),
            ));
        }
        self.fuzzy.weights.validate()
    }

    /// Load and validate a JSON config file.
    #[cfg(feature = "json")]
    pub fn from_json_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            FindError::NotFound(format!("Config not found at {}: {}", path.display(), e))
        })?;
        let config: EngineConfig = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }
}

pub(crate) fn validate_threshold(threshold: f64) -> Result<()> {
    if (0.0..=1.0).contains(&threshold) {
        Ok(())
    } else {
        Err(FindError::InvalidOption(format!(
            "threshold must be within [0, 1], got {threshold}"
        )))
    }
}
