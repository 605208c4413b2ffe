//! Serializable engine configuration.
//!
//! Strategy functions cannot be serialized, so a [`Sift4Config`] captures the
//! settings that can: the thresholds, a built-in tokenizer and case
//! sensitivity. [`Sift4Config::build`] turns it into a ready [`Sift4`].
//!
//! ```
//! use sift4::config::Sift4Config;
//!
//! let config = Sift4Config::from_json(r#"{"max_offset": 5, "case_sensitive": false}"#).unwrap();
//! let sift4 = config.build().unwrap();
//! assert_eq!(sift4.distance("Search", "serach"), 1.0);
//! ```

use std::fs;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::distance::Sift4;
use crate::distance::evaluator::{self, case_insensitive_match};
use crate::error::{Result, Sift4Error};
use crate::tokenizer::TokenizerKind;

/// Configuration for a [`Sift4`] engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sift4Config {
    /// Lookahead window used to resynchronize after a mismatch.
    pub max_offset: usize,
    /// Early-exit threshold (0.0 disables it).
    pub max_distance: f64,
    /// Built-in tokenizer to split inputs with.
    pub tokenizer: TokenizerKind,
    /// Whether tokens must match exactly or only up to case.
    pub case_sensitive: bool,
}

impl Default for Sift4Config {
    fn default() -> Self {
        Sift4Config {
            max_offset: evaluator::DEFAULT_MAX_OFFSET,
            max_distance: evaluator::DEFAULT_MAX_DISTANCE,
            tokenizer: TokenizerKind::default(),
            case_sensitive: true,
        }
    }
}

impl Sift4Config {
    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Sift4Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let config = Self::from_json(&content)?;
        debug!("loaded configuration from {}: {config:?}", path.display());
        Ok(config)
    }

    /// Check that the configuration describes a usable engine.
    pub fn validate(&self) -> Result<()> {
        if !self.max_distance.is_finite() || self.max_distance < 0.0 {
            return Err(Sift4Error::invalid_config(format!(
                "max_distance must be a finite, non-negative number, got {}",
                self.max_distance
            )));
        }
        if self.tokenizer == TokenizerKind::Ngrams(0) {
            return Err(Sift4Error::invalid_config("n-gram size must be at least 1"));
        }
        Ok(())
    }

    /// Build an engine from this configuration.
    pub fn build(&self) -> Result<Sift4> {
        self.validate()?;

        let kind = self.tokenizer;
        let sift4 = Sift4::new()
            .max_offset(self.max_offset)
            .max_distance(self.max_distance)
            .tokenizer(move |text| kind.tokenize(text));

        Ok(if self.case_sensitive {
            sift4
        } else {
            sift4.token_matcher(case_insensitive_match)
        })
    }
}
