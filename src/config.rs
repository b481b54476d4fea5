//! Configuration for Lexis components.
//!
//! Defaults that would otherwise be global constants (the nucleus pattern,
//! the stop word list) are carried by [`LexisConfig`] and passed explicitly
//! to the components that need them.
//!
//! # Examples
//!
//! ```
//! use lexis::config::LexisConfig;
//!
//! let config = LexisConfig::from_json_str(r#"{ "nucleus_pattern": "[aeiou]+" }"#).unwrap();
//! assert_eq!(config.nucleus_pattern, "[aeiou]+");
//! assert!(config.lemmatize); // untouched fields keep their defaults
//! ```

use std::fs;
use std::path::Path;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::analysis::token_filter::stop::DEFAULT_ENGLISH_STOP_WORDS;
use crate::error::{LexisError, Result};

/// Nucleus symbols of the CELEX phonetic encoding, plus the `ju` diphthong.
pub const CELEX_NUCLEUS_PATTERN: &str = "[5@694{8312i7u$#eqFEIQVU$]|ju";

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LexisConfig {
    /// Regular expression matching the possible syllable nuclei.
    pub nucleus_pattern: String,

    /// Words removed by the stop filter.
    pub stop_words: Vec<String>,

    /// Whether the preprocessing pipeline lemmatizes tokens.
    pub lemmatize: bool,

    /// Whether the text cleaner removes hyperlinks.
    pub remove_links: bool,
}

impl Default for LexisConfig {
    fn default() -> Self {
        LexisConfig {
            nucleus_pattern: CELEX_NUCLEUS_PATTERN.to_string(),
            stop_words: DEFAULT_ENGLISH_STOP_WORDS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            lemmatize: true,
            remove_links: true,
        }
    }
}

impl LexisConfig {
    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: LexisConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        log::debug!("loading configuration from {}", path.as_ref().display());
        Self::from_json_str(&content)
    }

    /// Serialize the configuration to pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check that the nucleus pattern compiles.
    pub fn validate(&self) -> Result<()> {
        Regex::new(&self.nucleus_pattern).map_err(|e| {
            LexisError::config(format!(
                "invalid nucleus pattern {:?}: {e}",
                self.nucleus_pattern
            ))
        })?;
        Ok(())
    }

    /// Set the nucleus pattern.
    pub fn with_nucleus_pattern<S: Into<String>>(mut self, pattern: S) -> Self {
        self.nucleus_pattern = pattern.into();
        self
    }

    /// Replace the stop word list.
    pub fn with_stop_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stop_words = words.into_iter().map(Into::into).collect();
        self
    }

    /// Enable or disable lemmatization.
    pub fn with_lemmatize(mut self, lemmatize: bool) -> Self {
        self.lemmatize = lemmatize;
        self
    }

    /// Enable or disable hyperlink removal.
    pub fn with_remove_links(mut self, remove_links: bool) -> Self {
        self.remove_links = remove_links;
        self
    }
}
