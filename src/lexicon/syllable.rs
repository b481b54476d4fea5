//! Syllable decomposition into onset, nucleus and coda.
//!
//! The nucleus is the leftmost non-empty match of a configurable regular
//! expression. Everything before the match is the onset and everything after
//! it is the coda, so the three parts always concatenate back to the input.
//!
//! # Examples
//!
//! ```
//! use lexis::lexicon::syllable::SyllableParser;
//!
//! let parser = SyllableParser::with_pattern("[aeiou]").unwrap();
//! let parts = parser.parse("kat").unwrap();
//!
//! assert_eq!(parts.onset, "k");
//! assert_eq!(parts.nucleus, "a");
//! assert_eq!(parts.coda, "t");
//! assert!(parser.parse("xyz").is_none());
//! ```

use std::fmt;
use std::sync::Arc;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::config::{CELEX_NUCLEUS_PATTERN, LexisConfig};
use crate::error::Result;

/// The three constituents of a syllable.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SyllableComponents {
    /// Segments before the nucleus; may be empty.
    pub onset: String,
    /// The matched nucleus; never empty.
    pub nucleus: String,
    /// Segments after the nucleus; may be empty.
    pub coda: String,
}

impl SyllableComponents {
    /// Nucleus followed by coda.
    pub fn rhyme(&self) -> String {
        format!("{}{}", self.nucleus, self.coda)
    }

    /// Whether the two syllables share nucleus and coda.
    pub fn rhymes_with(&self, other: &SyllableComponents) -> bool {
        self.nucleus == other.nucleus && self.coda == other.coda
    }
}

impl fmt::Display for SyllableComponents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.onset, self.nucleus, self.coda)
    }
}

/// Splits syllables around the first nucleus match.
#[derive(Clone, Debug)]
pub struct SyllableParser {
    nucleus: Arc<Regex>,
}

impl SyllableParser {
    /// Create a parser for the CELEX nucleus inventory.
    pub fn new() -> Result<Self> {
        Self::with_pattern(CELEX_NUCLEUS_PATTERN)
    }

    /// Create a parser with a custom nucleus pattern.
    pub fn with_pattern(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)?;
        Ok(SyllableParser {
            nucleus: Arc::new(regex),
        })
    }

    /// Create a parser from the configured nucleus pattern.
    pub fn from_config(config: &LexisConfig) -> Result<Self> {
        Self::with_pattern(&config.nucleus_pattern)
    }

    /// Get the nucleus pattern.
    pub fn pattern(&self) -> &str {
        self.nucleus.as_str()
    }

    /// Split `syllable` into onset, nucleus and coda.
    ///
    /// Returns `None` when the pattern has no non-empty match, i.e. the input
    /// has no nucleus. If the nucleus text occurs again later in the
    /// syllable, only the leftmost occurrence is used.
    pub fn parse(&self, syllable: &str) -> Option<SyllableComponents> {
        let m = self.nucleus.find_iter(syllable).find(|m| !m.is_empty())?;

        Some(SyllableComponents {
            onset: syllable[..m.start()].to_string(),
            nucleus: m.as_str().to_string(),
            coda: syllable[m.end()..].to_string(),
        })
    }
}

impl Default for SyllableParser {
    fn default() -> Self {
        Self::new().expect("CELEX nucleus pattern should be valid")
    }
}

/// Parse one syllable with a pattern compiled for this call.
pub fn parse_syllable(syllable: &str, nucleus_pattern: &str) -> Result<Option<SyllableComponents>> {
    Ok(SyllableParser::with_pattern(nucleus_pattern)?.parse(syllable))
}
