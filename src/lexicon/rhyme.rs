//! Rhyme detection between syllables.

use crate::config::LexisConfig;
use crate::error::{LexisError, Result};
use crate::lexicon::syllable::{SyllableComponents, SyllableParser};

/// Decides whether two syllables rhyme.
///
/// Syllables rhyme when their nuclei and codas are identical; the onset is
/// ignored. Comparing a syllable without a nucleus is an error rather than a
/// negative answer.
#[derive(Clone, Debug, Default)]
pub struct RhymeComparator {
    parser: SyllableParser,
}

impl RhymeComparator {
    pub fn new(parser: SyllableParser) -> Self {
        RhymeComparator { parser }
    }

    /// Create a comparator with a custom nucleus pattern.
    pub fn with_pattern(pattern: &str) -> Result<Self> {
        Ok(Self::new(SyllableParser::with_pattern(pattern)?))
    }

    pub fn from_config(config: &LexisConfig) -> Result<Self> {
        Ok(Self::new(SyllableParser::from_config(config)?))
    }

    pub fn parser(&self) -> &SyllableParser {
        &self.parser
    }

    /// Whether `s1` and `s2` rhyme.
    ///
    /// Fails with [`LexisError::UndefinedComparison`] if either syllable has
    /// no nucleus.
    pub fn is_rhyme(&self, s1: &str, s2: &str) -> Result<bool> {
        let c1 = self.components(s1)?;
        let c2 = self.components(s2)?;
        Ok(c1.rhymes_with(&c2))
    }

    fn components(&self, syllable: &str) -> Result<SyllableComponents> {
        self.parser
            .parse(syllable)
            .ok_or_else(|| LexisError::undefined_comparison(syllable))
    }
}

/// Rhyme check with a pattern compiled for this call.
pub fn is_rhyme(s1: &str, s2: &str, nucleus_pattern: &str) -> Result<bool> {
    RhymeComparator::with_pattern(nucleus_pattern)?.is_rhyme(s1, s2)
}
