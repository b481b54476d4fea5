//! Hyperlink removal char filter.
//!
//! Removes runs starting with `http`, `ftp` or `www.`, and any
//! non-whitespace run ending in one of the configured domain endings
//! (`.com`, `.org`, `.edu`, `.net`, `.gov`, `.eu`, `.us` by default).
//! Surrounding whitespace is kept.

use std::sync::LazyLock;

use regex::Regex;

use super::CharFilter;
use crate::error::Result;

/// Domain endings removed by default.
pub const DEFAULT_DOMAIN_ENDINGS: &[&str] = &["com", "org", "edu", "net", "gov", "eu", "us"];

static DEFAULT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&link_pattern(DEFAULT_DOMAIN_ENDINGS)).expect("link pattern should be valid")
});

fn link_pattern<S: AsRef<str>>(endings: &[S]) -> String {
    let mut pattern = String::from(r"http\S+|ftp\S+|www\.\S+");
    for ending in endings {
        pattern.push_str(r"|\S+\.");
        pattern.push_str(&regex::escape(ending.as_ref()));
    }
    pattern
}

/// A char filter that removes hyperlinks.
#[derive(Clone, Debug)]
pub struct HyperlinkCharFilter {
    pattern: Regex,
}

impl HyperlinkCharFilter {
    /// Create a filter for the default domain endings.
    pub fn new() -> Self {
        HyperlinkCharFilter {
            pattern: DEFAULT_PATTERN.clone(),
        }
    }

    /// Create a filter for custom domain endings (without the leading dot).
    pub fn with_endings<S: AsRef<str>>(endings: &[S]) -> Result<Self> {
        Ok(HyperlinkCharFilter {
            pattern: Regex::new(&link_pattern(endings))?,
        })
    }
}

impl Default for HyperlinkCharFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl CharFilter for HyperlinkCharFilter {
    fn filter(&self, input: &str) -> String {
        self.pattern.replace_all(input, "").into_owned()
    }

    fn name(&self) -> &'static str {
        "hyperlink"
    }
}
