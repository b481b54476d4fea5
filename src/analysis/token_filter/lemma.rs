//! Lemmatization token filter.
//!
//! [`RuleLemmatizer`] reduces English nouns to their singular form with an
//! irregular-plural table and suffix rules. Given a vocabulary it behaves
//! like a dictionary lemmatizer: the shortest candidate (the word itself
//! included) that the vocabulary knows wins, and unknown words are returned
//! unchanged. Without a vocabulary, the first suffix rule whose guards pass
//! is applied.
//!
//! # Examples
//!
//! ```
//! use lexis::analysis::token_filter::lemma::{Lemmatizer, RuleLemmatizer};
//!
//! let lemmatizer = RuleLemmatizer::new();
//! assert_eq!(lemmatizer.lemmatize("churches"), "church");
//! assert_eq!(lemmatizer.lemmatize("ponies"), "pony");
//! assert_eq!(lemmatizer.lemmatize("children"), "child");
//! assert_eq!(lemmatizer.lemmatize("glass"), "glass");
//! ```

use std::fmt;
use std::sync::Arc;

use ahash::{AHashMap, AHashSet};

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// Trait for lemmatization algorithms.
pub trait Lemmatizer: Send + Sync {
    /// Reduce a word to its lemma.
    fn lemmatize(&self, word: &str) -> String;

    /// Get the name of this lemmatizer.
    fn name(&self) -> &'static str;
}

const IRREGULAR_PLURALS: &[(&str, &str)] = &[
    ("children", "child"),
    ("feet", "foot"),
    ("geese", "goose"),
    ("lice", "louse"),
    ("mice", "mouse"),
    ("oxen", "ox"),
    ("people", "person"),
    ("teeth", "tooth"),
];

/// Suffix substitutions for English nouns, longest suffix first.
const NOUN_RULES: &[(&str, &str)] = &[
    ("ches", "ch"),
    ("shes", "sh"),
    ("sses", "ss"),
    ("ses", "s"),
    ("ves", "f"),
    ("xes", "x"),
    ("zes", "z"),
    ("ies", "y"),
    ("men", "man"),
    ("s", ""),
];

/// Rules too ambiguous to apply without a vocabulary to confirm them.
const VOCABULARY_ONLY_RULES: &[&str] = &["ses", "ves"];

/// Endings that look plural but usually are not.
const SINGULAR_ENDINGS: &[&str] = &["ss", "us", "is", "ous"];

/// Dictionary-backed or heuristic English noun lemmatizer.
#[derive(Clone, Debug)]
pub struct RuleLemmatizer {
    exceptions: Arc<AHashMap<String, String>>,
    vocabulary: Option<Arc<AHashSet<String>>>,
    min_length: usize,
}

impl RuleLemmatizer {
    /// Create a heuristic lemmatizer with the built-in irregular plurals.
    pub fn new() -> Self {
        RuleLemmatizer {
            exceptions: Arc::new(
                IRREGULAR_PLURALS
                    .iter()
                    .map(|(plural, lemma)| (plural.to_string(), lemma.to_string()))
                    .collect(),
            ),
            vocabulary: None,
            min_length: 4,
        }
    }

    /// Only accept candidates found in `vocabulary`.
    pub fn with_vocabulary<I, S>(mut self, vocabulary: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.vocabulary = Some(Arc::new(vocabulary.into_iter().map(Into::into).collect()));
        self
    }

    /// Add irregular forms on top of the built-in table.
    pub fn with_exceptions<I, S>(mut self, exceptions: I) -> Self
    where
        I: IntoIterator<Item = (S, S)>,
        S: Into<String>,
    {
        let table = Arc::make_mut(&mut self.exceptions);
        for (form, lemma) in exceptions {
            table.insert(form.into(), lemma.into());
        }
        self
    }

    /// Words shorter than this (in chars) are left alone in heuristic mode.
    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }

    fn candidates<'a>(word: &'a str) -> impl Iterator<Item = (&'static str, String)> + 'a {
        NOUN_RULES.iter().filter_map(move |(suffix, replacement)| {
            word.strip_suffix(suffix)
                .filter(|stem| !stem.is_empty())
                .map(|stem| (*suffix, format!("{stem}{replacement}")))
        })
    }

    fn lemmatize_with_vocabulary(word: &str, vocabulary: &AHashSet<String>) -> String {
        std::iter::once(word.to_string())
            .chain(Self::candidates(word).map(|(_, candidate)| candidate))
            .filter(|candidate| vocabulary.contains(candidate))
            .min_by_key(|candidate| candidate.chars().count())
            .unwrap_or_else(|| word.to_string())
    }

    fn lemmatize_heuristic(&self, word: &str) -> String {
        if word.chars().count() < self.min_length
            || SINGULAR_ENDINGS.iter().any(|ending| word.ends_with(ending))
        {
            return word.to_string();
        }

        Self::candidates(word)
            .find(|(suffix, _)| !VOCABULARY_ONLY_RULES.contains(suffix))
            .map(|(_, candidate)| candidate)
            .unwrap_or_else(|| word.to_string())
    }
}

impl Default for RuleLemmatizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Lemmatizer for RuleLemmatizer {
    fn lemmatize(&self, word: &str) -> String {
        if let Some(lemma) = self.exceptions.get(word) {
            return lemma.clone();
        }

        match &self.vocabulary {
            Some(vocabulary) => Self::lemmatize_with_vocabulary(word, vocabulary),
            None => self.lemmatize_heuristic(word),
        }
    }

    fn name(&self) -> &'static str {
        "rule"
    }
}

/// Filter that replaces each token's text with its lemma.
#[derive(Clone)]
pub struct LemmaFilter {
    lemmatizer: Arc<dyn Lemmatizer>,
}

impl fmt::Debug for LemmaFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LemmaFilter")
            .field("lemmatizer", &self.lemmatizer.name())
            .finish()
    }
}

impl LemmaFilter {
    /// Create a lemma filter with the heuristic [`RuleLemmatizer`].
    pub fn new() -> Self {
        Self::with_lemmatizer(Arc::new(RuleLemmatizer::new()))
    }

    pub fn with_lemmatizer(lemmatizer: Arc<dyn Lemmatizer>) -> Self {
        LemmaFilter { lemmatizer }
    }
}

impl Default for LemmaFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for LemmaFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let lemmatizer = Arc::clone(&self.lemmatizer);

        Ok(Box::new(tokens.map(move |token| {
            if token.is_stopped() {
                token
            } else {
                let lemma = lemmatizer.lemmatize(&token.text);
                token.with_text(lemma)
            }
        })))
    }

    fn name(&self) -> &'static str {
        "lemma"
    }
}
