//! Edit-distance oracles.
//!
//! [`EditDistance`] is the seam through which [`MinimalPairFinder`] measures
//! words. Any `Fn(&str, &str) -> usize` closure implements it, so callers can
//! inject their own metric without writing a type.
//!
//! [`MinimalPairFinder`]: crate::lexicon::minimal_pair::MinimalPairFinder

use crate::util::levenshtein::{
    distance_chars_threshold, levenshtein_distance, levenshtein_distance_threshold,
};

/// A symmetric string distance that is zero iff the strings are equal.
pub trait EditDistance: Send + Sync {
    /// Distance between `a` and `b`.
    fn distance(&self, a: &str, b: &str) -> usize;

    /// Distance between `a` and `b` if it is at most `bound`.
    ///
    /// Implementations may stop early once the bound is exceeded.
    fn distance_within(&self, a: &str, b: &str, bound: usize) -> Option<usize> {
        let distance = self.distance(a, b);
        (distance <= bound).then_some(distance)
    }

    /// [`distance_within`](Self::distance_within) on words already split into chars.
    ///
    /// Callers that compare one word against many pass the split form to
    /// avoid re-splitting. The default rebuilds the strings.
    fn distance_within_chars(&self, a: &[char], b: &[char], bound: usize) -> Option<usize> {
        let a: String = a.iter().collect();
        let b: String = b.iter().collect();
        self.distance_within(&a, &b, bound)
    }

    /// Get the name of this metric (for debugging and logging).
    fn name(&self) -> &'static str {
        "custom"
    }
}

/// Levenshtein distance over Unicode scalar values.
#[derive(Clone, Copy, Debug, Default)]
pub struct Levenshtein;

impl Levenshtein {
    pub fn new() -> Self {
        Levenshtein
    }
}

impl EditDistance for Levenshtein {
    fn distance(&self, a: &str, b: &str) -> usize {
        levenshtein_distance(a, b)
    }

    fn distance_within(&self, a: &str, b: &str, bound: usize) -> Option<usize> {
        levenshtein_distance_threshold(a, b, bound)
    }

    fn distance_within_chars(&self, a: &[char], b: &[char], bound: usize) -> Option<usize> {
        distance_chars_threshold(a, b, bound)
    }

    fn name(&self) -> &'static str {
        "levenshtein"
    }
}

impl<F> EditDistance for F
where
    F: Fn(&str, &str) -> usize + Send + Sync,
{
    fn distance(&self, a: &str, b: &str) -> usize {
        self(a, b)
    }
}
