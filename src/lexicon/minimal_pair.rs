//! Minimal pair and minimal set discovery.
//!
//! Two words form a minimal pair at position `index` when they have the same
//! length, their edit distance is exactly one, and the single differing
//! character sits at `index` in both. Lengths and positions count `char`s.
//!
//! # Examples
//!
//! ```
//! use lexis::lexicon::minimal_pair::MinimalPairFinder;
//!
//! let finder = MinimalPairFinder::new();
//! let pairs = finder.find_pairs(&["cat", "bat", "cot"], 0);
//!
//! assert_eq!(pairs.len(), 1);
//! assert_eq!(pairs[0].as_tuple(), ("cat", "bat"));
//! ```

use std::collections::BTreeSet;

use ahash::AHashSet;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::lexicon::edit_distance::{EditDistance, Levenshtein};
use crate::util::pairs::{PairIndices, par_pair_indices};

/// Two words that differ by exactly one character at a fixed position.
///
/// `first` precedes `second` in the input word list.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MinimalPair {
    pub first: String,
    pub second: String,
}

impl MinimalPair {
    pub fn new<S: Into<String>>(first: S, second: S) -> Self {
        MinimalPair {
            first: first.into(),
            second: second.into(),
        }
    }

    /// Borrow the pair as a tuple.
    pub fn as_tuple(&self) -> (&str, &str) {
        (&self.first, &self.second)
    }

    /// Whether `word` is one side of this pair.
    pub fn contains(&self, word: &str) -> bool {
        self.first == word || self.second == word
    }
}

/// An anchor word together with every partner greedily attached to it.
///
/// Members are kept sorted and include the anchor itself.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinimalSet {
    anchor: String,
    words: BTreeSet<String>,
}

impl MinimalSet {
    /// The word whose scan produced this set.
    pub fn anchor(&self) -> &str {
        &self.anchor
    }

    /// All members, anchor included.
    pub fn words(&self) -> &BTreeSet<String> {
        &self.words
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl IntoIterator for MinimalSet {
    type Item = String;
    type IntoIter = std::collections::btree_set::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.into_iter()
    }
}

/// Finds minimal pairs and minimal sets in a word list.
///
/// The distance oracle defaults to [`Levenshtein`]; any [`EditDistance`]
/// can be supplied with [`MinimalPairFinder::with_distance`].
#[derive(Clone, Debug, Default)]
pub struct MinimalPairFinder<D = Levenshtein> {
    distance: D,
}

impl MinimalPairFinder<Levenshtein> {
    /// Create a finder using Levenshtein distance.
    pub fn new() -> Self {
        MinimalPairFinder {
            distance: Levenshtein,
        }
    }
}

impl<D: EditDistance> MinimalPairFinder<D> {
    /// Create a finder with a custom distance oracle.
    pub fn with_distance(distance: D) -> Self {
        MinimalPairFinder { distance }
    }

    /// Get the distance oracle.
    pub fn distance(&self) -> &D {
        &self.distance
    }

    /// Whether `w1` and `w2` form a minimal pair at `index`.
    pub fn is_minimal_pair(&self, w1: &str, w2: &str, index: usize) -> bool {
        let c1: Vec<char> = w1.chars().collect();
        let c2: Vec<char> = w2.chars().collect();
        self.qualifies(&c1, &c2, index)
    }

    fn qualifies(&self, c1: &[char], c2: &[char], index: usize) -> bool {
        c1.len() > index
            && c2.len() > index
            && c1.len() == c2.len()
            && c1[index] != c2[index]
            && self.distance.distance_within_chars(c1, c2, 1) == Some(1)
    }

    /// Every minimal pair at `index`, in combinatorial order of the input.
    ///
    /// Duplicate input words are evaluated independently, so a repeated word
    /// can contribute repeated pairs.
    pub fn find_pairs<S: AsRef<str>>(&self, words: &[S], index: usize) -> Vec<MinimalPair> {
        let chars = split_chars(words);

        let pairs: Vec<MinimalPair> = PairIndices::new(words.len())
            .filter_map(|(i, j)| self.pair_at(words, &chars, i, j, index))
            .collect();

        log::debug!(
            "found {} minimal pairs at index {} among {} words",
            pairs.len(),
            index,
            words.len()
        );
        pairs
    }

    /// Same result as [`find_pairs`](Self::find_pairs), evaluated in parallel.
    pub fn par_find_pairs<S>(&self, words: &[S], index: usize) -> Vec<MinimalPair>
    where
        S: AsRef<str> + Sync,
    {
        let chars = split_chars(words);

        let pairs: Vec<MinimalPair> = par_pair_indices(words.len())
            .filter_map(|(i, j)| self.pair_at(words, &chars, i, j, index))
            .collect();

        log::debug!(
            "found {} minimal pairs at index {} among {} words (parallel)",
            pairs.len(),
            index,
            words.len()
        );
        pairs
    }

    fn pair_at<S: AsRef<str>>(
        &self,
        words: &[S],
        chars: &[Vec<char>],
        i: usize,
        j: usize,
        index: usize,
    ) -> Option<MinimalPair> {
        let (w1, w2) = (words[i].as_ref(), words[j].as_ref());
        if self.qualifies(&chars[i], &chars[j], index) {
            log::trace!("minimal pair ({w1}, {w2}) at index {index}");
            Some(MinimalPair::new(w1, w2))
        } else {
            None
        }
    }

    /// Greedy minimal sets at `index`.
    ///
    /// Each word, in input order, that has not yet been claimed becomes an
    /// anchor and scans the words after it. Unclaimed partners join the
    /// anchor's set and are claimed. A set is emitted only if it found at
    /// least one partner, and its anchor is claimed as well. A word is
    /// therefore never a member of two sets, and the result depends on input
    /// order: it is not the connected components of the minimal-pair graph.
    pub fn find_sets<S: AsRef<str>>(&self, words: &[S], index: usize) -> Vec<MinimalSet> {
        let chars = split_chars(words);
        let mut seen: AHashSet<&str> = AHashSet::new();
        let mut sets = Vec::new();

        for (n1, w1) in words.iter().enumerate() {
            let w1 = w1.as_ref();
            if seen.contains(w1) {
                continue;
            }

            let mut members = BTreeSet::new();
            for (n2, w2) in words.iter().enumerate().skip(n1 + 1) {
                let w2 = w2.as_ref();
                if seen.contains(w2) {
                    continue;
                }
                if self.qualifies(&chars[n1], &chars[n2], index) {
                    members.insert(w2.to_string());
                    seen.insert(w2);
                }
            }

            if !members.is_empty() {
                seen.insert(w1);
                members.insert(w1.to_string());
                log::trace!("minimal set anchored at {w1}: {} members", members.len());
                sets.push(MinimalSet {
                    anchor: w1.to_string(),
                    words: members,
                });
            }
        }

        log::debug!(
            "found {} minimal sets at index {} among {} words",
            sets.len(),
            index,
            words.len()
        );
        sets
    }
}

fn split_chars<S: AsRef<str>>(words: &[S]) -> Vec<Vec<char>> {
    words.iter().map(|w| w.as_ref().chars().collect()).collect()
}

/// Minimal pairs at `index` using Levenshtein distance.
pub fn find_minimal_pairs<S: AsRef<str>>(words: &[S], index: usize) -> Vec<MinimalPair> {
    MinimalPairFinder::new().find_pairs(words, index)
}

/// Minimal sets at `index` using Levenshtein distance.
pub fn find_minimal_sets<S: AsRef<str>>(words: &[S], index: usize) -> Vec<MinimalSet> {
    MinimalPairFinder::new().find_sets(words, index)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tuples(pairs: &[MinimalPair]) -> Vec<(&str, &str)> {
        pairs.iter().map(MinimalPair::as_tuple).collect()
    }

    #[test]
    fn test_find_pairs_positional_constraint() {
        let finder = MinimalPairFinder::new();
        let pairs = finder.find_pairs(&["cat", "bat", "cot"], 0);
        assert_eq!(tuples(&pairs), vec![("cat", "bat")]);

        let pairs = finder.find_pairs(&["cat", "bat", "cot"], 1);
        assert_eq!(tuples(&pairs), vec![("cat", "cot")]);
    }

    #[test]
    fn test_find_pairs_empty_and_short_words() {
        let finder = MinimalPairFinder::new();
        let empty: [&str; 0] = [];
        assert!(finder.find_pairs(&empty, 0).is_empty());

        // Index past the end excludes the words.
        assert!(finder.find_pairs(&["at", "it"], 2).is_empty());
        assert!(finder.find_pairs(&["a", "b"], 1).is_empty());
        assert_eq!(tuples(&finder.find_pairs(&["a", "b"], 0)), vec![("a", "b")]);
    }

    #[test]
    fn test_find_pairs_unequal_length_excluded() {
        // "cat" -> "cart" is distance 1 but the lengths differ.
        let finder = MinimalPairFinder::new();
        assert!(finder.find_pairs(&["cat", "cart"], 0).is_empty());
        assert!(finder.find_pairs(&["cat", "cart"], 2).is_empty());
    }

    #[test]
    fn test_find_pairs_keeps_duplicates() {
        let finder = MinimalPairFinder::new();
        let pairs = finder.find_pairs(&["pin", "bin", "pin"], 0);
        assert_eq!(tuples(&pairs), vec![("pin", "bin"), ("bin", "pin")]);
    }

    #[test]
    fn test_find_pairs_no_normalization() {
        let finder = MinimalPairFinder::new();
        assert_eq!(
            tuples(&finder.find_pairs(&["Cat", "cat"], 0)),
            vec![("Cat", "cat")]
        );
        assert_eq!(
            tuples(&finder.find_pairs(&["café", "cafe"], 3)),
            vec![("café", "cafe")]
        );
    }

    #[test]
    fn test_par_find_pairs_matches_sequential() {
        let words = [
            "pat", "bat", "cat", "mat", "pit", "pot", "bit", "big", "pig", "pin", "bin",
        ];
        let finder = MinimalPairFinder::new();
        for index in 0..4 {
            assert_eq!(
                finder.find_pairs(&words, index),
                finder.par_find_pairs(&words, index)
            );
        }
    }

    #[test]
    fn test_find_sets_basic() {
        let finder = MinimalPairFinder::new();
        let sets = finder.find_sets(&["pat", "bat", "cat", "pit", "mat"], 0);

        assert_eq!(sets.len(), 1);
        assert_eq!(sets[0].anchor(), "pat");
        let words: Vec<&str> = sets[0].words().iter().map(String::as_str).collect();
        assert_eq!(words, vec!["bat", "cat", "mat", "pat"]);
    }

    #[test]
    fn test_find_sets_one_set_per_anchor() {
        let finder = MinimalPairFinder::new();
        let sets = finder.find_sets(&["pit", "bit", "big", "pig"], 2);

        assert_eq!(sets.len(), 2);
        assert_eq!(sets[0].anchor(), "pit");
        assert!(sets[0].contains("pig"));
        assert_eq!(sets[1].anchor(), "bit");
        assert!(sets[1].contains("big"));
    }

    #[test]
    fn test_find_sets_is_not_transitive_closure() {
        // xa~ya and ya~za, but xa and za are not neighbours. "ya" is claimed
        // by "xa", so "za" is left without a set.
        let oracle = |a: &str, b: &str| -> usize {
            match (a, b) {
                _ if a == b => 0,
                ("xa", "ya") | ("ya", "xa") | ("ya", "za") | ("za", "ya") => 1,
                _ => 2,
            }
        };
        let finder = MinimalPairFinder::with_distance(oracle);

        let sets = finder.find_sets(&["xa", "ya", "za"], 0);
        assert_eq!(sets.len(), 1);
        assert_eq!(sets[0].anchor(), "xa");
        assert!(!sets[0].contains("za"));

        // Starting from "ya" instead pulls in both neighbours.
        let sets = finder.find_sets(&["ya", "xa", "za"], 0);
        assert_eq!(sets.len(), 1);
        assert_eq!(sets[0].len(), 3);
    }

    #[test]
    fn test_find_sets_claimed_word_does_not_anchor() {
        let finder = MinimalPairFinder::new();
        // At index 1: "cat" claims "cot"; "cot" would pair with "cut" but is
        // already claimed, so "cut" stays with "cat".
        let sets = finder.find_sets(&["cat", "cot", "cut", "dot", "dut"], 1);
        let members: Vec<Vec<&str>> = sets
            .iter()
            .map(|s| s.words().iter().map(String::as_str).collect())
            .collect();
        assert_eq!(members, vec![vec!["cat", "cot", "cut"], vec!["dot", "dut"]]);
    }

    #[test]
    fn test_find_sets_repeated_word_forms_one_set() {
        let finder = MinimalPairFinder::new();

        let sets = finder.find_sets(&["bat", "cat", "bat"], 0);
        assert_eq!(sets.len(), 1);
        let words: Vec<&str> = sets[0].words().iter().map(String::as_str).collect();
        assert_eq!(words, vec!["bat", "cat"]);

        let sets = finder.find_sets(&["bat", "cat", "bat", "cat"], 0);
        assert_eq!(sets.len(), 1);
        assert_eq!(sets[0].anchor(), "bat");
        assert_eq!(sets[0].len(), 2);
    }

    #[test]
    fn test_find_sets_later_copy_of_claimed_word_does_not_anchor() {
        // The second "ya" would pair with "za", but "ya" was already claimed.
        let oracle = |a: &str, b: &str| -> usize {
            match (a, b) {
                _ if a == b => 0,
                ("xa", "ya") | ("ya", "xa") | ("ya", "za") | ("za", "ya") => 1,
                _ => 2,
            }
        };
        let finder = MinimalPairFinder::with_distance(oracle);

        let sets = finder.find_sets(&["xa", "ya", "ya", "za"], 0);
        assert_eq!(sets.len(), 1);
        assert_eq!(sets[0].anchor(), "xa");
        assert!(!sets[0].contains("za"));
    }

    #[test]
    fn test_find_sets_word_in_one_set_only() {
        let words = [
            "pat", "bat", "pit", "bit", "pot", "bot", "pig", "big", "bag", "pag", "pin", "bin",
        ];
        let finder = MinimalPairFinder::new();
        for index in 0..3 {
            let sets = finder.find_sets(&words, index);
            let mut seen = std::collections::HashSet::new();
            for set in &sets {
                assert!(set.len() >= 2);
                for word in set.words() {
                    assert!(seen.insert(word.clone()), "{word} appears twice");
                }
            }
        }
    }

    #[test]
    fn test_custom_distance_oracle() {
        // A metric that only ever reports 2 rejects every candidate.
        let finder = MinimalPairFinder::with_distance(|a: &str, b: &str| -> usize {
            if a == b { 0 } else { 2 }
        });
        assert!(finder.find_pairs(&["cat", "bat"], 0).is_empty());
        assert!(finder.find_sets(&["cat", "bat"], 0).is_empty());
    }

    struct CharsOnly;

    impl EditDistance for CharsOnly {
        fn distance(&self, _a: &str, _b: &str) -> usize {
            panic!("string distance should not be used for pair checks");
        }

        fn distance_within_chars(&self, a: &[char], b: &[char], _bound: usize) -> Option<usize> {
            Some(a.iter().zip(b).filter(|(x, y)| x != y).count())
        }
    }

    #[test]
    fn test_pair_checks_use_char_slices() {
        let finder = MinimalPairFinder::with_distance(CharsOnly);
        let words = ["cat", "bat", "cot"];

        assert_eq!(tuples(&finder.find_pairs(&words, 0)), vec![("cat", "bat")]);
        assert_eq!(finder.par_find_pairs(&words, 1), finder.find_pairs(&words, 1));
        assert_eq!(finder.find_sets(&words, 0).len(), 1);
        assert!(finder.is_minimal_pair("ship", "chip", 0));
    }

    #[test]
    fn test_is_minimal_pair() {
        let finder = MinimalPairFinder::new();
        assert!(finder.is_minimal_pair("ship", "chip", 0));
        assert!(!finder.is_minimal_pair("ship", "chip", 1));
        assert!(!finder.is_minimal_pair("ship", "ship", 0));
    }
}
