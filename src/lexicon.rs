//! Lexical structure: minimal pairs, syllables and rhyme.
//!
//! - [`minimal_pair`] - minimal pairs and greedy minimal sets in a word list
//! - [`syllable`] - onset / nucleus / coda decomposition
//! - [`rhyme`] - rhyme detection built on the syllable parser
//! - [`edit_distance`] - the distance oracle used by minimal pair discovery

pub mod edit_distance;
pub mod minimal_pair;
pub mod rhyme;
pub mod syllable;

pub use edit_distance::{EditDistance, Levenshtein};
pub use minimal_pair::{
    MinimalPair, MinimalPairFinder, MinimalSet, find_minimal_pairs, find_minimal_sets,
};
pub use rhyme::{RhymeComparator, is_rhyme};
pub use syllable::{SyllableComponents, SyllableParser, parse_syllable};
