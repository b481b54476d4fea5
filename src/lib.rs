//! # Lexis
//!
//! Lexical analysis utilities for computational linguistics.
//!
//! ## Features
//!
//! - Minimal pairs and minimal sets over a word list
//! - Onset / nucleus / coda syllable parsing with a configurable nucleus pattern
//! - Rhyme detection
//! - Form/meaning systematicity tables with pluggable metrics
//! - Text preprocessing: HTML and hyperlink cleaning, tokenization,
//!   stop words and lemmatization
//!
//! ## Example
//!
//! ```
//! use lexis::prelude::*;
//!
//! let words = ["pit", "bit", "pig"];
//! let pairs = find_minimal_pairs(&words, 0);
//! assert_eq!(pairs, vec![MinimalPair::new("pit", "bit")]);
//!
//! assert!(is_rhyme("kat", "bat", "[aeiou]").unwrap());
//! ```

pub mod analysis;
pub mod cleaning;
pub mod config;
pub mod error;
pub mod lexicon;
pub mod systematicity;
pub mod util;

pub mod prelude {
    pub use crate::analysis::{Analyzer, PipelineAnalyzer, Token, TokenStream};
    pub use crate::cleaning::TextCleaner;
    pub use crate::config::LexisConfig;
    pub use crate::error::{LexisError, Result};
    pub use crate::lexicon::{
        EditDistance, Levenshtein, MinimalPair, MinimalPairFinder, MinimalSet, RhymeComparator,
        SyllableComponents, SyllableParser, find_minimal_pairs, find_minimal_sets, is_rhyme,
        parse_syllable,
    };
    pub use crate::systematicity::{
        ComparisonRecord, ComparisonTable, FormMeaningComparator, SimilarityModel, WordVectors,
        cosine_similarity,
    };
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
