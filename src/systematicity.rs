//! Form/meaning systematicity.
//!
//! Compares the forms and meanings of word pairs, by default with Levenshtein
//! distance and cosine similarity over word embeddings.

pub mod comparator;
pub mod similarity;

pub use comparator::{ComparisonRecord, ComparisonTable, FormMeaningComparator};
pub use similarity::{SimilarityModel, WordVectors, cosine_similarity};
