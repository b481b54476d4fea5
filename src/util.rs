//! Shared utility modules used across Lexis components.

pub mod levenshtein;
pub mod pairs;
