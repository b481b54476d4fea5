//! Token filter implementations for token transformation.
//!
//! - [`lowercase::LowercaseFilter`] - converts tokens to lowercase
//! - [`stop::StopFilter`] - removes stop words
//! - [`lemma::LemmaFilter`] - reduces words to their lemma
//!
//! Filters are chained by an analyzer:
//!
//! ```text
//! Tokenizer → Lowercase → Stop Words → Lemmatizer
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for filters that transform token streams.
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream>;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod lemma;
pub mod lowercase;
pub mod stop;
