//! Text preprocessing: cleaning, tokenization and token filtering.
//!
//! The pieces compose into a [`PipelineAnalyzer`](analyzer::PipelineAnalyzer):
//! char filters clean the raw text, a tokenizer splits it, and token filters
//! lowercase, drop stop words and lemmatize.

pub mod analyzer;
pub mod char_filter;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

pub use analyzer::{Analyzer, PipelineAnalyzer};
pub use token::{Token, TokenStream};
