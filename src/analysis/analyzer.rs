//! Analyzers that combine char filters, a tokenizer and token filters.
//!
//! ```text
//! Raw Text → Char Filters → Tokenizer → Filter 1 → ... → Filter N
//! ```
//!
//! # Examples
//!
//! ```
//! use lexis::analysis::analyzer::{Analyzer, PipelineAnalyzer};
//! use lexis::config::LexisConfig;
//!
//! let analyzer = PipelineAnalyzer::from_config(&LexisConfig::default()).unwrap();
//! let words = analyzer
//!     .analyze_to_strings("<p>The Cats sat with the Children</p>")
//!     .unwrap();
//!
//! assert_eq!(words, vec!["cat", "sat", "child"]);
//! ```

use std::fmt;
use std::sync::Arc;

use rayon::prelude::*;

use crate::analysis::char_filter::CharFilter;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::analysis::token_filter::lemma::LemmaFilter;
use crate::analysis::token_filter::lowercase::LowercaseFilter;
use crate::analysis::token_filter::stop::StopFilter;
use crate::analysis::tokenizer::Tokenizer;
use crate::analysis::tokenizer::unicode_word::UnicodeWordTokenizer;
use crate::cleaning::TextCleaner;
use crate::config::LexisConfig;
use crate::error::Result;

/// Trait for analyzers that convert text into processed tokens.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a stream of tokens.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &'static str;

    /// Analyze the text and collect the text of every token not marked as stopped.
    fn analyze_to_strings(&self, text: &str) -> Result<Vec<String>> {
        Ok(self
            .analyze(text)?
            .filter(|token| !token.is_stopped())
            .map(|token| token.text)
            .collect())
    }
}

/// A configurable analyzer that combines a tokenizer with a chain of filters.
#[derive(Clone)]
pub struct PipelineAnalyzer {
    tokenizer: Arc<dyn Tokenizer>,
    char_filters: Vec<Arc<dyn CharFilter>>,
    filters: Vec<Arc<dyn Filter>>,
    name: String,
}

impl PipelineAnalyzer {
    /// Create a new pipeline analyzer with the given tokenizer.
    pub fn new(tokenizer: Arc<dyn Tokenizer>) -> Self {
        PipelineAnalyzer {
            name: format!("pipeline_{}", tokenizer.name()),
            tokenizer,
            char_filters: Vec::new(),
            filters: Vec::new(),
        }
    }

    /// Build the standard preprocessing pipeline from a configuration:
    /// text cleaner, Unicode word tokenizer, lowercase, stop words and,
    /// if enabled, lemmatization.
    pub fn from_config(config: &LexisConfig) -> Result<Self> {
        config.validate()?;

        let mut analyzer = PipelineAnalyzer::new(Arc::new(UnicodeWordTokenizer::new()))
            .add_char_filter(Arc::new(TextCleaner::from_config(config)))
            .add_filter(Arc::new(LowercaseFilter::new()))
            .add_filter(Arc::new(StopFilter::from_words(
                config.stop_words.iter().cloned(),
            )));

        if config.lemmatize {
            analyzer = analyzer.add_filter(Arc::new(LemmaFilter::new()));
        }

        log::debug!(
            "built analyzer with filters {:?}",
            analyzer.filters.iter().map(|f| f.name()).collect::<Vec<_>>()
        );

        Ok(analyzer.with_name("lexis_default"))
    }

    /// Add a char filter to the pipeline.
    pub fn add_char_filter(mut self, char_filter: Arc<dyn CharFilter>) -> Self {
        self.char_filters.push(char_filter);
        self
    }

    /// Add a filter to the pipeline.
    pub fn add_filter(mut self, filter: Arc<dyn Filter>) -> Self {
        self.filters.push(filter);
        self
    }

    /// Set a custom name for this analyzer.
    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = name.into();
        self
    }

    pub fn pipeline_name(&self) -> &str {
        &self.name
    }

    pub fn tokenizer(&self) -> &Arc<dyn Tokenizer> {
        &self.tokenizer
    }

    pub fn char_filters(&self) -> &[Arc<dyn CharFilter>] {
        &self.char_filters
    }

    pub fn filters(&self) -> &[Arc<dyn Filter>] {
        &self.filters
    }

    /// Analyze many documents in parallel, preserving order.
    ///
    /// Returns the first error in document order.
    pub fn par_analyze_to_strings<S: AsRef<str> + Sync>(
        &self,
        documents: &[S],
    ) -> Result<Vec<Vec<String>>> {
        documents
            .par_iter()
            .map(|doc| self.analyze_to_strings(doc.as_ref()))
            .collect()
    }
}

impl Analyzer for PipelineAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        let mut tokens = if self.char_filters.is_empty() {
            self.tokenizer.tokenize(text)?
        } else {
            let filtered = self
                .char_filters
                .iter()
                .fold(text.to_string(), |acc, char_filter| char_filter.filter(&acc));
            self.tokenizer.tokenize(&filtered)?
        };

        for filter in &self.filters {
            tokens = filter.filter(tokens)?;
        }

        Ok(tokens)
    }

    fn name(&self) -> &'static str {
        "pipeline"
    }
}

impl fmt::Debug for PipelineAnalyzer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PipelineAnalyzer")
            .field("name", &self.name)
            .field(
                "char_filters",
                &self.char_filters.iter().map(|f| f.name()).collect::<Vec<_>>(),
            )
            .field("tokenizer", &self.tokenizer.name())
            .field(
                "filters",
                &self.filters.iter().map(|f| f.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}
