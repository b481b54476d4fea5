//! Char filters that clean raw text before tokenization.
//!
//! - [`html_strip::HtmlStripCharFilter`] - removes markup and decodes entities
//! - [`hyperlink::HyperlinkCharFilter`] - removes URLs and bare domain names
//!
//! Char filters run before the tokenizer, so token offsets refer to the
//! filtered text.

/// Trait for character filters that transform text before tokenization.
pub trait CharFilter: Send + Sync {
    /// Apply this filter to the input text.
    fn filter(&self, input: &str) -> String;

    /// Get the name of this char filter.
    fn name(&self) -> &'static str;
}

pub mod html_strip;
pub mod hyperlink;
