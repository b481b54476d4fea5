//! Text cleaning: HTML stripping and hyperlink removal.
//!
//! # Examples
//!
//! ```
//! use lexis::cleaning::TextCleaner;
//!
//! let cleaner = TextCleaner::new();
//! let text = "  <p>Read <a href=\"https://x.org\">this</a> at https://x.org</p> ";
//! assert_eq!(cleaner.clean(text), "Read this at");
//! ```

use rayon::prelude::*;

use crate::analysis::char_filter::CharFilter;
use crate::analysis::char_filter::html_strip::HtmlStripCharFilter;
use crate::analysis::char_filter::hyperlink::HyperlinkCharFilter;
use crate::config::LexisConfig;

/// Removes markup and, optionally, hyperlinks from raw documents.
#[derive(Clone, Debug)]
pub struct TextCleaner {
    html: HtmlStripCharFilter,
    links: HyperlinkCharFilter,
    remove_links: bool,
}

impl TextCleaner {
    /// Create a cleaner that strips HTML and removes hyperlinks.
    pub fn new() -> Self {
        TextCleaner {
            html: HtmlStripCharFilter::new(),
            links: HyperlinkCharFilter::new(),
            remove_links: true,
        }
    }

    pub fn from_config(config: &LexisConfig) -> Self {
        Self::new().with_remove_links(config.remove_links)
    }

    pub fn with_remove_links(mut self, remove_links: bool) -> Self {
        self.remove_links = remove_links;
        self
    }

    pub fn remove_links(&self) -> bool {
        self.remove_links
    }

    /// Keep only the text content of an HTML document.
    pub fn strip_html(&self, text: &str) -> String {
        self.html.filter(text)
    }

    pub fn remove_hyperlinks(&self, text: &str) -> String {
        self.links.filter(text)
    }

    /// Strip HTML, remove hyperlinks if enabled, and trim the result.
    pub fn clean(&self, text: &str) -> String {
        let mut cleaned = self.strip_html(text);
        if self.remove_links {
            cleaned = self.remove_hyperlinks(&cleaned);
        }
        cleaned.trim().to_string()
    }

    /// Clean many documents in parallel, preserving order.
    pub fn par_clean<S: AsRef<str> + Sync>(&self, documents: &[S]) -> Vec<String> {
        documents
            .par_iter()
            .map(|doc| self.clean(doc.as_ref()))
            .collect()
    }
}

impl Default for TextCleaner {
    fn default() -> Self {
        Self::new()
    }
}

impl CharFilter for TextCleaner {
    fn filter(&self, input: &str) -> String {
        self.clean(input)
    }

    fn name(&self) -> &'static str {
        "text_cleaner"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_strips_and_trims() {
        let cleaner = TextCleaner::new();
        assert_eq!(
            cleaner.clean("\n<div>Hello <em>there</em>, see www.example.com</div>\n"),
            "Hello there, see"
        );
    }

    #[test]
    fn test_keep_links() {
        let cleaner = TextCleaner::new().with_remove_links(false);
        assert_eq!(
            cleaner.clean("<p>see www.example.com</p>"),
            "see www.example.com"
        );
    }

    #[test]
    fn test_from_config() {
        let config = LexisConfig::default().with_remove_links(false);
        assert!(!TextCleaner::from_config(&config).remove_links());
        assert!(TextCleaner::from_config(&LexisConfig::default()).remove_links());
    }

    #[test]
    fn test_par_clean_preserves_order() {
        let cleaner = TextCleaner::new();
        let docs = vec!["<b>one</b>", " two ", "<i>three</i> http://x.net"];
        assert_eq!(cleaner.par_clean(&docs), vec!["one", "two", "three"]);
    }
}
