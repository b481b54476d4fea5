//! Error types for the Lexis library.
//!
//! All fallible operations return [`Result`], whose error type is the
//! [`LexisError`] enum. Constructor helpers accept anything that converts
//! into a `String`.
//!
//! # Examples
//!
//! ```
//! use lexis::error::{LexisError, Result};
//!
//! fn lookup(word: &str) -> Result<f64> {
//!     Err(LexisError::out_of_vocabulary(word))
//! }
//!
//! match lookup("zyzzyva") {
//!     Ok(_) => println!("found"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Lexis operations.
#[derive(Error, Debug)]
pub enum LexisError {
    /// I/O errors (reading configuration or model files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Invalid regular expression
    #[error("Pattern error: {0}")]
    Pattern(#[from] regex::Error),

    /// A rhyme or syllable comparison was requested on a syllable without a nucleus
    #[error("Undefined comparison: no nucleus found in syllable {0:?}")]
    UndefinedComparison(String),

    /// The meaning metric needs a similarity model and none was supplied
    #[error("Missing model: {0}")]
    MissingModel(String),

    /// A word is unknown to the similarity model
    #[error("Word not in vocabulary: {0:?}")]
    OutOfVocabulary(String),

    /// A similarity model could not be loaded
    #[error("Invalid model: {0}")]
    InvalidModel(String),

    /// A form or meaning metric failed
    #[error("Metric error: {0}")]
    Metric(String),

    /// Configuration errors
    #[error("Config error: {0}")]
    Config(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with LexisError.
pub type Result<T> = std::result::Result<T, LexisError>;

impl LexisError {
    /// Create a new undefined comparison error for the given syllable.
    pub fn undefined_comparison<S: Into<String>>(syllable: S) -> Self {
        LexisError::UndefinedComparison(syllable.into())
    }

    /// Create a new missing model error.
    pub fn missing_model<S: Into<String>>(msg: S) -> Self {
        LexisError::MissingModel(msg.into())
    }

    /// Create a new out-of-vocabulary error.
    pub fn out_of_vocabulary<S: Into<String>>(word: S) -> Self {
        LexisError::OutOfVocabulary(word.into())
    }

    /// Create a new invalid model error.
    pub fn invalid_model<S: Into<String>>(msg: S) -> Self {
        LexisError::InvalidModel(msg.into())
    }

    /// Create a new metric error.
    pub fn metric<S: Into<String>>(msg: S) -> Self {
        LexisError::Metric(msg.into())
    }

    /// Create a new config error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        LexisError::Config(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let error = LexisError::undefined_comparison("xyz");
        assert_eq!(
            error.to_string(),
            "Undefined comparison: no nucleus found in syllable \"xyz\""
        );

        let error = LexisError::out_of_vocabulary("zyzzyva");
        assert_eq!(error.to_string(), "Word not in vocabulary: \"zyzzyva\"");

        let error = LexisError::config("bad pattern");
        assert_eq!(error.to_string(), "Config error: bad pattern");

        let error = LexisError::metric("negative score");
        assert_eq!(error.to_string(), "Metric error: negative score");

        let error = LexisError::invalid_model("bad header");
        assert_eq!(error.to_string(), "Invalid model: bad header");
    }

    #[test]
    fn test_error_from_io() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = LexisError::from(io_error);

        match error {
            LexisError::Io(_) => {} // Expected
            _ => panic!("Expected IO error"),
        }
    }

    #[test]
    fn test_error_from_regex() {
        let regex_error = regex::Regex::new("[unclosed").unwrap_err();
        let error = LexisError::from(regex_error);

        assert!(matches!(error, LexisError::Pattern(_)));
    }
}
