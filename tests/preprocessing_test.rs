//! Integration tests for text cleaning and the analysis pipeline.

use std::sync::Arc;

use lexis::analysis::token_filter::lemma::{LemmaFilter, RuleLemmatizer};
use lexis::analysis::token_filter::lowercase::LowercaseFilter;
use lexis::analysis::tokenizer::regex::RegexTokenizer;
use lexis::analysis::{Analyzer, PipelineAnalyzer};
use lexis::cleaning::TextCleaner;
use lexis::config::LexisConfig;
use lexis::error::Result;
use lexis::lexicon::find_minimal_pairs;

const DOCUMENT: &str = r#"
<html>
  <head><style>body { color: #333 }</style></head>
  <body>
    <!-- navigation -->
    <p>The <b>cats</b> &amp; the bats met the rats at http://example.org/rats.</p>
    <p>Contact: info@example.com</p>
  </body>
</html>
"#;

#[test]
fn test_clean_document() {
    let cleaner = TextCleaner::new();
    let text = cleaner.clean(DOCUMENT);

    assert!(text.starts_with("The cats & the bats"));
    assert!(!text.contains('<'));
    assert!(!text.contains("http"));
    assert!(!text.contains("example.com"));
    assert!(text.ends_with("Contact:"));
}

#[test]
fn test_clean_keeps_links_when_disabled() {
    let cleaner = TextCleaner::from_config(&LexisConfig::default().with_remove_links(false));
    assert!(cleaner.clean(DOCUMENT).contains("http://example.org/rats."));
}

#[test]
fn test_default_pipeline() -> Result<()> {
    let analyzer = PipelineAnalyzer::from_config(&LexisConfig::default())?;
    let words = analyzer.analyze_to_strings(DOCUMENT)?;

    assert_eq!(words, vec!["cat", "bat", "met", "rat", "contact"]);
    Ok(())
}

#[test]
fn test_default_pipeline_drops_common_function_words() -> Result<()> {
    let analyzer = PipelineAnalyzer::from_config(&LexisConfig::default())?;
    let words =
        analyzer.analyze_to_strings("Cats have been doing the same on their own, being cats")?;

    assert_eq!(words, vec!["cat", "cat"]);
    Ok(())
}

#[test]
fn test_pipeline_feeds_minimal_pairs() -> Result<()> {
    let analyzer = PipelineAnalyzer::from_config(&LexisConfig::default())?;
    let words = analyzer.analyze_to_strings(DOCUMENT)?;

    let pairs = find_minimal_pairs(&words, 0);
    let tuples: Vec<(&str, &str)> = pairs.iter().map(|p| p.as_tuple()).collect();
    assert_eq!(tuples, vec![("cat", "bat"), ("cat", "rat"), ("bat", "rat")]);
    Ok(())
}

#[test]
fn test_config_file_drives_pipeline() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("lexis.json");
    std::fs::write(
        &path,
        r#"{ "stop_words": ["met"], "lemmatize": false, "remove_links": true }"#,
    )?;

    let config = LexisConfig::from_file(&path)?;
    let analyzer = PipelineAnalyzer::from_config(&config)?;
    let words = analyzer.analyze_to_strings("The cats met the rats")?;

    assert_eq!(words, vec!["the", "cats", "the", "rats"]);
    Ok(())
}

#[test]
fn test_custom_pipeline() -> Result<()> {
    let lemmatizer = RuleLemmatizer::new().with_vocabulary(vec!["wolf", "knife", "leaf"]);
    let analyzer = PipelineAnalyzer::new(Arc::new(RegexTokenizer::new()?))
        .add_char_filter(Arc::new(TextCleaner::new()))
        .add_filter(Arc::new(LowercaseFilter::new()))
        .add_filter(Arc::new(LemmaFilter::with_lemmatizer(Arc::new(lemmatizer))))
        .with_name("vocabulary_lemmas");

    let words = analyzer.analyze_to_strings("<i>Wolves</i>, LEAVES and knives")?;
    assert_eq!(words, vec!["wolf", "leaf", "and", "knives"]);
    assert_eq!(analyzer.pipeline_name(), "vocabulary_lemmas");
    Ok(())
}

#[test]
fn test_par_analyze_matches_sequential() -> Result<()> {
    let analyzer = PipelineAnalyzer::from_config(&LexisConfig::default())?;
    let docs = vec![DOCUMENT, "Geese and mice", "", "<p>www.example.net</p>"];

    let parallel = analyzer.par_analyze_to_strings(&docs)?;
    let sequential = docs
        .iter()
        .map(|doc| analyzer.analyze_to_strings(doc))
        .collect::<Result<Vec<_>>>()?;

    assert_eq!(parallel, sequential);
    assert_eq!(parallel[1], vec!["goose", "mouse"]);
    assert!(parallel[3].is_empty());
    Ok(())
}
