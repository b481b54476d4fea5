//! Pairwise form and meaning comparison.
//!
//! [`FormMeaningComparator`] scores every unordered pair of a word list on a
//! form metric (default: Levenshtein distance) and a meaning metric
//! (default: similarity from a [`SimilarityModel`]). Both metrics can be
//! replaced by closures at construction.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use lexis::systematicity::comparator::FormMeaningComparator;
//! use lexis::systematicity::similarity::WordVectors;
//!
//! let model = WordVectors::from_entries(
//!     2,
//!     vec![("cat", vec![1.0, 0.0]), ("bat", vec![1.0, 1.0])],
//! )
//! .unwrap();
//!
//! let comparator = FormMeaningComparator::new().with_model(Arc::new(model));
//! let records = comparator.compare_all(&["cat", "bat"]).unwrap();
//!
//! assert_eq!(records.len(), 1);
//! assert_eq!(records[0].form, 1.0);
//! ```

use std::fmt;
use std::sync::Arc;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{LexisError, Result};
use crate::systematicity::similarity::SimilarityModel;
use crate::util::levenshtein::levenshtein_distance;
use crate::util::pairs::{PairIndices, par_pair_indices};

/// Form metric: compares the spelling of two words.
pub type FormMetric = Box<dyn Fn(&str, &str) -> f64 + Send + Sync>;

/// Meaning metric: compares the meaning of two words and may fail.
pub type MeaningMetric = Box<dyn Fn(&str, &str) -> Result<f64> + Send + Sync>;

/// Scores for one unordered pair of words.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRecord {
    pub w1: String,
    pub w2: String,
    pub form: f64,
    pub meaning: f64,
}

/// Column-oriented view of a list of [`ComparisonRecord`]s.
///
/// Row `i` of every column belongs to the same pair.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ComparisonTable {
    pub w1: Vec<String>,
    pub w2: Vec<String>,
    pub form: Vec<f64>,
    pub meaning: Vec<f64>,
}

impl ComparisonTable {
    pub fn len(&self) -> usize {
        self.w1.len()
    }

    pub fn is_empty(&self) -> bool {
        self.w1.is_empty()
    }
}

impl From<Vec<ComparisonRecord>> for ComparisonTable {
    fn from(records: Vec<ComparisonRecord>) -> Self {
        let mut table = ComparisonTable {
            w1: Vec::with_capacity(records.len()),
            w2: Vec::with_capacity(records.len()),
            form: Vec::with_capacity(records.len()),
            meaning: Vec::with_capacity(records.len()),
        };
        for record in records {
            table.w1.push(record.w1);
            table.w2.push(record.w2);
            table.form.push(record.form);
            table.meaning.push(record.meaning);
        }
        table
    }
}

/// Compares words along form and meaning.
#[derive(Default)]
pub struct FormMeaningComparator {
    model: Option<Arc<dyn SimilarityModel>>,
    form_metric: Option<FormMetric>,
    meaning_metric: Option<MeaningMetric>,
}

impl fmt::Debug for FormMeaningComparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormMeaningComparator")
            .field("model", &self.model.as_ref().map(|_| "<model>"))
            .field(
                "form_metric",
                &if self.form_metric.is_some() { "custom" } else { "levenshtein" },
            )
            .field(
                "meaning_metric",
                &if self.meaning_metric.is_some() { "custom" } else { "model" },
            )
            .finish()
    }
}

impl FormMeaningComparator {
    /// Create a comparator with the default metrics and no model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the similarity model used by the default meaning metric.
    pub fn with_model(mut self, model: Arc<dyn SimilarityModel>) -> Self {
        self.model = Some(model);
        self
    }

    /// Replace the form metric.
    pub fn with_form_metric<F>(mut self, metric: F) -> Self
    where
        F: Fn(&str, &str) -> f64 + Send + Sync + 'static,
    {
        self.form_metric = Some(Box::new(metric));
        self
    }

    /// Replace the meaning metric. The model, if any, is then unused.
    pub fn with_meaning_metric<F>(mut self, metric: F) -> Self
    where
        F: Fn(&str, &str) -> Result<f64> + Send + Sync + 'static,
    {
        self.meaning_metric = Some(Box::new(metric));
        self
    }

    /// Get the similarity model, if one was supplied.
    pub fn model(&self) -> Option<&Arc<dyn SimilarityModel>> {
        self.model.as_ref()
    }

    /// Compare the forms of `w1` and `w2`.
    pub fn compare_form(&self, w1: &str, w2: &str) -> f64 {
        match &self.form_metric {
            Some(metric) => metric(w1, w2),
            None => levenshtein_distance(w1, w2) as f64,
        }
    }

    /// Compare the meanings of `w1` and `w2`.
    ///
    /// Errors from the metric or model are returned unchanged.
    pub fn compare_meaning(&self, w1: &str, w2: &str) -> Result<f64> {
        match (&self.meaning_metric, &self.model) {
            (Some(metric), _) => metric(w1, w2),
            (None, Some(model)) => model.similarity(w1, w2),
            (None, None) => Err(LexisError::missing_model(
                "the default meaning metric needs a similarity model",
            )),
        }
    }

    fn check_meaning_source(&self, word_count: usize) -> Result<()> {
        if word_count >= 2 && self.meaning_metric.is_none() && self.model.is_none() {
            return Err(LexisError::missing_model(
                "the default meaning metric needs a similarity model",
            ));
        }
        Ok(())
    }

    fn compare_pair(&self, w1: &str, w2: &str) -> Result<ComparisonRecord> {
        let form = self.compare_form(w1, w2);
        let meaning = self.compare_meaning(w1, w2)?;
        Ok(ComparisonRecord {
            w1: w1.to_string(),
            w2: w2.to_string(),
            form,
            meaning,
        })
    }

    /// Score every unordered pair of `words`, in combinatorial order.
    ///
    /// The first failing pair aborts the whole call; no partial result is
    /// returned.
    pub fn compare_all<S: AsRef<str>>(&self, words: &[S]) -> Result<Vec<ComparisonRecord>> {
        self.check_meaning_source(words.len())?;

        let records = PairIndices::new(words.len())
            .map(|(i, j)| self.compare_pair(words[i].as_ref(), words[j].as_ref()))
            .collect::<Result<Vec<_>>>()?;

        log::debug!(
            "compared {} pairs from {} words",
            records.len(),
            words.len()
        );
        Ok(records)
    }

    /// Same result as [`compare_all`](Self::compare_all), evaluated in parallel.
    ///
    /// Every pair is evaluated; on failure the error of the first failing
    /// pair in enumeration order is returned.
    pub fn par_compare_all<S>(&self, words: &[S]) -> Result<Vec<ComparisonRecord>>
    where
        S: AsRef<str> + Sync,
    {
        self.check_meaning_source(words.len())?;

        let results: Vec<Result<ComparisonRecord>> = par_pair_indices(words.len())
            .map(|(i, j)| self.compare_pair(words[i].as_ref(), words[j].as_ref()))
            .collect();

        let records = results.into_iter().collect::<Result<Vec<_>>>()?;
        log::debug!(
            "compared {} pairs from {} words (parallel)",
            records.len(),
            words.len()
        );
        Ok(records)
    }

    /// Score every pair and return the result as columns.
    pub fn compare_all_table<S: AsRef<str>>(&self, words: &[S]) -> Result<ComparisonTable> {
        Ok(ComparisonTable::from(self.compare_all(words)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::systematicity::similarity::WordVectors;

    fn model() -> Arc<dyn SimilarityModel> {
        let vectors = WordVectors::from_entries(
            2,
            vec![
                ("cat", vec![1.0, 0.0]),
                ("bat", vec![0.0, 1.0]),
                ("cot", vec![1.0, 1.0]),
            ],
        )
        .unwrap();
        Arc::new(vectors)
    }

    #[test]
    fn test_default_form_metric() {
        let comparator = FormMeaningComparator::new().with_model(model());
        let records = comparator.compare_all(&["cat", "bat"]).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].w1, "cat");
        assert_eq!(records[0].w2, "bat");
        assert_eq!(records[0].form, 1.0);
        assert!(records[0].meaning.abs() < 1e-9);
    }

    #[test]
    fn test_pair_order() {
        let comparator = FormMeaningComparator::new().with_model(model());
        let records = comparator.compare_all(&["cat", "bat", "cot"]).unwrap();
        let pairs: Vec<(&str, &str)> = records
            .iter()
            .map(|r| (r.w1.as_str(), r.w2.as_str()))
            .collect();
        assert_eq!(pairs, vec![("cat", "bat"), ("cat", "cot"), ("bat", "cot")]);
        assert_eq!(records[2].form, 2.0);
    }

    #[test]
    fn test_degenerate_inputs() {
        // No pairs means no metric call, so a missing model is not an error.
        let comparator = FormMeaningComparator::new();
        let empty: [&str; 0] = [];
        assert!(comparator.compare_all(&empty).unwrap().is_empty());
        assert!(comparator.compare_all(&["cat"]).unwrap().is_empty());
    }

    #[test]
    fn test_missing_model() {
        let comparator = FormMeaningComparator::new();
        assert!(matches!(
            comparator.compare_all(&["cat", "bat"]),
            Err(LexisError::MissingModel(_))
        ));
    }

    #[test]
    fn test_out_of_vocabulary_propagates() {
        let comparator = FormMeaningComparator::new().with_model(model());
        match comparator.compare_all(&["cat", "bat", "zyzzyva"]) {
            Err(LexisError::OutOfVocabulary(word)) => assert_eq!(word, "zyzzyva"),
            other => panic!("expected OutOfVocabulary, got {other:?}"),
        }
    }

    #[test]
    fn test_custom_metrics() {
        let comparator = FormMeaningComparator::new()
            .with_form_metric(|a, b| (a.len() as f64 - b.len() as f64).abs())
            .with_meaning_metric(|a, b| Ok(if a.starts_with(&b[..1]) { 1.0 } else { 0.0 }));

        let records = comparator.compare_all(&["cat", "cart", "dog"]).unwrap();
        assert_eq!(records[0].form, 1.0);
        assert_eq!(records[0].meaning, 1.0);
        assert_eq!(records[1].form, 0.0);
        assert_eq!(records[1].meaning, 0.0);
    }

    #[test]
    fn test_custom_meaning_metric_error_unchanged() {
        let comparator = FormMeaningComparator::new()
            .with_meaning_metric(|_, b| Err(LexisError::metric(format!("no sense for {b}"))));

        match comparator.compare_all(&["cat", "bat", "cot"]) {
            Err(LexisError::Metric(msg)) => assert_eq!(msg, "no sense for bat"),
            other => panic!("expected Metric error, got {other:?}"),
        }
    }

    #[test]
    fn test_par_compare_all_matches_sequential() {
        let comparator = FormMeaningComparator::new().with_model(model());
        let words = ["cat", "bat", "cot"];
        assert_eq!(
            comparator.compare_all(&words).unwrap(),
            comparator.par_compare_all(&words).unwrap()
        );

        match comparator.par_compare_all(&["cat", "x", "y"]) {
            Err(LexisError::OutOfVocabulary(word)) => assert_eq!(word, "x"),
            other => panic!("expected OutOfVocabulary, got {other:?}"),
        }
    }

    #[test]
    fn test_table() {
        let comparator = FormMeaningComparator::new().with_model(model());
        let table = comparator.compare_all_table(&["cat", "bat", "cot"]).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.w1, vec!["cat", "cat", "bat"]);
        assert_eq!(table.w2, vec!["bat", "cot", "cot"]);
        assert_eq!(table.form, vec![1.0, 1.0, 2.0]);
    }
}
