//! Word similarity models.
//!
//! [`SimilarityModel`] is the meaning-side collaborator of the
//! [`FormMeaningComparator`]. [`WordVectors`] is an in-memory embedding table
//! scored by cosine similarity, loadable from the word2vec text format:
//!
//! ```text
//! 3 2
//! cat 0.9 0.1
//! dog 0.8 0.2
//! car 0.1 0.9
//! ```
//!
//! [`FormMeaningComparator`]: crate::systematicity::comparator::FormMeaningComparator

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use ahash::AHashMap;

use crate::error::{LexisError, Result};

/// A read-only model that scores how similar two words are in meaning.
pub trait SimilarityModel: Send + Sync {
    /// Similarity between `a` and `b`.
    ///
    /// Fails with [`LexisError::OutOfVocabulary`] if either word is unknown.
    fn similarity(&self, a: &str, b: &str) -> Result<f64>;

    /// Whether the model knows `word`.
    fn contains(&self, word: &str) -> bool;
}

/// Word embeddings held in memory.
#[derive(Clone, Debug, Default)]
pub struct WordVectors {
    dim: usize,
    index: AHashMap<String, usize>,
    vectors: Vec<Vec<f32>>,
}

impl WordVectors {
    /// Create an empty table of `dim`-dimensional vectors.
    pub fn new(dim: usize) -> Self {
        WordVectors {
            dim,
            index: AHashMap::new(),
            vectors: Vec::new(),
        }
    }

    /// Add or replace the vector for `word`.
    pub fn insert<S: Into<String>>(&mut self, word: S, vector: Vec<f32>) -> Result<()> {
        if vector.len() != self.dim {
            return Err(LexisError::invalid_model(format!(
                "expected {} dimensions, got {}",
                self.dim,
                vector.len()
            )));
        }

        let word = word.into();
        match self.index.get(&word) {
            Some(&idx) => self.vectors[idx] = vector,
            None => {
                self.index.insert(word, self.vectors.len());
                self.vectors.push(vector);
            }
        }
        Ok(())
    }

    /// Build a table from `(word, vector)` entries.
    pub fn from_entries<I, S>(dim: usize, entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, Vec<f32>)>,
        S: Into<String>,
    {
        let mut vectors = Self::new(dim);
        for (word, vector) in entries {
            vectors.insert(word, vector)?;
        }
        Ok(vectors)
    }

    /// Read the word2vec text format.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut lines = reader.lines();

        let header = lines
            .next()
            .ok_or_else(|| LexisError::invalid_model("empty input"))??;
        let mut parts = header.split_whitespace();
        let (vocab_size, dim) = match (parts.next(), parts.next(), parts.next()) {
            (Some(v), Some(d), None) => (
                parse_header(v, "vocabulary size")?,
                parse_header(d, "dimension")?,
            ),
            _ => {
                return Err(LexisError::invalid_model(format!(
                    "invalid header {header:?}"
                )));
            }
        };

        let mut vectors = Self::new(dim);
        for (line_num, line) in lines.enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            let mut fields = line.split_whitespace();
            let word = fields.next().ok_or_else(|| {
                LexisError::invalid_model(format!("line {}: missing word", line_num + 2))
            })?;
            let vector = fields
                .map(|v| {
                    v.parse::<f32>().map_err(|e| {
                        LexisError::invalid_model(format!("line {}: {e}", line_num + 2))
                    })
                })
                .collect::<Result<Vec<f32>>>()?;

            vectors.insert(word, vector).map_err(|e| {
                LexisError::invalid_model(format!("line {}: {e}", line_num + 2))
            })?;
        }

        if vectors.len() != vocab_size {
            log::warn!(
                "header announced {} words but {} were read",
                vocab_size,
                vectors.len()
            );
        }
        log::debug!("loaded {} word vectors of dimension {}", vectors.len(), dim);

        Ok(vectors)
    }

    /// Load the word2vec text format from a file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Get the vector for `word`.
    pub fn get(&self, word: &str) -> Option<&[f32]> {
        self.index.get(word).map(|&idx| self.vectors[idx].as_slice())
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    fn vector(&self, word: &str) -> Result<&[f32]> {
        self.get(word)
            .ok_or_else(|| LexisError::out_of_vocabulary(word))
    }
}

fn parse_header(value: &str, what: &str) -> Result<usize> {
    value
        .parse()
        .map_err(|_| LexisError::invalid_model(format!("invalid {what} {value:?}")))
}

impl SimilarityModel for WordVectors {
    fn similarity(&self, a: &str, b: &str) -> Result<f64> {
        Ok(cosine_similarity(self.vector(a)?, self.vector(b)?))
    }

    fn contains(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }
}

/// Cosine similarity; 0.0 when either vector has zero norm.
pub fn cosine_similarity(vec1: &[f32], vec2: &[f32]) -> f64 {
    if vec1.len() != vec2.len() {
        return 0.0;
    }

    let dot_product: f64 = vec1
        .iter()
        .zip(vec2)
        .map(|(a, b)| f64::from(*a) * f64::from(*b))
        .sum();
    let norm1: f64 = vec1.iter().map(|x| f64::from(*x).powi(2)).sum::<f64>().sqrt();
    let norm2: f64 = vec2.iter().map(|x| f64::from(*x).powi(2)).sum::<f64>().sqrt();

    if norm1 == 0.0 || norm2 == 0.0 {
        0.0
    } else {
        dot_product / (norm1 * norm2)
    }
}
