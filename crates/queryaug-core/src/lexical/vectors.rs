//! Word vectors with HNSW nearest-neighbour search

use crate::error::{AugmentError, Result};
use instant_distance::{Builder, HnswMap, Search};
use std::collections::HashMap;
use std::io::BufRead;
use std::path::Path;

/// Minimum vocabulary size to justify building an ANN index.
/// Below this threshold, brute-force is fast enough.
const ANN_THRESHOLD: usize = 1000;

/// Wrapper for f32 vectors implementing instant_distance::Point
#[derive(Clone)]
struct WordPoint {
    values: Vec<f32>,
}

impl instant_distance::Point for WordPoint {
    fn distance(&self, other: &Self) -> f32 {
        // Cosine distance = 1.0 - cosine_similarity
        1.0 - cosine_similarity(&self.values, &other.values)
    }
}

/// Vocabulary of word embeddings
pub struct WordVectors {
    words: Vec<String>,
    vectors: Vec<Vec<f32>>,
    lookup: HashMap<String, usize>,
    dimensions: usize,
    ann: Option<HnswMap<WordPoint, usize>>,
}

impl WordVectors {
    /// Build from `(word, vector)` pairs. Later duplicates of a word are ignored.
    pub fn from_entries(entries: Vec<(String, Vec<f32>)>) -> Result<Self> {
        let mut words = Vec::with_capacity(entries.len());
        let mut vectors = Vec::with_capacity(entries.len());
        let mut lookup = HashMap::with_capacity(entries.len());
        let mut dimensions = 0;

        for (word, vector) in entries {
            if dimensions == 0 {
                dimensions = vector.len();
            } else if vector.len() != dimensions {
                return Err(AugmentError::InvalidInput(format!(
                    "vector for '{}' has {} dimensions, expected {}",
                    word,
                    vector.len(),
                    dimensions
                )));
            }
            if lookup.contains_key(&word) {
                continue;
            }
            lookup.insert(word.clone(), words.len());
            words.push(word);
            vectors.push(vector);
        }

        let ann = if words.len() >= ANN_THRESHOLD {
            let points: Vec<WordPoint> = vectors
                .iter()
                .map(|values| WordPoint {
                    values: values.clone(),
                })
                .collect();
            let ids: Vec<usize> = (0..words.len()).collect();
            tracing::info!("Built ANN index with {} word vectors", words.len());
            Some(Builder::default().build(points, ids))
        } else {
            tracing::debug!(
                "Skipping ANN index build: {} words < {} threshold",
                words.len(),
                ANN_THRESHOLD
            );
            None
        };

        Ok(Self {
            words,
            vectors,
            lookup,
            dimensions,
            ann,
        })
    }

    /// Load a word2vec/GloVe text file
    pub fn load(path: &Path) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        Self::parse(std::io::BufReader::new(file))
    }

    /// Parse word2vec/GloVe text format.
    ///
    /// Each line is a word followed by its components. A leading
    /// `count dims` header line is skipped.
    pub fn parse(reader: impl BufRead) -> Result<Self> {
        let mut entries = Vec::new();

        for (line_no, line) in reader.lines().enumerate() {
            let line = line?;
            let mut fields = line.split_whitespace();
            let Some(word) = fields.next() else {
                continue;
            };
            let rest: Vec<&str> = fields.collect();

            if line_no == 0 && rest.len() == 1 && is_header(word, rest[0]) {
                continue;
            }

            let vector = rest
                .iter()
                .map(|f| f.parse::<f32>())
                .collect::<std::result::Result<Vec<f32>, _>>()
                .map_err(|e| {
                    AugmentError::InvalidInput(format!("line {}: {}", line_no + 1, e))
                })?;
            if vector.is_empty() {
                return Err(AugmentError::InvalidInput(format!(
                    "line {}: word '{}' has no vector",
                    line_no + 1,
                    word
                )));
            }
            entries.push((word.to_string(), vector));
        }

        Self::from_entries(entries)
    }

    pub fn get(&self, word: &str) -> Option<&[f32]> {
        self.lookup.get(word).map(|&i| self.vectors[i].as_slice())
    }

    pub fn word(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }

    /// `k` most similar vocabulary entries as `(index, cosine_similarity)`
    pub fn most_similar(&self, query: &[f32], k: usize) -> Vec<(usize, f32)> {
        if k == 0 || self.words.is_empty() {
            return vec![];
        }

        if let Some(map) = &self.ann {
            let query_point = WordPoint {
                values: query.to_vec(),
            };
            let mut search = Search::default();
            return map
                .search(&query_point, &mut search)
                .take(k)
                .map(|item| (*item.value, 1.0 - item.distance))
                .collect();
        }

        let mut scored: Vec<(usize, f32)> = self
            .vectors
            .iter()
            .enumerate()
            .map(|(i, v)| (i, cosine_similarity(query, v)))
            .collect();
        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        scored.truncate(k);
        scored
    }

    /// Whether the HNSW index has been built
    pub fn is_indexed(&self) -> bool {
        self.ann.is_some()
    }

    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

fn is_header(first: &str, second: &str) -> bool {
    first.parse::<usize>().is_ok() && second.parse::<usize>().is_ok()
}

/// Cosine similarity of two equal-length vectors; 0.0 when undefined
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot / (norm_a * norm_b)
}
