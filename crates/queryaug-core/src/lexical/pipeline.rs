//! NLP pipeline boundary

use crate::error::Result;

/// One analyzed token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub lemma: String,
    /// Part-of-speech tag (Penn Treebank or Universal Dependencies)
    pub tag: String,
}

impl Token {
    pub fn new(text: impl Into<String>, lemma: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            lemma: lemma.into(),
            tag: tag.into(),
        }
    }
}

/// Per-language tokenizer, lemmatizer, tagger, and word-vector space.
///
/// Implementations are read-only after construction and may be shared
/// across concurrent workers.
pub trait Pipeline: Send + Sync {
    /// Language code this pipeline was loaded for
    fn lang(&self) -> &str;

    /// Split text into analyzed tokens
    fn tokenize(&self, text: &str) -> Result<Vec<Token>>;

    /// Embedding of a single token, if the vocabulary has one
    fn embed(&self, token_text: &str) -> Option<Vec<f32>>;

    /// Approximate `k` nearest vocabulary entries for each query vector.
    ///
    /// Returns `(vocabulary index, similarity)` pairs, one list per input vector.
    fn nearest(&self, vectors: &[Vec<f32>], k: usize) -> Vec<Vec<(usize, f32)>>;

    /// Vocabulary word at an index returned by [`Pipeline::nearest`]
    fn word(&self, index: usize) -> Option<&str>;
}
