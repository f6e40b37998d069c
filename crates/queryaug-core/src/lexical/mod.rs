//! Lexical backend
//!
//! Derives variants deterministically from a per-language NLP pipeline:
//! tokenization, lemmas, part-of-speech tags, and word-vector neighbours.

mod cache;
mod lexicon;
mod local;
mod pipeline;
mod primitives;
mod vectors;

pub use cache::PipelineCache;
pub use lexicon::Lexicon;
pub use local::LocalPipeline;
pub use pipeline::{Pipeline, Token};
pub use primitives::{
    is_substitutable, lemmatize, similar_of, synonym_replace, word_joiner, DEFAULT_NEIGHBORS,
};
pub use vectors::{cosine_similarity, WordVectors};
