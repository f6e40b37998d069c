//! Variant producers
//!
//! A producer turns one query into variants. Two backends exist: a
//! generative one that asks an external LLM, and a lexical one that derives
//! variants from a local NLP pipeline.

mod factory;
mod generative;
mod lexical;

pub use factory::{Backend, ProducerFactory};
pub use generative::GenerativeProducer;
pub use lexical::{LexicalProducer, LEXICAL_KINDS};

use crate::error::Result;
use crate::query::{Query, QueryVariant, QueryVariantSet};
use async_trait::async_trait;
use std::collections::BTreeSet;

/// Backend-specific result of [`Producer::process`]
#[derive(Debug, Clone, PartialEq)]
pub enum RawOutput {
    /// Unparsed structured-output response from the LLM
    Completion(String),
    /// Already-typed variants from a local pipeline
    Variant(QueryVariant),
}

/// Turns a query into variants
#[async_trait]
pub trait Producer: Send + Sync {
    /// Backend name for logging
    fn name(&self) -> &str;

    /// Request roughly `count` new variants of `query`.
    ///
    /// `target_languages` overrides the producer's own translation targets.
    async fn process(
        &self,
        query: &Query,
        count: usize,
        target_languages: Option<&BTreeSet<String>>,
    ) -> Result<RawOutput>;

    /// Normalize a raw result into the canonical container
    fn parse_output(&self, raw: RawOutput) -> Result<QueryVariantSet>;
}
