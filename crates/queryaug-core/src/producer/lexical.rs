//! Producer backed by local NLP pipelines

use super::{Producer, RawOutput};
use crate::error::{AugmentError, Result};
use crate::lexical::{lemmatize, synonym_replace, Pipeline, DEFAULT_NEIGHBORS};
use crate::query::{Query, QueryVariant, QueryVariantSet, VariantType};
use async_trait::async_trait;
use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

/// Kinds the lexical backend can produce
pub const LEXICAL_KINDS: [VariantType; 2] = [VariantType::Lemma, VariantType::SynRepl];

/// Lexical producer over one pipeline per language
pub struct LexicalProducer {
    pipelines: HashMap<String, Arc<dyn Pipeline>>,
    kinds: Vec<VariantType>,
    neighbors: usize,
}

impl LexicalProducer {
    /// Create over loaded pipelines. Kinds keep their requested order.
    pub fn new(
        pipelines: HashMap<String, Arc<dyn Pipeline>>,
        kinds: impl IntoIterator<Item = VariantType>,
    ) -> Self {
        let mut requested = Vec::new();
        for kind in kinds {
            if !requested.contains(&kind) {
                requested.push(kind);
            }
        }

        Self {
            pipelines,
            kinds: requested,
            neighbors: DEFAULT_NEIGHBORS,
        }
    }

    /// Set the neighbour count used for synonym replacement
    pub fn with_neighbors(mut self, neighbors: usize) -> Self {
        self.neighbors = neighbors;
        self
    }

    pub fn kinds(&self) -> &[VariantType] {
        &self.kinds
    }

    /// Requested kinds this backend cannot produce
    pub fn unsupported_kinds(&self) -> Vec<VariantType> {
        Self::unsupported_in(&self.kinds)
    }

    /// Kinds in `kinds` outside [`LEXICAL_KINDS`], in the order given
    pub fn unsupported_in(kinds: &[VariantType]) -> Vec<VariantType> {
        kinds
            .iter()
            .copied()
            .filter(|k| !LEXICAL_KINDS.contains(k))
            .collect()
    }

    fn pipeline(&self, lang: &str) -> Result<&dyn Pipeline> {
        self.pipelines
            .get(lang)
            .map(|p| p.as_ref())
            .ok_or_else(|| {
                AugmentError::Config(format!("no lexical pipeline loaded for language '{}'", lang))
            })
    }
}

#[async_trait]
impl Producer for LexicalProducer {
    fn name(&self) -> &str {
        "lexical"
    }

    /// `count` and `target_languages` are ignored; every applicable rewrite is returned.
    async fn process(
        &self,
        query: &Query,
        _count: usize,
        _target_languages: Option<&BTreeSet<String>>,
    ) -> Result<RawOutput> {
        let unsupported = self.unsupported_kinds();
        if !unsupported.is_empty() {
            return Err(AugmentError::UnsupportedVariantKind(unsupported));
        }

        let pipeline = self.pipeline(&query.lang)?;
        let mut output = QueryVariant::from_query(query);

        for kind in &self.kinds {
            tracing::debug!("Applying {}, lang={}: {}", kind, query.lang, query.original);
            let variants = match kind {
                VariantType::Lemma => lemmatize(pipeline, &query.lang, &query.original)?,
                VariantType::SynRepl => {
                    synonym_replace(pipeline, &query.lang, &query.original, self.neighbors)?
                }
                other => return Err(AugmentError::UnsupportedVariantKind(vec![*other])),
            };
            output.extend_variants(variants);
        }

        Ok(RawOutput::Variant(output))
    }

    fn parse_output(&self, raw: RawOutput) -> Result<QueryVariantSet> {
        match raw {
            RawOutput::Variant(variant) => Ok(QueryVariantSet::single(variant)),
            RawOutput::Completion(_) => Err(AugmentError::InvalidInput(
                "lexical producer cannot parse generative output".to_string(),
            )),
        }
    }
}
