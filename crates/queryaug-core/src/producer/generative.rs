//! Producer that asks an external LLM for variants

use super::{Producer, RawOutput};
use crate::error::{AugmentError, Result};
use crate::llm::{extract_json, into_generation_failure, ChatMessage, LLMClient, ResponseSchema};
use crate::query::{Query, QueryVariantSet, VariantType};
use async_trait::async_trait;
use std::collections::BTreeSet;
use std::sync::Arc;

/// Generative-model producer
pub struct GenerativeProducer {
    client: Arc<dyn LLMClient>,
    kinds: Vec<VariantType>,
    target_languages: BTreeSet<String>,
    schema: ResponseSchema,
}

impl GenerativeProducer {
    /// Create over the requested kinds; target languages are only used for translation
    pub fn new(
        client: Arc<dyn LLMClient>,
        kinds: impl IntoIterator<Item = VariantType>,
        target_languages: impl IntoIterator<Item = String>,
    ) -> Self {
        let mut requested = Vec::new();
        for kind in kinds {
            if !requested.contains(&kind) {
                requested.push(kind);
            }
        }

        Self {
            client,
            kinds: requested,
            target_languages: target_languages.into_iter().collect(),
            schema: ResponseSchema::query_variant_set(),
        }
    }

    pub fn kinds(&self) -> &[VariantType] {
        &self.kinds
    }

    /// Build the instruction sent to the model
    pub fn build_prompt(
        &self,
        original: &str,
        count: usize,
        target_languages: Option<&BTreeSet<String>>,
    ) -> Result<String> {
        let targets: Vec<String> = target_languages
            .unwrap_or(&self.target_languages)
            .iter()
            .cloned()
            .collect();

        let descriptions: Vec<String> = self
            .kinds
            .iter()
            .flat_map(|kind| kind.describe(Some(targets.as_slice())))
            .collect();

        let variants = match descriptions.as_slice() {
            [] => {
                return Err(AugmentError::InvalidInput(
                    "no variant kinds to request (translation needs target languages)"
                        .to_string(),
                ))
            }
            [single] => single.clone(),
            many => {
                let numbered: Vec<String> = many
                    .iter()
                    .enumerate()
                    .map(|(i, d)| format!("[{}] {}", i + 1, d))
                    .collect();
                format!("{} randomly", numbered.join(", "))
            }
        };

        Ok(format!(
            "Generate {} additional search queries from \"{}\" by applying {}",
            count, original, variants
        ))
    }
}

#[async_trait]
impl Producer for GenerativeProducer {
    fn name(&self) -> &str {
        "generative"
    }

    async fn process(
        &self,
        query: &Query,
        count: usize,
        target_languages: Option<&BTreeSet<String>>,
    ) -> Result<RawOutput> {
        let prompt = self.build_prompt(&query.original, count, target_languages)?;
        tracing::debug!("Prompt ({}): {}", self.client.model_name(), prompt);

        let response = self
            .client
            .chat_completion(vec![ChatMessage::developer(prompt)], Some(&self.schema))
            .await
            .map_err(into_generation_failure)?;

        Ok(RawOutput::Completion(response))
    }

    fn parse_output(&self, raw: RawOutput) -> Result<QueryVariantSet> {
        match raw {
            RawOutput::Completion(response) => serde_json::from_str(extract_json(&response))
                .map_err(|e| {
                    tracing::debug!("Raw LLM response: {}", response);
                    AugmentError::Generation(format!(
                        "response does not match QueryVariantSet: {}",
                        e
                    ))
                }),
            RawOutput::Variant(_) => Err(AugmentError::InvalidInput(
                "generative producer cannot parse lexical output".to_string(),
            )),
        }
    }
}
