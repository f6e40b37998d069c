//! Seed query generation via an external LLM service

use super::client::extract_json;
use super::{ChatMessage, LLMClient, ResponseSchema};
use crate::error::{AugmentError, Result};
use crate::query::QuerySet;
use std::sync::Arc;

/// Generates seed search queries for a topic
pub struct QueryGenerator {
    client: Arc<dyn LLMClient>,
}

impl QueryGenerator {
    /// Create from LLM client
    pub fn new(client: Arc<dyn LLMClient>) -> Self {
        Self { client }
    }

    /// Ask for `count` queries a real user would type when searching for `topic`
    pub async fn generate(&self, topic: &str, langs: &[String], count: usize) -> Result<QuerySet> {
        if langs.is_empty() {
            return Err(AugmentError::InvalidInput(
                "at least one language is required to generate queries".to_string(),
            ));
        }

        let prompt = build_generation_prompt(topic, langs, count);
        tracing::info!("Generating {} queries for topic '{}'", count, topic);
        tracing::debug!("Prompt: {}", prompt);

        let schema = ResponseSchema::query_set();
        let response = self
            .client
            .chat_completion(vec![ChatMessage::developer(prompt)], Some(&schema))
            .await
            .map_err(into_generation_failure)?;

        serde_json::from_str(extract_json(&response)).map_err(|e| {
            tracing::debug!("Raw LLM response: {}", response);
            AugmentError::Generation(format!("response does not match QuerySet: {}", e))
        })
    }
}

fn build_generation_prompt(topic: &str, langs: &[String], count: usize) -> String {
    format!(
        "Generate {} sample search queries in {} language the real user would use to search for {}",
        count,
        langs.join(", "),
        topic
    )
}

/// Wrap service-side failures as generation failures; config errors pass through
pub(crate) fn into_generation_failure(err: AugmentError) -> AugmentError {
    match err {
        AugmentError::Generation(_) | AugmentError::Config(_) => err,
        other => AugmentError::Generation(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct CannedClient(String);

    #[async_trait]
    impl LLMClient for CannedClient {
        async fn chat_completion(
            &self,
            messages: Vec<ChatMessage>,
            schema: Option<&ResponseSchema>,
        ) -> Result<String> {
            assert_eq!(messages[0].role, "developer");
            assert_eq!(schema.unwrap().name, "QuerySet");
            Ok(self.0.clone())
        }

        fn model_name(&self) -> &str {
            "canned"
        }
    }

    #[test]
    fn test_generation_prompt() {
        let prompt = build_generation_prompt(
            "christmas gifts",
            &["en".to_string(), "de".to_string()],
            5,
        );
        assert_eq!(
            prompt,
            "Generate 5 sample search queries in en, de language the real user would use to search for christmas gifts"
        );
    }

    #[tokio::test]
    async fn test_generate_parses_query_set() {
        let client = CannedClient(
            r#"{"queries": [{"original": "best gifts for dad", "lang": "en"}]}"#.to_string(),
        );
        let generator = QueryGenerator::new(Arc::new(client));
        let set = generator
            .generate("gifts", &["en".to_string()], 1)
            .await
            .unwrap();
        assert_eq!(set.queries.len(), 1);
        assert_eq!(set.queries[0].original, "best gifts for dad");
    }

    #[tokio::test]
    async fn test_generate_rejects_invalid_json() {
        let generator = QueryGenerator::new(Arc::new(CannedClient("not json".to_string())));
        let err = generator
            .generate("gifts", &["en".to_string()], 1)
            .await
            .unwrap_err();
        assert!(matches!(err, AugmentError::Generation(_)));
    }
}
