//! Generate command

use super::write_document;
use crate::app::GenerateArgs;
use anyhow::Result;
use queryaug_core::{Config, HttpLLMClient, QueryGenerator};
use std::sync::Arc;

pub async fn run(args: GenerateArgs, config: &Config) -> Result<()> {
    let client = HttpLLMClient::new(config.llm_service.clone())?;
    let generator = QueryGenerator::new(Arc::new(client));

    let queries = generator
        .generate(&args.topic, &args.langs, args.count)
        .await?;
    eprintln!(
        "Generated {} queries about '{}'",
        queries.queries.len(),
        args.topic
    );

    write_document(&queries, args.output.as_deref())
}
