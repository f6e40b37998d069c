//! LLM integration
//!
//! Provides the chat-completion client trait, an OpenAI-compatible HTTP
//! implementation, structured-output schemas, and seed query generation.

mod client;
mod generator;
mod schema;

pub use client::{APIMetrics, ChatMessage, HttpLLMClient, LLMClient, MetricsSnapshot};
pub(crate) use client::extract_json;
pub use generator::QueryGenerator;
pub(crate) use generator::into_generation_failure;
pub use schema::ResponseSchema;
