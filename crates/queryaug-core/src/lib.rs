//! Queryaug Core Library
//!
//! Expands seed search queries into linguistic variants for training and
//! evaluation data.
//!
//! # Features
//! - Closed variant taxonomy with prompt descriptions and CLI tokens
//! - Generative backend over an OpenAI-compatible structured-output API
//! - Lexical backend: lemmatization and word-vector synonym replacement
//! - Per-language pipeline cache, loaded once and shared read-only
//! - Sequential and concurrent batch augmentation, set merging, validation

pub mod augment;
pub mod config;
pub mod error;
pub mod lexical;
pub mod llm;
pub mod producer;
pub mod query;
pub mod validate;

pub use augment::{augment, augment_concurrent, augment_with_progress, merge, AugmentProgress};
pub use config::{Config, LLMServiceConfig, LanguageConfig};
pub use error::{AugmentError, Error, Result};
pub use lexical::{LocalPipeline, Pipeline, PipelineCache, Token};
pub use llm::{ChatMessage, HttpLLMClient, LLMClient, QueryGenerator, ResponseSchema};
pub use producer::{
    Backend, GenerativeProducer, LexicalProducer, Producer, ProducerFactory, RawOutput,
};
pub use query::{
    JsonDocument, Mergeable, Query, QuerySet, QueryVariant, QueryVariantSet, VariantElement,
    VariantType,
};
pub use validate::{validate_variants, IssueKind, ValidationIssue};

/// Default config directory name
pub const CONFIG_DIR_NAME: &str = "queryaug";
