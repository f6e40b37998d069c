//! Backend selection

use super::{GenerativeProducer, LexicalProducer, Producer};
use crate::config::Config;
use crate::error::{AugmentError, Result};
use crate::lexical::{LocalPipeline, Pipeline, PipelineCache};
use crate::llm::{HttpLLMClient, LLMClient};
use crate::query::VariantType;
use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Augmentation backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Generative,
    Lexical,
}

impl FromStr for Backend {
    type Err = AugmentError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "generative" | "openai" => Ok(Self::Generative),
            "lexical" | "spacy" => Ok(Self::Lexical),
            other => Err(AugmentError::UnknownBackend(other.to_string())),
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Generative => f.write_str("generative"),
            Self::Lexical => f.write_str("lexical"),
        }
    }
}

/// Builds producers from configuration and a shared pipeline cache
pub struct ProducerFactory {
    config: Config,
    cache: Arc<PipelineCache>,
    llm_client: Option<Arc<dyn LLMClient>>,
}

impl ProducerFactory {
    pub fn new(config: Config, cache: Arc<PipelineCache>) -> Self {
        Self {
            config,
            cache,
            llm_client: None,
        }
    }

    /// Use this client instead of building one from configuration
    pub fn with_llm_client(mut self, client: Arc<dyn LLMClient>) -> Self {
        self.llm_client = Some(client);
        self
    }

    /// Select a producer by backend name.
    ///
    /// `languages` are the input's languages for the lexical backend and the
    /// translation targets for the generative one.
    pub fn select(
        &self,
        backend_name: &str,
        kinds: &[VariantType],
        languages: &BTreeSet<String>,
    ) -> Result<Arc<dyn Producer>> {
        let backend: Backend = backend_name.parse()?;
        self.select_backend(backend, kinds, languages)
    }

    pub fn select_backend(
        &self,
        backend: Backend,
        kinds: &[VariantType],
        languages: &BTreeSet<String>,
    ) -> Result<Arc<dyn Producer>> {
        tracing::info!(
            "Selecting {} backend for kinds [{}]",
            backend,
            kinds.iter().map(|k| k.token()).collect::<Vec<_>>().join(", ")
        );

        match backend {
            Backend::Lexical => {
                let unsupported = LexicalProducer::unsupported_in(kinds);
                if !unsupported.is_empty() {
                    return Err(AugmentError::UnsupportedVariantKind(unsupported));
                }

                let pipelines = self.load_pipelines(languages)?;
                let producer = LexicalProducer::new(pipelines, kinds.iter().copied())
                    .with_neighbors(self.config.neighbors);
                Ok(Arc::new(producer))
            }
            Backend::Generative => {
                let client = match &self.llm_client {
                    Some(client) => Arc::clone(client),
                    None => Arc::new(HttpLLMClient::new(self.config.llm_service.clone())?),
                };
                Ok(Arc::new(GenerativeProducer::new(
                    client,
                    kinds.iter().copied(),
                    languages.iter().cloned(),
                )))
            }
        }
    }

    /// Load (or reuse) one pipeline per language.
    ///
    /// Every language is attempted; a failure does not stop the others from
    /// loading into the cache. The first failure is returned afterwards.
    pub fn load_pipelines(
        &self,
        languages: &BTreeSet<String>,
    ) -> Result<HashMap<String, Arc<dyn Pipeline>>> {
        let mut pipelines = HashMap::new();
        let mut first_failure = None;

        for lang in languages {
            let loaded = self.cache.get_or_load(lang, || {
                let lang_config =
                    self.config
                        .language(lang)
                        .ok_or_else(|| AugmentError::PipelineLoad {
                            lang: lang.clone(),
                            reason: "no model configured for this language".to_string(),
                        })?;
                let pipeline: Arc<dyn Pipeline> = Arc::new(LocalPipeline::load(lang, lang_config)?);
                Ok(pipeline)
            });

            match loaded {
                Ok(pipeline) => {
                    pipelines.insert(lang.clone(), pipeline);
                }
                Err(e) => {
                    tracing::error!("{}", e);
                    first_failure.get_or_insert(e);
                }
            }
        }

        match first_failure {
            Some(e) => Err(e),
            None => Ok(pipelines),
        }
    }
}
