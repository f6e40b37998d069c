//! Configuration management

use crate::error::{AugmentError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// LLM service configuration
    #[serde(default)]
    pub llm_service: LLMServiceConfig,

    /// Lexical pipeline configuration keyed by language code
    #[serde(default)]
    pub languages: HashMap<String, LanguageConfig>,

    /// Nearest neighbours requested per token during synonym replacement
    #[serde(default = "default_neighbors")]
    pub neighbors: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            llm_service: LLMServiceConfig::default(),
            languages: HashMap::new(),
            neighbors: default_neighbors(),
        }
    }
}

fn default_neighbors() -> usize {
    4
}

/// LLM service configuration for external inference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LLMServiceConfig {
    /// Base URL of an OpenAI-compatible service
    #[serde(default = "default_url")]
    pub url: String,

    /// Model name for chat completions. No fallback model is chosen.
    #[serde(default = "default_chat_model")]
    pub model: Option<String>,

    /// API key (optional, for authenticated services)
    #[serde(default = "default_api_key")]
    pub api_key: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Sampling temperature
    #[serde(default = "default_temperature")]
    pub temperature: f32,
}

impl LLMServiceConfig {
    /// Model name, or a configuration error when none is set
    pub fn require_model(&self) -> Result<&str> {
        self.model.as_deref().filter(|m| !m.is_empty()).ok_or_else(|| {
            AugmentError::Config(
                "missing LLM model name (set llm_service.model or QUERYAUG_LLM_MODEL)"
                    .to_string(),
            )
        })
    }
}

impl Default for LLMServiceConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            model: default_chat_model(),
            api_key: default_api_key(),
            timeout_secs: default_timeout(),
            temperature: default_temperature(),
        }
    }
}

fn default_url() -> String {
    std::env::var("QUERYAUG_LLM_URL").unwrap_or_else(|_| "https://api.openai.com".to_string())
}

fn default_chat_model() -> Option<String> {
    std::env::var("QUERYAUG_LLM_MODEL")
        .or_else(|_| std::env::var("OPENAI_API_MODEL"))
        .ok()
}

fn default_api_key() -> Option<String> {
    std::env::var("QUERYAUG_LLM_API_KEY")
        .or_else(|_| std::env::var("OPENAI_API_KEY"))
        .ok()
}

fn default_timeout() -> u64 {
    60
}

fn default_temperature() -> f32 {
    0.7
}

/// Per-language lexical pipeline configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageConfig {
    /// Word vectors in word2vec/GloVe text format
    pub vectors: PathBuf,

    /// TSV lexicon of `form<TAB>lemma<TAB>tag`
    #[serde(default)]
    pub lexicon: Option<PathBuf>,

    /// Tag given to words missing from the lexicon
    #[serde(default = "default_tag")]
    pub default_tag: String,
}

fn default_tag() -> String {
    "NN".to_string()
}

impl Config {
    /// Load config from default path
    pub fn load() -> Result<Self> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Config::default())
        }
    }

    /// Load config from an explicit path.
    ///
    /// Relative pipeline paths resolve against the config file's directory.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Config = serde_yaml::from_str(&content)?;
        if let Some(base) = path.parent() {
            config.resolve_paths(base);
        }
        Ok(config)
    }

    /// Get default config path
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(crate::CONFIG_DIR_NAME)
            .join("config.yml")
    }

    /// Pipeline configuration for a language
    pub fn language(&self, lang: &str) -> Option<&LanguageConfig> {
        self.languages.get(lang)
    }

    fn resolve_paths(&mut self, base: &Path) {
        for lang in self.languages.values_mut() {
            if lang.vectors.is_relative() {
                lang.vectors = base.join(&lang.vectors);
            }
            if let Some(lexicon) = lang.lexicon.as_mut() {
                if lexicon.is_relative() {
                    *lexicon = base.join(&*lexicon);
                }
            }
        }
    }
}
