//! Pipeline backed by local word vectors and a lexicon

use super::{Lexicon, Pipeline, Token, WordVectors};
use crate::config::LanguageConfig;
use crate::error::{AugmentError, Result};
use unicode_segmentation::UnicodeSegmentation;

/// Unicode word-boundary tokenizer with lexicon tagging and vector search
pub struct LocalPipeline {
    lang: String,
    lexicon: Lexicon,
    vectors: WordVectors,
}

impl LocalPipeline {
    pub fn new(lang: impl Into<String>, lexicon: Lexicon, vectors: WordVectors) -> Self {
        Self {
            lang: lang.into(),
            lexicon,
            vectors,
        }
    }

    /// Load vectors and lexicon from the language's configured files
    pub fn load(lang: &str, config: &LanguageConfig) -> Result<Self> {
        let load_failure = |what: &str, err: AugmentError| AugmentError::PipelineLoad {
            lang: lang.to_string(),
            reason: format!("{}: {}", what, err),
        };

        tracing::info!(
            "Loading word vectors for '{}' from {}",
            lang,
            config.vectors.display()
        );
        let vectors = WordVectors::load(&config.vectors)
            .map_err(|e| load_failure(&config.vectors.display().to_string(), e))?;
        if vectors.is_empty() {
            return Err(AugmentError::PipelineLoad {
                lang: lang.to_string(),
                reason: format!("{} contains no word vectors", config.vectors.display()),
            });
        }

        let lexicon = match &config.lexicon {
            Some(path) => Lexicon::load(path, config.default_tag.clone())
                .map_err(|e| load_failure(&path.display().to_string(), e))?,
            None => {
                tracing::warn!("No lexicon configured for '{}', using fallback tagging", lang);
                Lexicon::new(config.default_tag.clone())
            }
        };

        tracing::info!(
            "Pipeline '{}' ready: {} words ({} dims), {} lexicon entries",
            lang,
            vectors.len(),
            vectors.dimensions(),
            lexicon.len()
        );
        Ok(Self::new(lang, lexicon, vectors))
    }
}

impl Pipeline for LocalPipeline {
    fn lang(&self) -> &str {
        &self.lang
    }

    fn tokenize(&self, text: &str) -> Result<Vec<Token>> {
        Ok(text
            .split_word_bounds()
            .filter(|segment| !segment.trim().is_empty())
            .map(|segment| {
                let (lemma, tag) = self.lexicon.analyze(segment);
                Token::new(segment, lemma, tag)
            })
            .collect())
    }

    fn embed(&self, token_text: &str) -> Option<Vec<f32>> {
        self.vectors
            .get(token_text)
            .or_else(|| self.vectors.get(&token_text.to_lowercase()))
            .map(<[f32]>::to_vec)
    }

    fn nearest(&self, vectors: &[Vec<f32>], k: usize) -> Vec<Vec<(usize, f32)>> {
        vectors
            .iter()
            .map(|v| self.vectors.most_similar(v, k))
            .collect()
    }

    fn word(&self, index: usize) -> Option<&str> {
        self.vectors.word(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn pipeline() -> LocalPipeline {
        let vectors = WordVectors::parse(
            "gift 0.0 1.0\npresent 0.1 0.99\nkids 1.0 0.0\nchildren 0.98 0.05\n".as_bytes(),
        )
        .unwrap();
        let lexicon = Lexicon::parse("gifts\tgift\tNNS\nfor\tfor\tIN\n", "NN").unwrap();
        LocalPipeline::new("en", lexicon, vectors)
    }

    #[test]
    fn test_tokenize_drops_whitespace_keeps_punctuation() {
        let tokens = pipeline().tokenize("gifts for kids!").unwrap();
        let texts: Vec<_> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["gifts", "for", "kids", "!"]);
        assert_eq!(tokens[0].lemma, "gift");
        assert_eq!(tokens[1].tag, "IN");
        assert_eq!(tokens[3].tag, "PUNCT");
    }

    #[test]
    fn test_embed_falls_back_to_lowercase() {
        let p = pipeline();
        assert!(p.embed("Kids").is_some());
        assert!(p.embed("unknown").is_none());
    }

    #[test]
    fn test_nearest_is_batched() {
        let p = pipeline();
        let queries = vec![p.embed("gift").unwrap(), p.embed("kids").unwrap()];
        let result = p.nearest(&queries, 2);
        assert_eq!(result.len(), 2);
        assert_eq!(p.word(result[0][1].0), Some("present"));
        assert_eq!(p.word(result[1][1].0), Some("children"));
    }

    #[test]
    fn test_load_missing_vectors_is_pipeline_failure() {
        let config = LanguageConfig {
            vectors: PathBuf::from("/nonexistent/vectors.txt"),
            lexicon: None,
            default_tag: "NN".to_string(),
        };
        let err = LocalPipeline::load("xx", &config).err().unwrap();
        assert!(matches!(err, AugmentError::PipelineLoad { ref lang, .. } if lang == "xx"));
    }
}
