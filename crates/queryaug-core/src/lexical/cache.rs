//! Process-wide pipeline cache, initialized once per language

use super::Pipeline;
use crate::error::{AugmentError, Result};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Loaded pipelines keyed by language code
pub struct PipelineCache {
    pipelines: RwLock<HashMap<String, Arc<dyn Pipeline>>>,
}

impl PipelineCache {
    pub fn new() -> Self {
        Self {
            pipelines: RwLock::new(HashMap::new()),
        }
    }

    /// Get a loaded pipeline
    pub fn get(&self, lang: &str) -> Option<Arc<dyn Pipeline>> {
        let pipelines = self.pipelines.read().ok()?;
        pipelines.get(lang).cloned()
    }

    /// Get the pipeline for `lang`, running `load` only if none is cached.
    ///
    /// A failed load leaves the cache untouched for that language.
    pub fn get_or_load<F>(&self, lang: &str, load: F) -> Result<Arc<dyn Pipeline>>
    where
        F: FnOnce() -> Result<Arc<dyn Pipeline>>,
    {
        if let Some(pipeline) = self.get(lang) {
            tracing::debug!("Pipeline cache hit for '{}'", lang);
            return Ok(pipeline);
        }

        let mut pipelines = self.pipelines.write().map_err(|e| AugmentError::PipelineLoad {
            lang: lang.to_string(),
            reason: format!("pipeline cache lock poisoned: {}", e),
        })?;

        // Another caller may have loaded it while we waited for the lock
        if let Some(pipeline) = pipelines.get(lang) {
            return Ok(Arc::clone(pipeline));
        }

        let pipeline = load()?;
        pipelines.insert(lang.to_string(), Arc::clone(&pipeline));
        Ok(pipeline)
    }

    /// Cached language codes, sorted
    pub fn languages(&self) -> Vec<String> {
        let mut langs: Vec<String> = self
            .pipelines
            .read()
            .map(|p| p.keys().cloned().collect())
            .unwrap_or_default();
        langs.sort();
        langs
    }

    pub fn len(&self) -> usize {
        self.pipelines.read().map(|p| p.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for PipelineCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexical::{Lexicon, LocalPipeline, WordVectors};
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn tiny_pipeline(lang: &str) -> Arc<dyn Pipeline> {
        let vectors = WordVectors::parse("a 1.0 0.0\n".as_bytes()).unwrap();
        Arc::new(LocalPipeline::new(lang, Lexicon::new("NN"), vectors))
    }

    #[test]
    fn test_loads_once_per_language() {
        let cache = PipelineCache::new();
        let loads = AtomicUsize::new(0);

        for _ in 0..3 {
            let p = cache
                .get_or_load("en", || {
                    loads.fetch_add(1, Ordering::SeqCst);
                    Ok(tiny_pipeline("en"))
                })
                .unwrap();
            assert_eq!(p.lang(), "en");
        }

        assert_eq!(loads.load(Ordering::SeqCst), 1);
        assert_eq!(cache.languages(), vec!["en".to_string()]);
    }

    #[test]
    fn test_failed_load_is_not_cached() {
        let cache = PipelineCache::new();
        let err = cache.get_or_load("de", || {
            Err(AugmentError::PipelineLoad {
                lang: "de".to_string(),
                reason: "missing".to_string(),
            })
        });
        assert!(err.is_err());
        assert!(cache.is_empty());

        cache.get_or_load("de", || Ok(tiny_pipeline("de"))).unwrap();
        assert_eq!(cache.len(), 1);
    }
}
