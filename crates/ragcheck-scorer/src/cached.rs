use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use ragcheck_core::{PromptCache, RagCheckError, Scorer};

/// Caching wrapper around a scorer: read-before-call, write-after-call,
/// keyed by prompt content.
///
/// Cache failures are downgraded to misses with a warning; scorer failures
/// propagate and are never cached.
pub struct CachedScorer {
    inner: Arc<dyn Scorer>,
    cache: Arc<dyn PromptCache>,
}

impl CachedScorer {
    pub fn new(inner: Arc<dyn Scorer>, cache: Arc<dyn PromptCache>) -> Self {
        Self { inner, cache }
    }
}

#[async_trait]
impl Scorer for CachedScorer {
    async fn evaluate(&self, prompt: &str, model: &str) -> Result<String, RagCheckError> {
        match self.cache.get(prompt).await {
            Ok(Some(cached)) => {
                debug!("cache hit for prompt");
                return Ok(cached);
            }
            Ok(None) => {}
            Err(e) => warn!("cache read failed, treating as miss: {e}"),
        }

        let response = self.inner.evaluate(prompt, model).await?;

        if let Err(e) = self.cache.put(prompt, &response).await {
            warn!("cache write failed: {e}");
        }

        Ok(response)
    }
}
