use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use ragcheck_core::{PromptCache, RagCheckError};

/// Process-local cache, mainly for tests and embedded use.
pub struct InMemoryCache {
    entries: RwLock<HashMap<String, String>>,
}

impl InMemoryCache {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PromptCache for InMemoryCache {
    async fn get(&self, prompt: &str) -> Result<Option<String>, RagCheckError> {
        Ok(self.entries.read().await.get(prompt).cloned())
    }

    async fn put(&self, prompt: &str, response: &str) -> Result<(), RagCheckError> {
        self.entries
            .write()
            .await
            .insert(prompt.to_string(), response.to_string());
        Ok(())
    }

    async fn clear(&self) -> Result<(), RagCheckError> {
        self.entries.write().await.clear();
        Ok(())
    }
}
