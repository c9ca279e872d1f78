use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use ragcheck_core::{PromptCache, RagCheckError};

/// One cache entry per file, named by the blake3 hex of the prompt.
///
/// The stored prompt makes entries inspectable and lets a cache directory
/// be audited by hand. Writes for the same prompt are idempotent, so a
/// concurrent first write of the same key is a benign race.
#[derive(Serialize, Deserialize)]
struct CacheEntry {
    prompt: String,
    response: String,
}

/// Content-addressed on-disk cache: `<dir>/<blake3(prompt)>.json`.
pub struct FileCache {
    dir: PathBuf,
}

impl FileCache {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn entry_path(&self, prompt: &str) -> PathBuf {
        let key = blake3::hash(prompt.as_bytes()).to_hex().to_string();
        self.dir.join(format!("{key}.json"))
    }
}

#[async_trait]
impl PromptCache for FileCache {
    async fn get(&self, prompt: &str) -> Result<Option<String>, RagCheckError> {
        let path = self.entry_path(prompt);
        let text = match tokio::fs::read_to_string(&path).await {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(RagCheckError::Cache(format!(
                    "cannot read {}: {e}",
                    path.display()
                )))
            }
        };

        let entry: CacheEntry = serde_json::from_str(&text).map_err(|e| {
            RagCheckError::Cache(format!("corrupt entry {}: {e}", path.display()))
        })?;
        Ok(Some(entry.response))
    }

    async fn put(&self, prompt: &str, response: &str) -> Result<(), RagCheckError> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| RagCheckError::Cache(format!("cannot create cache dir: {e}")))?;

        let entry = CacheEntry {
            prompt: prompt.to_string(),
            response: response.to_string(),
        };
        let text = serde_json::to_string(&entry)
            .map_err(|e| RagCheckError::Cache(format!("cannot serialize entry: {e}")))?;

        let path = self.entry_path(prompt);
        tokio::fs::write(&path, text)
            .await
            .map_err(|e| RagCheckError::Cache(format!("cannot write {}: {e}", path.display())))
    }

    async fn clear(&self) -> Result<(), RagCheckError> {
        let mut entries = match tokio::fs::read_dir(&self.dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(()),
            Err(e) => return Err(RagCheckError::Cache(format!("cannot list cache dir: {e}"))),
        };

        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| RagCheckError::Cache(format!("cannot list cache dir: {e}")))?
        {
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                tokio::fs::remove_file(&path).await.map_err(|e| {
                    RagCheckError::Cache(format!("cannot remove {}: {e}", path.display()))
                })?;
            }
        }
        Ok(())
    }
}
