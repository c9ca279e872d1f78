use std::path::PathBuf;

use ragcheck::core::RagCheckError;
use ragcheck::pipeline::DEFAULT_MODEL;

/// Runtime configuration read from the environment.
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub api_key: String,
    pub relevance_model: String,
    pub hallucination_model: String,
    pub enable_caching: bool,
    pub cache_dir: PathBuf,
}

impl CliConfig {
    pub fn from_env() -> Result<Self, RagCheckError> {
        let api_key = std::env::var("GROQ_API_KEY").map_err(|_| {
            RagCheckError::Config("GROQ_API_KEY environment variable is not set".into())
        })?;

        let relevance_model = env_or("RAGCHECK_MODEL_RELEVANCE", DEFAULT_MODEL);
        let hallucination_model = env_or("RAGCHECK_MODEL_HALLUCINATION", DEFAULT_MODEL);
        let enable_caching = env_or("RAGCHECK_ENABLE_CACHING", "true").to_lowercase() == "true";
        let cache_dir = PathBuf::from(env_or("RAGCHECK_CACHE_DIR", ".cache"));

        Ok(Self {
            api_key,
            relevance_model,
            hallucination_model,
            enable_caching,
            cache_dir,
        })
    }
}

fn env_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}
