use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;

use ragcheck_core::{RagCheckError, Scorer};

use crate::backend::{ScorerBackend, ScorerRequest, ScorerResponse};

const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";

/// Configuration for the Groq-backed scorer. The model is bound per call
/// by the evaluators, not here.
#[derive(Debug, Clone)]
pub struct GroqScorerConfig {
    pub api_key: String,
    pub base_url: String,
    /// Scoring calls want determinism; defaults to 0.0.
    pub temperature: f64,
}

impl GroqScorerConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            temperature: 0.0,
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }
}

/// Scorer backed by Groq's OpenAI-compatible chat completions endpoint.
pub struct GroqScorer {
    config: GroqScorerConfig,
    backend: Arc<dyn ScorerBackend>,
}

impl GroqScorer {
    pub fn new(config: GroqScorerConfig, backend: Arc<dyn ScorerBackend>) -> Self {
        Self { config, backend }
    }

    fn build_request(&self, prompt: &str, model: &str) -> ScorerRequest {
        ScorerRequest {
            url: format!("{}/chat/completions", self.config.base_url),
            headers: vec![
                (
                    "Authorization".to_string(),
                    format!("Bearer {}", self.config.api_key),
                ),
                ("Content-Type".to_string(), "application/json".to_string()),
            ],
            body: json!({
                "model": model,
                "messages": [{"role": "user", "content": prompt}],
                "temperature": self.config.temperature,
            }),
        }
    }
}

fn parse_response(resp: &ScorerResponse) -> Result<String, RagCheckError> {
    if resp.status == 429 {
        let msg = resp.body["error"]["message"]
            .as_str()
            .unwrap_or("rate limited")
            .to_string();
        return Err(RagCheckError::RateLimit(msg));
    }
    if resp.status >= 400 {
        let msg = resp.body["error"]["message"]
            .as_str()
            .unwrap_or("unknown API error")
            .to_string();
        return Err(RagCheckError::Scorer(format!(
            "Groq API error ({}): {msg}",
            resp.status
        )));
    }

    Ok(resp.body["choices"][0]["message"]["content"]
        .as_str()
        .unwrap_or("")
        .trim()
        .to_string())
}

#[async_trait]
impl Scorer for GroqScorer {
    async fn evaluate(&self, prompt: &str, model: &str) -> Result<String, RagCheckError> {
        let request = self.build_request(prompt, model);
        let response = self.backend.send(request).await?;
        parse_response(&response)
    }
}
