use std::sync::Mutex;

use async_trait::async_trait;

use ragcheck_core::{RagCheckError, Scorer};

/// Deterministic scorer for tests and offline runs.
///
/// Routes on prompt content rather than call order, so it stays
/// deterministic when evaluators run concurrently: the first rule whose
/// needle occurs in the prompt wins, otherwise the default response is
/// returned. Every prompt is recorded.
pub struct ScriptedScorer {
    rules: Vec<(String, String)>,
    default_response: String,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedScorer {
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            default_response: String::new(),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Set the response returned when no rule matches (defaults to the
    /// empty string, i.e. a scorer outage).
    pub fn with_default(mut self, response: impl Into<String>) -> Self {
        self.default_response = response.into();
        self
    }

    /// Add a routing rule: prompts containing `needle` get `response`.
    pub fn rule(mut self, needle: impl Into<String>, response: impl Into<String>) -> Self {
        self.rules.push((needle.into(), response.into()));
        self
    }

    /// Prompts seen so far, in call order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().expect("scripted scorer lock").clone()
    }

    pub fn call_count(&self) -> usize {
        self.prompts.lock().expect("scripted scorer lock").len()
    }
}

impl Default for ScriptedScorer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Scorer for ScriptedScorer {
    async fn evaluate(&self, prompt: &str, _model: &str) -> Result<String, RagCheckError> {
        self.prompts
            .lock()
            .expect("scripted scorer lock")
            .push(prompt.to_string());

        let response = self
            .rules
            .iter()
            .find(|(needle, _)| prompt.contains(needle))
            .map(|(_, response)| response.clone())
            .unwrap_or_else(|| self.default_response.clone());

        Ok(response)
    }
}
