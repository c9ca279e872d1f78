use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;

use ragcheck_core::{Evaluator, FeatureSet, RagCheckError, RelevanceMetrics, Scorer};
use ragcheck_prompts::{completeness_prompt, relevance_prompt};
use ragcheck_text::extract_score;

/// Scores relevance and completeness with two independent scorer calls
/// over the same (query, response) pair.
///
/// Each sub-call fails open: an unreachable scorer or an unparsable answer
/// yields 0.0, the most conservative score, and the run continues.
pub struct RelevanceEvaluator {
    scorer: Arc<dyn Scorer>,
    model: String,
}

impl RelevanceEvaluator {
    pub fn new(scorer: Arc<dyn Scorer>, model: impl Into<String>) -> Self {
        Self {
            scorer,
            model: model.into(),
        }
    }

    async fn llm_score(&self, prompt: String) -> f64 {
        let answer = match self.scorer.evaluate(&prompt, &self.model).await {
            Ok(answer) => answer,
            Err(e) => {
                warn!("scorer call failed, scoring 0.0: {e}");
                String::new()
            }
        };
        extract_score(&answer)
    }
}

#[async_trait]
impl Evaluator for RelevanceEvaluator {
    type Metrics = RelevanceMetrics;

    async fn evaluate(&self, features: &FeatureSet) -> Result<RelevanceMetrics, RagCheckError> {
        let relevance_score = self
            .llm_score(relevance_prompt(&features.query, &features.response))
            .await;
        let completeness_score = self
            .llm_score(completeness_prompt(&features.query, &features.response))
            .await;

        Ok(RelevanceMetrics {
            relevance_score,
            completeness_score,
            weighted_relevance: (relevance_score + completeness_score) / 2.0,
        })
    }
}
