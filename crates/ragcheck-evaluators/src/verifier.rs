use std::sync::Arc;

use tracing::warn;

use ragcheck_core::{ClaimStatus, Scorer};
use ragcheck_prompts::claim_verification_prompt;

/// Verifies one short factual claim against a context string via a
/// scorer call.
pub struct ClaimVerifier {
    scorer: Arc<dyn Scorer>,
    model: String,
}

impl ClaimVerifier {
    pub fn new(scorer: Arc<dyn Scorer>, model: impl Into<String>) -> Self {
        Self {
            scorer,
            model: model.into(),
        }
    }

    /// Classify one claim. A failed scorer call degrades to Unsupported
    /// rather than aborting the run.
    pub async fn verify(&self, claim: &str, context: &str) -> ClaimStatus {
        let prompt = claim_verification_prompt(claim, context);
        let verdict = match self.scorer.evaluate(&prompt, &self.model).await {
            Ok(verdict) => verdict,
            Err(e) => {
                warn!("claim verification call failed, marking unsupported: {e}");
                String::new()
            }
        };
        classify_verdict(&verdict)
    }
}

/// Classify a raw verdict text by substring search.
///
/// "SUPPORTED" is checked before "CONTRADICTED": a verdict containing both
/// substrings resolves to Supported. Ambiguous or empty verdicts default
/// to Unsupported. Downstream aggregation depends on this exact ordering.
pub fn classify_verdict(verdict: &str) -> ClaimStatus {
    if verdict.contains("SUPPORTED") {
        ClaimStatus::Supported
    } else if verdict.contains("CONTRADICTED") {
        ClaimStatus::Contradicted
    } else {
        ClaimStatus::Unsupported
    }
}
