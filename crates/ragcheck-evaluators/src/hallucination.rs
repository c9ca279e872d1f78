use std::sync::Arc;

use async_trait::async_trait;

use ragcheck_core::{
    ClaimStatus, ClaimVerdict, Evaluator, FeatureSet, HallucinationMetrics, RagCheckError, Scorer,
};
use ragcheck_text::{truncate_chars, word_count};

use crate::verifier::ClaimVerifier;

/// Context passed to claim verification is capped at this many characters
/// to bound prompt size.
pub const MAX_CONTEXT_CHARS: usize = 10_000;

/// Sentences with fewer whitespace tokens than this are not treated as
/// claims; they are skipped entirely, not scored.
pub const MIN_CLAIM_TOKENS: usize = 3;

/// Decomposes the response into claims, verifies each against the joined
/// context, and derives aggregate hallucination/accuracy scores.
pub struct HallucinationEvaluator {
    verifier: ClaimVerifier,
}

impl HallucinationEvaluator {
    pub fn new(scorer: Arc<dyn Scorer>, model: impl Into<String>) -> Self {
        Self {
            verifier: ClaimVerifier::new(scorer, model),
        }
    }
}

#[async_trait]
impl Evaluator for HallucinationEvaluator {
    type Metrics = HallucinationMetrics;

    async fn evaluate(
        &self,
        features: &FeatureSet,
    ) -> Result<HallucinationMetrics, RagCheckError> {
        let context = features.context_chunks.join(" ");
        let context = truncate_chars(&context, MAX_CONTEXT_CHARS);

        let mut supported_claims = 0usize;
        let mut unsupported_claims = 0usize;
        let mut contradicted_claims = 0usize;
        let mut claim_details = Vec::new();

        for claim in &features.response_sentences {
            if word_count(claim) < MIN_CLAIM_TOKENS {
                continue;
            }

            let status = self.verifier.verify(claim, context).await;
            claim_details.push(ClaimVerdict {
                claim: claim.clone(),
                status,
            });

            match status {
                ClaimStatus::Supported => supported_claims += 1,
                ClaimStatus::Unsupported => unsupported_claims += 1,
                ClaimStatus::Contradicted => contradicted_claims += 1,
            }
        }

        let total_verified = supported_claims + unsupported_claims + contradicted_claims;
        let hallucination_score = if total_verified > 0 {
            (unsupported_claims + contradicted_claims) as f64 / total_verified as f64
        } else {
            0.0
        };

        Ok(HallucinationMetrics {
            hallucination_score,
            accuracy_score: 1.0 - hallucination_score,
            supported_claims,
            unsupported_claims,
            contradicted_claims,
            claim_details,
        })
    }
}
