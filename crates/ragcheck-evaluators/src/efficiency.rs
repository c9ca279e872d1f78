use async_trait::async_trait;

use ragcheck_core::{EfficiencyMetrics, Evaluator, FeatureSet, RagCheckError};
use ragcheck_text::word_count;

/// Flat USD-per-token rate for cost estimation. An external pricing
/// assumption, applied to input and output alike.
pub const COST_PER_TOKEN_USD: f64 = 0.27 / 1_000_000.0;

/// Deterministic token and cost arithmetic; no external calls, cannot
/// fail. `latency_ms` stays zero: generation latency is not observable
/// from an offline evaluation run.
#[derive(Debug, Default)]
pub struct EfficiencyEvaluator;

impl EfficiencyEvaluator {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Evaluator for EfficiencyEvaluator {
    type Metrics = EfficiencyMetrics;

    async fn evaluate(&self, features: &FeatureSet) -> Result<EfficiencyMetrics, RagCheckError> {
        let input_tokens = word_count(&features.clean_query) as u64 + features.context_tokens;
        let output_tokens = word_count(&features.clean_response) as u64;

        Ok(EfficiencyMetrics {
            input_tokens,
            output_tokens,
            estimated_cost_usd: (input_tokens + output_tokens) as f64 * COST_PER_TOKEN_USD,
            latency_ms: 0,
        })
    }
}
