//! Combines the three dimension records into a weighted overall score and
//! a discrete reliability classification.

use ragcheck_core::{
    Dimensions, EfficiencyMetrics, EvaluationResult, HallucinationMetrics, RelevanceMetrics,
    ReliabilityStatus,
};

pub const WEIGHT_RELEVANCE: f64 = 0.25;
pub const WEIGHT_COMPLETENESS: f64 = 0.25;
pub const WEIGHT_ACCURACY: f64 = 0.40;

pub const RELIABLE_THRESHOLD: f64 = 0.8;
pub const MODERATE_THRESHOLD: f64 = 0.6;

/// Combine the dimension outputs into the final result.
///
/// The efficiency dimension is excluded from the weighted score (cost and
/// latency are not quality signals on the same 0-to-1 scale) and is
/// carried through as supplementary reporting data only. The caller
/// attaches run metadata and input data afterwards.
pub fn aggregate(
    relevance: RelevanceMetrics,
    hallucination: HallucinationMetrics,
    efficiency: EfficiencyMetrics,
) -> EvaluationResult {
    let weighted_score = (relevance.relevance_score * WEIGHT_RELEVANCE
        + relevance.completeness_score * WEIGHT_COMPLETENESS
        + hallucination.accuracy_score * WEIGHT_ACCURACY)
        / (WEIGHT_RELEVANCE + WEIGHT_COMPLETENESS + WEIGHT_ACCURACY);

    EvaluationResult {
        overall_score: round4(weighted_score),
        // Classified on the unrounded score; rounding is presentation only.
        reliability_status: classify(weighted_score),
        dimensions: Dimensions {
            relevance,
            hallucination,
            efficiency,
        },
        metadata: None,
        input_data: None,
    }
}

/// Closed-open classification bands: 0.8 is Reliable, 0.6 is Moderate.
pub fn classify(score: f64) -> ReliabilityStatus {
    if score >= RELIABLE_THRESHOLD {
        ReliabilityStatus::Reliable
    } else if score >= MODERATE_THRESHOLD {
        ReliabilityStatus::Moderate
    } else {
        ReliabilityStatus::Unreliable
    }
}

fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}
