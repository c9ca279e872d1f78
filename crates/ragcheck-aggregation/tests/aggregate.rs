use ragcheck_aggregation::{aggregate, classify};
use ragcheck_core::{
    EfficiencyMetrics, HallucinationMetrics, RelevanceMetrics, ReliabilityStatus,
};

fn relevance(relevance_score: f64, completeness_score: f64) -> RelevanceMetrics {
    RelevanceMetrics {
        relevance_score,
        completeness_score,
        weighted_relevance: (relevance_score + completeness_score) / 2.0,
    }
}

fn hallucination(accuracy_score: f64) -> HallucinationMetrics {
    HallucinationMetrics {
        hallucination_score: 1.0 - accuracy_score,
        accuracy_score,
        supported_claims: 0,
        unsupported_claims: 0,
        contradicted_claims: 0,
        claim_details: vec![],
    }
}

fn efficiency() -> EfficiencyMetrics {
    EfficiencyMetrics {
        input_tokens: 53,
        output_tokens: 10,
        estimated_cost_usd: 63.0 * 0.27 / 1_000_000.0,
        latency_ms: 0,
    }
}

#[test]
fn weighted_score_excludes_efficiency() {
    let result = aggregate(relevance(0.95, 0.9), hallucination(1.0), efficiency());

    // (0.95*0.25 + 0.9*0.25 + 1.0*0.40) / 0.90, rounded to 4 digits
    assert_eq!(result.overall_score, 0.9583);
    assert_eq!(result.reliability_status, ReliabilityStatus::Reliable);
}

#[test]
fn dimensions_are_embedded_unchanged() {
    let rel = relevance(0.5, 0.7);
    let hall = hallucination(0.8);
    let eff = efficiency();
    let result = aggregate(rel.clone(), hall.clone(), eff.clone());

    assert_eq!(result.dimensions.relevance, rel);
    assert_eq!(result.dimensions.hallucination, hall);
    assert_eq!(result.dimensions.efficiency, eff);
    assert!(result.metadata.is_none());
    assert!(result.input_data.is_none());
}

#[test]
fn perfect_scores_aggregate_to_one() {
    let result = aggregate(relevance(1.0, 1.0), hallucination(1.0), efficiency());
    assert_eq!(result.overall_score, 1.0);
    assert_eq!(result.reliability_status, ReliabilityStatus::Reliable);
}

#[test]
fn zero_scores_aggregate_to_zero() {
    let result = aggregate(relevance(0.0, 0.0), hallucination(0.0), efficiency());
    assert_eq!(result.overall_score, 0.0);
    assert_eq!(result.reliability_status, ReliabilityStatus::Unreliable);
}

#[test]
fn classification_boundaries_are_closed_open() {
    assert_eq!(classify(0.8), ReliabilityStatus::Reliable);
    assert_eq!(classify(0.6), ReliabilityStatus::Moderate);
    assert_eq!(classify(0.5999), ReliabilityStatus::Unreliable);
    assert_eq!(classify(0.7999), ReliabilityStatus::Moderate);
    assert_eq!(classify(1.0), ReliabilityStatus::Reliable);
    assert_eq!(classify(0.0), ReliabilityStatus::Unreliable);
}

#[test]
fn score_is_rounded_to_four_digits() {
    // 1/3 accuracy only: 0.40*(1/3)/0.90 = 0.148148...
    let result = aggregate(relevance(0.0, 0.0), hallucination(1.0 / 3.0), efficiency());
    assert_eq!(result.overall_score, 0.1481);
}
