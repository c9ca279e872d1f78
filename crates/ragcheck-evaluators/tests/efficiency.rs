use ragcheck_core::FeatureSet;
use ragcheck_evaluators::{EfficiencyEvaluator, Evaluator, COST_PER_TOKEN_USD};

fn features(clean_query: &str, clean_response: &str, context_tokens: u64) -> FeatureSet {
    FeatureSet {
        query: clean_query.to_string(),
        response: clean_response.to_string(),
        clean_query: clean_query.to_string(),
        clean_response: clean_response.to_string(),
        response_sentences: vec![],
        retrieval_count: 0,
        context_chunks: vec![],
        context_tokens,
        source_urls: vec![],
        retrieval_scores: vec![],
        average_relevance: 0.0,
    }
}

#[tokio::test]
async fn token_and_cost_arithmetic() {
    let evaluator = EfficiencyEvaluator::new();
    let features = features(
        "three word query",
        "this response has exactly ten words in it right here",
        50,
    );

    let metrics = evaluator.evaluate(&features).await.unwrap();
    assert_eq!(metrics.input_tokens, 53);
    assert_eq!(metrics.output_tokens, 10);
    assert!((metrics.estimated_cost_usd - 63.0 * 0.27 / 1_000_000.0).abs() < 1e-15);
    assert_eq!(metrics.latency_ms, 0);
}

#[tokio::test]
async fn empty_features_cost_nothing() {
    let evaluator = EfficiencyEvaluator::new();
    let metrics = evaluator.evaluate(&features("", "", 0)).await.unwrap();

    assert_eq!(metrics.input_tokens, 0);
    assert_eq!(metrics.output_tokens, 0);
    assert_eq!(metrics.estimated_cost_usd, 0.0);
}

#[test]
fn rate_constant_matches_pricing_assumption() {
    assert!((COST_PER_TOKEN_USD - 0.27 / 1_000_000.0).abs() < f64::EPSILON);
}
