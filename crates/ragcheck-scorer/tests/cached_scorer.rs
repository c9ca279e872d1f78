use std::sync::Arc;

use ragcheck_cache::InMemoryCache;
use ragcheck_scorer::{CachedScorer, PromptCache, ScriptedScorer, Scorer};

#[tokio::test]
async fn second_call_not_forwarded() {
    let scripted = Arc::new(ScriptedScorer::new().with_default("0.8"));
    let cache = Arc::new(InMemoryCache::new());
    let scorer = CachedScorer::new(scripted.clone(), cache);

    let r1 = scorer.evaluate("same prompt", "m").await.unwrap();
    let r2 = scorer.evaluate("same prompt", "m").await.unwrap();

    assert_eq!(r1, "0.8");
    assert_eq!(r2, "0.8");
    assert_eq!(scripted.call_count(), 1);
}

#[tokio::test]
async fn different_prompts_both_forwarded() {
    let scripted = Arc::new(
        ScriptedScorer::new()
            .rule("prompt A", "answer A")
            .rule("prompt B", "answer B"),
    );
    let cache = Arc::new(InMemoryCache::new());
    let scorer = CachedScorer::new(scripted.clone(), cache);

    assert_eq!(scorer.evaluate("prompt A", "m").await.unwrap(), "answer A");
    assert_eq!(scorer.evaluate("prompt B", "m").await.unwrap(), "answer B");
    assert_eq!(scripted.call_count(), 2);
}

#[tokio::test]
async fn cache_is_keyed_by_prompt_content() {
    let scripted = Arc::new(ScriptedScorer::new().with_default("shared"));
    let cache = Arc::new(InMemoryCache::new());
    let scorer = CachedScorer::new(scripted.clone(), cache.clone());

    scorer.evaluate("prompt", "model-one").await.unwrap();
    // Same prompt under a different model still hits the cache: entries
    // are addressed by prompt content alone.
    scorer.evaluate("prompt", "model-two").await.unwrap();
    assert_eq!(scripted.call_count(), 1);
}

#[tokio::test]
async fn miss_after_clear() {
    let scripted = Arc::new(ScriptedScorer::new().with_default("v"));
    let cache = Arc::new(InMemoryCache::new());
    let scorer = CachedScorer::new(scripted.clone(), cache.clone());

    scorer.evaluate("p", "m").await.unwrap();
    cache.clear().await.unwrap();
    scorer.evaluate("p", "m").await.unwrap();

    assert_eq!(scripted.call_count(), 2);
}
