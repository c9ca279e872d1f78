mod efficiency;
mod hallucination;
mod relevance;
mod verifier;

pub use efficiency::{EfficiencyEvaluator, COST_PER_TOKEN_USD};
pub use hallucination::{HallucinationEvaluator, MAX_CONTEXT_CHARS, MIN_CLAIM_TOKENS};
pub use relevance::RelevanceEvaluator;
pub use verifier::{classify_verdict, ClaimVerifier};

// Re-export the Evaluator trait from core for convenient single-import use.
pub use ragcheck_core::Evaluator;
