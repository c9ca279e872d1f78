mod backend;
mod cached;
mod groq;
mod scripted;

pub use backend::{FakeBackend, HttpBackend, ScorerBackend, ScorerRequest, ScorerResponse};
pub use cached::CachedScorer;
pub use groq::{GroqScorer, GroqScorerConfig};
pub use scripted::ScriptedScorer;

// Re-export the boundary traits from core for convenient single-import use.
pub use ragcheck_core::{PromptCache, RagCheckError, Scorer};
