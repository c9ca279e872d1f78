//! RagCheck — an offline evaluation harness for retrieval-augmented chat.
//!
//! This crate re-exports all RagCheck sub-crates for convenient
//! single-import usage. Enable features to control which modules are
//! available.
//!
//! # Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `default` | `pipeline`, `scorer`, `cache`: everything a CLI run needs |
//! | `full` | All modules |
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//!
//! use ragcheck::cache::FileCache;
//! use ragcheck::pipeline::{EvaluationPipeline, PipelineConfig};
//! use ragcheck::scorer::{CachedScorer, GroqScorer, GroqScorerConfig, HttpBackend};
//! ```

/// Core traits and types: Scorer, PromptCache, FeatureSet, RagCheckError.
/// Always available.
pub use ragcheck_core as core;

/// Text heuristics: normalization, sentence splitting, score extraction.
#[cfg(feature = "text")]
pub use ragcheck_text as text;

/// Prompt templates for the scoring calls.
#[cfg(feature = "prompts")]
pub use ragcheck_prompts as prompts;

/// JSON loading and permissive shape checks.
#[cfg(feature = "loaders")]
pub use ragcheck_loaders as loaders;

/// Feature extraction into a FeatureSet.
#[cfg(feature = "extract")]
pub use ragcheck_extract as extract;

/// Scorer boundary: GroqScorer, backends, ScriptedScorer, CachedScorer.
#[cfg(feature = "scorer")]
pub use ragcheck_scorer as scorer;

/// Response caching: InMemoryCache, content-addressed FileCache.
#[cfg(feature = "cache")]
pub use ragcheck_cache as cache;

/// Dimension evaluators and the claim verifier.
#[cfg(feature = "evaluators")]
pub use ragcheck_evaluators as evaluators;

/// Weighted aggregation and reliability classification.
#[cfg(feature = "aggregation")]
pub use ragcheck_aggregation as aggregation;

/// Console summary and JSON report artifact.
#[cfg(feature = "report")]
pub use ragcheck_report as report;

/// End-to-end evaluation pipeline.
#[cfg(feature = "pipeline")]
pub use ragcheck_pipeline as pipeline;
