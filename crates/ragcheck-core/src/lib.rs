use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ---------------------------------------------------------------------------
// FeatureSet — the flat feature record shared by all evaluators
// ---------------------------------------------------------------------------

/// Features extracted from one chat exchange and its retrieved context.
///
/// Built once per evaluation run and shared read-only by the dimension
/// evaluators; nothing mutates it after construction. `average_relevance`
/// is the arithmetic mean of `retrieval_scores`, or `0.0` when the list is
/// empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureSet {
    /// The user query, as found in the chat record.
    pub query: String,
    /// The AI response being evaluated.
    pub response: String,
    /// Normalized query (lower-cased, whitespace-collapsed).
    pub clean_query: String,
    /// Normalized response.
    pub clean_response: String,
    /// The raw response split into sentence-like units.
    pub response_sentences: Vec<String>,
    /// Number of retrieved vectors.
    pub retrieval_count: usize,
    /// Per-vector context text, in retrieval order.
    pub context_chunks: Vec<String>,
    /// Total token count across the retrieved context.
    pub context_tokens: u64,
    /// Per-vector source URL, aligned with `context_chunks`.
    pub source_urls: Vec<Option<String>>,
    /// Per-vector retrieval scores, aligned by position with the vectors.
    pub retrieval_scores: Vec<f64>,
    /// Mean of `retrieval_scores`, `0.0` if empty.
    pub average_relevance: f64,
}

// ---------------------------------------------------------------------------
// Claim verification
// ---------------------------------------------------------------------------

/// Support status of a single factual claim against the retrieved context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClaimStatus {
    Supported,
    Unsupported,
    Contradicted,
}

impl ClaimStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClaimStatus::Supported => "SUPPORTED",
            ClaimStatus::Unsupported => "UNSUPPORTED",
            ClaimStatus::Contradicted => "CONTRADICTED",
        }
    }
}

impl std::fmt::Display for ClaimStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One verified claim with its verdict. Sentences too short to qualify as
/// claims are dropped before verification and never recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimVerdict {
    pub claim: String,
    pub status: ClaimStatus,
}

// ---------------------------------------------------------------------------
// Dimension metrics
// ---------------------------------------------------------------------------

/// Output of the relevance/completeness evaluator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelevanceMetrics {
    pub relevance_score: f64,
    pub completeness_score: f64,
    /// Unweighted mean of the two sub-scores.
    pub weighted_relevance: f64,
}

/// Output of the hallucination evaluator. Lower `hallucination_score` is
/// better; `accuracy_score` is its complement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HallucinationMetrics {
    pub hallucination_score: f64,
    pub accuracy_score: f64,
    pub supported_claims: usize,
    pub unsupported_claims: usize,
    pub contradicted_claims: usize,
    pub claim_details: Vec<ClaimVerdict>,
}

/// Output of the cost/latency evaluator. `latency_ms` is zero: generation
/// latency is not observable from an offline evaluation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EfficiencyMetrics {
    pub input_tokens: u64,
    pub output_tokens: u64,
    pub estimated_cost_usd: f64,
    pub latency_ms: u64,
}

// ---------------------------------------------------------------------------
// Aggregated result
// ---------------------------------------------------------------------------

/// Discrete reliability verdict derived from the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReliabilityStatus {
    Reliable,
    Moderate,
    Unreliable,
}

impl ReliabilityStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReliabilityStatus::Reliable => "RELIABLE",
            ReliabilityStatus::Moderate => "MODERATE",
            ReliabilityStatus::Unreliable => "UNRELIABLE",
        }
    }
}

impl std::fmt::Display for ReliabilityStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The three dimension records, embedded unchanged for traceability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub relevance: RelevanceMetrics,
    pub hallucination: HallucinationMetrics,
    pub efficiency: EfficiencyMetrics,
}

/// Run metadata attached by the pipeline, not by the aggregator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunMetadata {
    pub execution_time_sec: f64,
    pub chat_source: String,
    pub context_source: String,
}

/// The evaluated query/response pair, echoed into the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputData {
    pub query: String,
    pub response: String,
}

/// Terminal result of one evaluation run: written to the report, never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    /// Weighted overall score in [0, 1], rounded to 4 decimal digits.
    pub overall_score: f64,
    pub reliability_status: ReliabilityStatus,
    pub dimensions: Dimensions,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<RunMetadata>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_data: Option<InputData>,
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Unified error type for RagCheck with variants covering all subsystems.
#[derive(Debug, Error)]
pub enum RagCheckError {
    #[error("loader error: {0}")]
    Loader(String),
    #[error("scorer error: {0}")]
    Scorer(String),
    #[error("rate limit: {0}")]
    RateLimit(String),
    #[error("cache error: {0}")]
    Cache(String),
    #[error("report error: {0}")]
    Report(String),
    #[error("config error: {0}")]
    Config(String),
}

// ---------------------------------------------------------------------------
// Core traits
// ---------------------------------------------------------------------------

/// The external text-generation boundary used for scoring.
///
/// Implementations send one prompt to a model and return the raw text
/// answer. Callers treat an `Err` or unparsable text as the most
/// conservative score for their dimension rather than propagating the
/// failure; a scoring outage degrades the verdict instead of aborting the
/// run.
#[async_trait]
pub trait Scorer: Send + Sync {
    async fn evaluate(&self, prompt: &str, model: &str) -> Result<String, RagCheckError>;
}

/// Content-addressed cache for scorer responses, keyed by prompt text.
///
/// Duplicate writes for the same prompt carry identical content, so
/// concurrent first-time population of a key is a benign race and no
/// locking is required.
#[async_trait]
pub trait PromptCache: Send + Sync {
    /// Look up a cached response for a prompt.
    async fn get(&self, prompt: &str) -> Result<Option<String>, RagCheckError>;
    /// Store a response for a prompt.
    async fn put(&self, prompt: &str, response: &str) -> Result<(), RagCheckError>;
    /// Remove all entries.
    async fn clear(&self) -> Result<(), RagCheckError>;
}

/// A dimension evaluator: consumes the shared `FeatureSet`, produces one
/// immutable metrics record. Evaluators are mutually independent and may
/// run concurrently.
#[async_trait]
pub trait Evaluator: Send + Sync {
    type Metrics;

    async fn evaluate(&self, features: &FeatureSet) -> Result<Self::Metrics, RagCheckError>;
}
