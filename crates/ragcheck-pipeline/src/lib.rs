//! The evaluation pipeline: load → extract → evaluate → aggregate → report.

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use tracing::{info, warn};

use ragcheck_aggregation::aggregate;
use ragcheck_core::{EvaluationResult, InputData, RagCheckError, RunMetadata, Scorer};
use ragcheck_evaluators::{
    EfficiencyEvaluator, Evaluator, HallucinationEvaluator, RelevanceEvaluator,
};
use ragcheck_extract::extract_features;
use ragcheck_loaders::{load_chat_data, load_context_data};
use ragcheck_report::{generate_report, print_summary};

pub const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";

/// Models bound to the two scoring dimensions.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub relevance_model: String,
    pub hallucination_model: String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            relevance_model: DEFAULT_MODEL.to_string(),
            hallucination_model: DEFAULT_MODEL.to_string(),
        }
    }
}

/// One evaluation run over a chat/context file pair.
///
/// The scorer is injected and shared by reference among the evaluators
/// that need it; there is no ambient scorer state.
pub struct EvaluationPipeline {
    relevance: RelevanceEvaluator,
    hallucination: HallucinationEvaluator,
    efficiency: EfficiencyEvaluator,
}

impl EvaluationPipeline {
    pub fn new(scorer: Arc<dyn Scorer>, config: PipelineConfig) -> Self {
        Self {
            relevance: RelevanceEvaluator::new(scorer.clone(), config.relevance_model),
            hallucination: HallucinationEvaluator::new(scorer, config.hallucination_model),
            efficiency: EfficiencyEvaluator::new(),
        }
    }

    /// Run the full pipeline and return the aggregated result.
    ///
    /// Input errors (missing or malformed files) propagate; a failed
    /// report write is logged and does not fail the run.
    pub async fn run(
        &self,
        chat_path: impl AsRef<Path>,
        context_path: impl AsRef<Path>,
        output_path: impl AsRef<Path>,
    ) -> Result<EvaluationResult, RagCheckError> {
        let chat_path = chat_path.as_ref();
        let context_path = context_path.as_ref();
        let started = Instant::now();

        info!("starting evaluation pipeline");

        info!("loading data");
        let chat = load_chat_data(chat_path).await?;
        let context = load_context_data(context_path).await?;

        info!("extracting features");
        let features = extract_features(&chat, &context);

        // The three dimensions are independent: no shared mutable state,
        // no ordering dependency. Run them concurrently.
        info!("evaluating relevance, hallucination, and efficiency");
        let (relevance, hallucination, efficiency) = tokio::join!(
            self.relevance.evaluate(&features),
            self.hallucination.evaluate(&features),
            self.efficiency.evaluate(&features),
        );

        info!("aggregating results");
        let mut result = aggregate(relevance?, hallucination?, efficiency?);
        result.metadata = Some(RunMetadata {
            execution_time_sec: round2(started.elapsed().as_secs_f64()),
            chat_source: chat_path.display().to_string(),
            context_source: context_path.display().to_string(),
        });
        result.input_data = Some(InputData {
            query: features.query.clone(),
            response: features.response.clone(),
        });

        print_summary(&result);
        if let Err(e) = generate_report(&result, output_path).await {
            warn!("failed to save report: {e}");
        }

        info!("pipeline execution complete");
        Ok(result)
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
