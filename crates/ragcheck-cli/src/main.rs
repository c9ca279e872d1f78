//! RagCheck CLI - evaluate one chat exchange against its retrieved context.
//!
//! # Usage
//!
//! ```bash
//! ragcheck --chat chat.json --context context.json
//! ragcheck --chat chat.json --context context.json --output eval.json
//! ```
//!
//! Requires `GROQ_API_KEY` in the environment. Exits 1 on any uncaught
//! pipeline failure.

mod config;

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use ragcheck::cache::FileCache;
use ragcheck::core::{RagCheckError, Scorer};
use ragcheck::pipeline::{EvaluationPipeline, PipelineConfig};
use ragcheck::scorer::{CachedScorer, GroqScorer, GroqScorerConfig, HttpBackend};

use config::CliConfig;

/// LLM evaluation pipeline for retrieval-augmented chat.
#[derive(Parser)]
#[command(name = "ragcheck", version, about)]
struct Cli {
    /// Path to the chat JSON file
    #[arg(long)]
    chat: PathBuf,

    /// Path to the context JSON file
    #[arg(long)]
    context: PathBuf,

    /// Path to the output JSON report
    #[arg(long, default_value = "result.json")]
    output: PathBuf,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if let Err(e) = run(cli).await {
        error!("pipeline failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), RagCheckError> {
    let config = CliConfig::from_env()?;

    let backend = Arc::new(HttpBackend::new());
    let groq = Arc::new(GroqScorer::new(
        GroqScorerConfig::new(config.api_key.clone()),
        backend,
    ));
    let scorer: Arc<dyn Scorer> = if config.enable_caching {
        Arc::new(CachedScorer::new(
            groq,
            Arc::new(FileCache::new(&config.cache_dir)),
        ))
    } else {
        groq
    };

    let pipeline = EvaluationPipeline::new(
        scorer,
        PipelineConfig {
            relevance_model: config.relevance_model,
            hallucination_model: config.hallucination_model,
        },
    );

    pipeline.run(&cli.chat, &cli.context, &cli.output).await?;
    Ok(())
}
