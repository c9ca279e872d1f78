//! Report output: the console summary block and the JSON artifact.

use std::fmt::Write as _;
use std::path::Path;

use tracing::info;

use ragcheck_core::{EvaluationResult, RagCheckError};

const RULE: &str = "==================================================";
const THIN_RULE: &str = "--------------------------------------------------";

/// Render the evaluation summary block.
pub fn format_summary(result: &EvaluationResult) -> String {
    let dims = &result.dimensions;

    let mut out = String::new();
    let _ = writeln!(out);
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "EVALUATION SUMMARY");
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "Overall Score:      {}", result.overall_score);
    let _ = writeln!(out, "Reliability Status: {}", result.reliability_status);
    let _ = writeln!(out, "{THIN_RULE}");
    let _ = writeln!(out, "Relevance:          {:.2}", dims.relevance.relevance_score);
    let _ = writeln!(
        out,
        "Completeness:       {:.2}",
        dims.relevance.completeness_score
    );
    let _ = writeln!(
        out,
        "Accuracy:           {:.2}",
        dims.hallucination.accuracy_score
    );
    let _ = writeln!(
        out,
        "Hallucination:      {:.2}",
        dims.hallucination.hallucination_score
    );
    let _ = writeln!(out, "{THIN_RULE}");
    let _ = writeln!(
        out,
        "Est. Cost:          ${:.6}",
        dims.efficiency.estimated_cost_usd
    );
    let _ = writeln!(out, "{RULE}");
    out
}

/// Print the summary block to stdout.
pub fn print_summary(result: &EvaluationResult) {
    println!("{}", format_summary(result));
}

/// Write the pretty-printed JSON artifact. The caller decides whether a
/// failure here matters; the pipeline logs it and moves on.
pub async fn generate_report(
    result: &EvaluationResult,
    output_path: impl AsRef<Path>,
) -> Result<(), RagCheckError> {
    let output_path = output_path.as_ref();
    let json = serde_json::to_string_pretty(result)
        .map_err(|e| RagCheckError::Report(format!("cannot serialize result: {e}")))?;
    tokio::fs::write(output_path, json).await.map_err(|e| {
        RagCheckError::Report(format!("cannot write {}: {e}", output_path.display()))
    })?;
    info!("evaluation report saved to {}", output_path.display());
    Ok(())
}
