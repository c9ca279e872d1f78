use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use ragcheck_core::RagCheckError;

use crate::schema;

/// The projected context record: the fields evaluation actually consumes,
/// pulled out of the raw context document.
///
/// `retrieval_scores` comes from a sibling metadata substructure and is
/// assumed, not verified, to align by position with `vectors`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContextRecord {
    pub vectors: Vec<Value>,
    pub retrieval_scores: Vec<f64>,
    pub total_context_tokens: u64,
    pub sources_used: Vec<Value>,
}

/// Read and parse a JSON file. Missing files and malformed JSON are fatal
/// input errors that propagate to the top level.
pub async fn load_json_file(path: impl AsRef<Path>) -> Result<Value, RagCheckError> {
    let path = path.as_ref();
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| RagCheckError::Loader(format!("cannot read {}: {e}", path.display())))?;
    serde_json::from_str(&text)
        .map_err(|e| RagCheckError::Loader(format!("invalid JSON in {}: {e}", path.display())))
}

/// Load the chat record. Shape problems are warned about, never fatal:
/// extraction downstream degrades to empty features instead.
pub async fn load_chat_data(path: impl AsRef<Path>) -> Result<Value, RagCheckError> {
    let path = path.as_ref();
    let data = load_json_file(path).await?;
    if !schema::chat_shape_ok(&data) {
        warn!(
            "chat data in {} might not match the expected schema",
            path.display()
        );
    }
    Ok(data)
}

/// Load the context record and project the evaluation-relevant fields.
///
/// Every field defaults to empty/zero when absent; a malformed document
/// yields an emptier record, not an error.
pub async fn load_context_data(path: impl AsRef<Path>) -> Result<ContextRecord, RagCheckError> {
    let path = path.as_ref();
    let data = load_json_file(path).await?;
    if !schema::context_shape_ok(&data) {
        warn!(
            "context data in {} might not match the expected schema",
            path.display()
        );
    }

    let body = &data["data"];
    let vectors = body["vector_data"].as_array().cloned().unwrap_or_default();
    let retrieval_scores = body["sources"]["vectors_info"]
        .as_array()
        .map(|infos| infos.iter().filter_map(|v| v["score"].as_f64()).collect())
        .unwrap_or_default();
    let total_context_tokens = vectors
        .iter()
        .map(|v| v["tokens"].as_u64().unwrap_or(0))
        .sum();
    let sources_used = body["sources"]["vectors_used"]
        .as_array()
        .cloned()
        .unwrap_or_default();

    Ok(ContextRecord {
        vectors,
        retrieval_scores,
        total_context_tokens,
        sources_used,
    })
}
