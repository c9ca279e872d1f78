//! Feature extraction: turns heterogeneous chat/context records into the
//! flat `FeatureSet` the evaluators share.
//!
//! Extraction never fails (missing or unrecognized fields only produce
//! emptier features) and is idempotent over the same inputs.

use serde_json::Value;

use ragcheck_core::FeatureSet;
use ragcheck_loaders::ContextRecord;
use ragcheck_text::{normalize, split_sentences};

const AI_ROLE_MARKERS: [&str; 4] = ["ai", "assistant", "model", "chatbot"];

/// Build the `FeatureSet` for one evaluation run.
///
/// The evaluated pair is located by walking the conversation turns in
/// reverse: the first AI-like content becomes the response and the first
/// user-like content becomes the query. Records without a recognizable
/// turn list fall back to direct field lookup.
pub fn extract_features(chat: &Value, context: &ContextRecord) -> FeatureSet {
    let (query, response) = locate_pair(chat);

    let context_chunks: Vec<String> = context
        .vectors
        .iter()
        .map(|v| v["text"].as_str().unwrap_or("").to_string())
        .collect();
    let source_urls: Vec<Option<String>> = context
        .vectors
        .iter()
        .map(|v| v["source_url"].as_str().map(str::to_string))
        .collect();
    let retrieval_scores = context.retrieval_scores.clone();
    let average_relevance = if retrieval_scores.is_empty() {
        0.0
    } else {
        retrieval_scores.iter().sum::<f64>() / retrieval_scores.len() as f64
    };

    FeatureSet {
        clean_query: normalize(&query),
        clean_response: normalize(&response),
        response_sentences: split_sentences(&response),
        retrieval_count: context.vectors.len(),
        context_chunks,
        context_tokens: context.total_context_tokens,
        source_urls,
        retrieval_scores,
        average_relevance,
        query,
        response,
    }
}

/// Locate the (query, response) pair in the chat record.
fn locate_pair(chat: &Value) -> (String, String) {
    let mut query = String::new();
    let mut response = String::new();

    for turn in conversation_turns(chat).iter().rev() {
        let role = turn["role"].as_str().unwrap_or("").to_lowercase();
        let is_ai = AI_ROLE_MARKERS.iter().any(|marker| role.contains(marker));
        let is_user = role.contains("user");

        // An AI-like role wins over a user-like one for the same turn.
        if response.is_empty() && is_ai {
            response = turn_content(turn);
        } else if query.is_empty() && is_user {
            query = turn_content(turn);
        }

        if !query.is_empty() && !response.is_empty() {
            break;
        }
    }

    // Fallback for flat records (or turn lists with no matching roles):
    // direct field lookup on the record itself, or on its last element.
    if query.is_empty() && response.is_empty() {
        let record = if chat.is_object() {
            Some(chat)
        } else {
            chat.as_array().and_then(|turns| turns.last())
        };
        if let Some(record) = record {
            query = first_string(record, &["user", "query"]);
            response = first_string(record, &["assistant", "response", "ai_response"]);
        }
    }

    (query, response)
}

fn conversation_turns(chat: &Value) -> &[Value] {
    if let Some(turns) = chat.as_array() {
        return turns;
    }
    chat["conversation_turns"].as_array().map_or(&[], Vec::as_slice)
}

/// A turn's text lives in `content`, with `message` as a fallback key.
fn turn_content(turn: &Value) -> String {
    match turn["content"].as_str() {
        Some(content) if !content.is_empty() => content.to_string(),
        _ => turn["message"].as_str().unwrap_or("").to_string(),
    }
}

/// First non-empty string found under any of the candidate keys.
fn first_string(record: &Value, keys: &[&str]) -> String {
    keys.iter()
        .filter_map(|key| record[*key].as_str())
        .find(|value| !value.is_empty())
        .map(str::to_string)
        .unwrap_or_default()
}
