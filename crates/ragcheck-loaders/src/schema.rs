use serde_json::Value;

/// Chat records are either an ordered list of turns or a single mapping
/// with direct query/response fields. Anything else is suspicious.
pub fn chat_shape_ok(data: &Value) -> bool {
    data.is_array() || data.is_object()
}

/// Context records carry a `status` plus a `data` body holding the
/// `vector_data` list. The check is deliberately permissive: a failed check
/// only produces a warning, and projection falls back to defaults.
pub fn context_shape_ok(data: &Value) -> bool {
    let Some(obj) = data.as_object() else {
        return false;
    };
    if !obj.contains_key("status") || !obj.contains_key("data") {
        return false;
    }
    data["data"].get("vector_data").is_some()
}
