use serde_json::Value;

/// Returns `outputs[0].outputs[0].results.message.text` if every step exists
/// with the expected type.
pub fn message_text(response: &Value) -> Option<&str> {
    response
        .get("outputs")?
        .get(0)?
        .get("outputs")?
        .get(0)?
        .get("results")?
        .get("message")?
        .get("text")?
        .as_str()
}
