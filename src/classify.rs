use serde_json::Value;

use crate::models::{ContentBlock, Message};

/// Classifies a response body into a displayable bot message.
///
/// The backend wraps its payload in a `data` field whose `type` decides the
/// rendering: `"text"` is shown literally, `"mixed"`/`"rich"` carry either a
/// list of content blocks or a plain markdown string, and anything else is
/// dumped as pretty-printed JSON so an unexpected shape still shows up
/// instead of erroring.
pub fn classify_response(body: &Value) -> Message {
    let output = match body.get("data") {
        Some(v) if !v.is_null() => v.clone(),
        _ => Value::Object(serde_json::Map::new()),
    };

    match output.get("type").and_then(Value::as_str) {
        Some("text") => Message::bot(text_content(output.get("content")), false),
        Some("mixed") | Some("rich") => {
            let text = match output.get("content") {
                Some(Value::Array(blocks)) => blocks
                    .iter()
                    .map(block_markdown)
                    .collect::<Vec<_>>()
                    .join("\n\n"),
                other => text_content(other),
            };
            Message::bot(text, true)
        }
        _ => Message::bot(pretty_json(&output), true),
    }
}

fn block_markdown(value: &Value) -> String {
    match serde_json::from_value::<ContentBlock>(value.clone()) {
        Ok(block) => block.markdown_fragment(),
        // Unrecognised block type: fall back to its raw text, if any.
        Err(_) => value
            .get("text")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
    }
}

fn text_content(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

fn pretty_json(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_default()
}
