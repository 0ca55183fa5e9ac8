//! Minimal parsing of the `data:`-framed server-sent-event lines used by
//! OpenAI-compatible streaming responses.

use serde_json::Value;

/// Sentinel payload ending a stream.
pub const DONE: &str = "[DONE]";

/// Return the payload of a `data:` line, or `None` for anything else
/// (blank keep-alive lines, comments, partial frames).
pub fn data_payload(line: &str) -> Option<&str> {
    line.strip_prefix("data:").map(str::trim)
}

/// Extract the text delta carried by one streamed chunk, if any.
pub fn delta_content(payload: &str) -> Option<String> {
    let v: Value = serde_json::from_str(payload).ok()?;
    v["choices"][0]["delta"]["content"]
        .as_str()
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Extract the full message content from a non-streaming completion body.
/// Some OpenAI-compatible backends answer a `stream: true` request with a
/// plain JSON completion; this is the fallback for that shape.
pub fn message_content(body: &str) -> Option<String> {
    let v: Value = serde_json::from_str(body).ok()?;
    v["choices"][0]["message"]["content"]
        .as_str()
        .map(str::to_string)
}

/// Pull the provider's error message out of an error body, falling back to
/// the raw text when it is not the usual `{"error":{"message":...}}` shape.
pub fn error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v["error"]["message"].as_str().map(str::to_string))
        .unwrap_or_else(|| body.to_string())
}
