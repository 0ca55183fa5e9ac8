//! HTTP client for Groq's hosted chat-completion API.

use async_trait::async_trait;
use futures::StreamExt;
use reqwest::Client;
use serde::Serialize;
use tracing::{debug, info};

use persona::{ModelError, PersonaModel};

use crate::sse;

pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";

/// Client for one fixed chat model behind an OpenAI-compatible endpoint.
#[derive(Clone)]
pub struct GroqClient {
    api_key: String,
    model: String,
    base_url: String,
    http: Client,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    stream: bool,
}

impl GroqClient {
    /// Create a client for the hosted Groq endpoint. The key is passed
    /// through uninterpreted; an empty or wrong key fails at call time.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Create a client against an explicit base URL (used by tests).
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    fn url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

#[async_trait]
impl PersonaModel for GroqClient {
    /// Send `prompt` as a single user message and return the completion.
    ///
    /// The request streams at the transport level; deltas are drained and
    /// concatenated here, so the future resolves only once the full text is
    /// available. No truncation or token budgeting is applied: an oversized
    /// prompt fails with whatever error the provider returns.
    async fn complete(&self, prompt: &str) -> Result<String, ModelError> {
        let request = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            stream: true,
        };

        info!(model = %self.model, prompt_len = prompt.len(), "requesting completion");
        let resp = self
            .http
            .post(self.url())
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| ModelError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ModelError::Api(format!(
                "{status}: {}",
                sse::error_message(&body)
            )));
        }

        // Lines are split on raw bytes so a multi-byte character broken
        // across network chunks is only decoded once the line is whole.
        let mut stream = resp.bytes_stream();
        let mut pending: Vec<u8> = Vec::new();
        let mut body: Vec<u8> = Vec::new();
        let mut text = String::new();
        let mut saw_data_line = false;
        let mut done = false;

        'outer: while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(|e| ModelError::Network(e.to_string()))?;
            body.extend_from_slice(&chunk);
            pending.extend_from_slice(&chunk);

            while let Some(pos) = pending.iter().position(|&b| b == b'\n') {
                let line_bytes: Vec<u8> = pending.drain(..=pos).collect();
                let line = String::from_utf8_lossy(&line_bytes);
                let line = line.trim_end();
                if let Some(payload) = sse::data_payload(line) {
                    saw_data_line = true;
                    if payload == sse::DONE {
                        done = true;
                        break 'outer;
                    }
                    if let Some(delta) = sse::delta_content(payload) {
                        text.push_str(&delta);
                    }
                }
            }
        }

        // A stream may end on an unterminated final frame.
        if !done {
            let tail = String::from_utf8_lossy(&pending);
            if let Some(payload) = sse::data_payload(tail.trim_end()) {
                saw_data_line = true;
                if payload != sse::DONE {
                    if let Some(delta) = sse::delta_content(payload) {
                        text.push_str(&delta);
                    }
                }
            }
        }

        if !saw_data_line {
            // Backend ignored `stream: true` and sent one JSON completion.
            debug!("no SSE frames in response, parsing as plain completion");
            let body = String::from_utf8_lossy(&body).into_owned();
            return sse::message_content(&body)
                .ok_or_else(|| ModelError::InvalidResponse(body));
        }

        debug!(text_len = text.len(), "completion stream drained");
        Ok(text)
    }
}
