//! Groq chat-completions client for persona generation.
//!
//! The `llm` crate implements [`persona::PersonaModel`] over Groq's
//! OpenAI-compatible `/chat/completions` endpoint. Requests are sent with
//! `stream: true`; the SSE deltas are concatenated and the full text is
//! returned once the stream ends, so callers see a single blocking call.

pub mod client;
pub mod sse;

pub use client::{DEFAULT_BASE_URL, DEFAULT_MODEL, GroqClient};
