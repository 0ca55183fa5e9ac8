//! Seams between the pipeline and its two external collaborators.

use async_trait::async_trait;
use thiserror::Error;

/// A top-level submission authored by the profiled user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Post {
    pub title: String,
    pub body: String,
}

/// A single comment authored by the profiled user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Comment {
    pub body: String,
}

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("network error: {0}")]
    Network(String),
    #[error("no such user: {0}")]
    UserNotFound(String),
    #[error("provider error: {0}")]
    Api(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("network error: {0}")]
    Network(String),
    #[error("model provider error: {0}")]
    Api(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

/// Supplier of a user's recent activity on the content platform.
///
/// One call returns both lists so the pipeline only reaches the network once
/// per request; implementations fetch submissions before comments and keep
/// each list in the provider's newest-first order, capped at ten entries.
#[async_trait]
pub trait ContentSource: Send + Sync {
    async fn user_content(
        &self,
        username: &str,
    ) -> Result<(Vec<Post>, Vec<Comment>), SourceError>;
}

/// Hosted language model that turns a rendered prompt into persona text.
///
/// The call blocks until the full completion is available, even when the
/// implementation streams under the hood.
#[async_trait]
pub trait PersonaModel: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, ModelError>;
}
