//! The fetch → render → generate pipeline.

use thiserror::Error;
use tracing::{debug, info};

use crate::prompt::{comment_block, join_blocks, post_block, render_prompt};
use crate::traits::{ContentSource, ModelError, PersonaModel, SourceError};

#[derive(Debug, Error)]
pub enum PersonaError {
    #[error("content provider: {0}")]
    Source(#[from] SourceError),
    #[error("model provider: {0}")]
    Model(#[from] ModelError),
}

/// Build a persona for `username`.
///
/// Strictly sequential: the model is never called until both the post and
/// comment lists are fully materialized, and a fetch failure aborts the
/// request before any model traffic. Nothing partial is ever returned.
pub async fn build_persona(
    source: &dyn ContentSource,
    model: &dyn PersonaModel,
    username: &str,
) -> Result<String, PersonaError> {
    info!(%username, "fetching recent activity");
    let (posts, comments) = source.user_content(username).await?;
    debug!(posts = posts.len(), comments = comments.len(), "activity fetched");

    let posts_text = join_blocks(&posts.iter().map(post_block).collect::<Vec<_>>());
    let comments_text = join_blocks(&comments.iter().map(comment_block).collect::<Vec<_>>());
    let prompt = render_prompt(&posts_text, &comments_text);

    info!(%username, prompt_len = prompt.len(), "generating persona");
    let persona = model.complete(&prompt).await?;
    Ok(persona)
}
