//! Core logic for turning a Reddit profile into a written persona.
//!
//! The `persona` crate owns everything that does not touch the network:
//! pulling a username out of a profile URL, shaping fetched posts and
//! comments into text blocks, rendering the analyst prompt, and driving the
//! fetch-then-generate pipeline through the [`ContentSource`] and
//! [`PersonaModel`] seams. Concrete clients live in the `reddit` and `llm`
//! crates and are injected by the binary.

pub mod extract;
pub mod pipeline;
pub mod prompt;
pub mod traits;

pub use extract::extract_username;
pub use pipeline::{PersonaError, build_persona};
pub use prompt::{comment_block, post_block, render_prompt};
pub use traits::{Comment, ContentSource, ModelError, PersonaModel, Post, SourceError};
