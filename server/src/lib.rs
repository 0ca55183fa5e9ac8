//! Web front end for the persona pipeline.
//!
//! One embedded page drives one request handler: the browser posts a profile
//! URL, the handler runs extract → fetch → render → generate, writes the
//! persona to `<username>_persona.txt`, and hands the text back for display
//! and client-side download. No state survives a request beyond that file.

pub mod web;

pub use web::{AppState, GenerateRequest, GenerateResponse, app, generate, index};
