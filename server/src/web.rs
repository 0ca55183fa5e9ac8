use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::Html,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use std::{path::PathBuf, sync::Arc};
use tracing::{error, info};

use persona::{ContentSource, PersonaModel, build_persona, extract_username};

/// State shared across HTTP handlers: the two injected provider clients and
/// the directory persona files land in.
#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn ContentSource>,
    pub model: Arc<dyn PersonaModel>,
    pub out_dir: PathBuf,
}

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub url: String,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub username: String,
    pub filename: String,
    pub persona: String,
}

/// Serve the embedded single-page UI.
pub async fn index() -> Html<&'static str> {
    static INDEX: &str = include_str!("index.html");
    Html(INDEX)
}

/// Run the whole pipeline for one profile URL.
///
/// A URL without a recognizable username is rejected up front with an inline
/// message and no network call is made. Provider failures surface as 502,
/// a failed file write as 500; either way the request dies with the error
/// text and nothing partial is kept.
pub async fn generate(
    State(state): State<AppState>,
    Json(req): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, (StatusCode, String)> {
    let Some(username) = extract_username(&req.url) else {
        return Err((
            StatusCode::UNPROCESSABLE_ENTITY,
            "Invalid Reddit URL.".to_string(),
        ));
    };

    let persona = build_persona(state.source.as_ref(), state.model.as_ref(), &username)
        .await
        .map_err(|e| {
            error!(%username, %e, "persona generation failed");
            (StatusCode::BAD_GATEWAY, e.to_string())
        })?;

    let filename = format!("{username}_persona.txt");
    let path = state.out_dir.join(&filename);
    tokio::fs::write(&path, &persona).await.map_err(|e| {
        error!(path = %path.display(), %e, "failed writing persona file");
        (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
    })?;

    info!(%username, path = %path.display(), "persona saved");
    Ok(Json(GenerateResponse {
        username,
        filename,
        persona,
    }))
}

/// Build the application router with the provided state.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/persona", post(generate))
        .with_state(state)
}
