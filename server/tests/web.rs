use async_trait::async_trait;
use axum::{extract::State, http::StatusCode, Json};
use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use persona::{Comment, ContentSource, ModelError, PersonaModel, Post, SourceError};
use persona_server::{AppState, GenerateRequest, generate};

struct FakeSource {
    calls: AtomicUsize,
    fail: bool,
}

impl FakeSource {
    fn new(fail: bool) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            fail,
        }
    }
}

#[async_trait]
impl ContentSource for FakeSource {
    async fn user_content(
        &self,
        username: &str,
    ) -> Result<(Vec<Post>, Vec<Comment>), SourceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(SourceError::Network("connection refused".into()));
        }
        Ok((
            vec![Post {
                title: format!("hello from {username}"),
                body: "body".into(),
            }],
            vec![Comment { body: "reply".into() }],
        ))
    }
}

struct FakeModel {
    calls: AtomicUsize,
    reply: String,
}

impl FakeModel {
    fn new(reply: &str) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            reply: reply.to_string(),
        }
    }
}

#[async_trait]
impl PersonaModel for FakeModel {
    async fn complete(&self, _prompt: &str) -> Result<String, ModelError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.reply.clone())
    }
}

fn state_with(
    source: Arc<FakeSource>,
    model: Arc<FakeModel>,
    out_dir: &std::path::Path,
) -> AppState {
    AppState {
        source,
        model,
        out_dir: out_dir.to_path_buf(),
    }
}

#[tokio::test]
async fn success_writes_the_file_and_returns_the_text() {
    let dir = tempfile::tempdir().unwrap();
    let source = Arc::new(FakeSource::new(false));
    let model = Arc::new(FakeModel::new("## A Persona\nfactual."));
    let state = state_with(source.clone(), model.clone(), dir.path());

    let Json(resp) = generate(
        State(state),
        Json(GenerateRequest {
            url: "https://www.reddit.com/user/kojied".into(),
        }),
    )
    .await
    .unwrap();

    assert_eq!(resp.username, "kojied");
    assert_eq!(resp.filename, "kojied_persona.txt");
    assert_eq!(resp.persona, "## A Persona\nfactual.");

    // File content equals the generator output byte for byte, no framing.
    let on_disk = std::fs::read(dir.path().join("kojied_persona.txt")).unwrap();
    assert_eq!(on_disk, b"## A Persona\nfactual.");
}

#[tokio::test]
async fn rerun_overwrites_the_previous_file() {
    let dir = tempfile::tempdir().unwrap();
    let source = Arc::new(FakeSource::new(false));

    for reply in ["first run", "second run"] {
        let model = Arc::new(FakeModel::new(reply));
        let state = state_with(source.clone(), model, dir.path());
        let Json(resp) = generate(
            State(state),
            Json(GenerateRequest {
                url: "https://www.reddit.com/user/kojied".into(),
            }),
        )
        .await
        .unwrap();
        assert_eq!(resp.persona, reply);
    }

    let on_disk = std::fs::read_to_string(dir.path().join("kojied_persona.txt")).unwrap();
    assert_eq!(on_disk, "second run");
}

#[tokio::test]
async fn invalid_url_halts_before_any_network_call() {
    let dir = tempfile::tempdir().unwrap();
    let source = Arc::new(FakeSource::new(false));
    let model = Arc::new(FakeModel::new("unused"));
    let state = state_with(source.clone(), model.clone(), dir.path());

    let (status, message) = generate(
        State(state),
        Json(GenerateRequest {
            url: "https://example.com".into(),
        }),
    )
    .await
    .unwrap_err();

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(message, "Invalid Reddit URL.");
    assert_eq!(source.calls.load(Ordering::SeqCst), 0);
    assert_eq!(model.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn fetch_failure_prevents_generation_and_file_output() {
    let dir = tempfile::tempdir().unwrap();
    let source = Arc::new(FakeSource::new(true));
    let model = Arc::new(FakeModel::new("unused"));
    let state = state_with(source.clone(), model.clone(), dir.path());

    let (status, message) = generate(
        State(state),
        Json(GenerateRequest {
            url: "https://www.reddit.com/user/kojied".into(),
        }),
    )
    .await
    .unwrap_err();

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(message.contains("connection refused"));
    assert_eq!(model.calls.load(Ordering::SeqCst), 0);
    assert!(!dir.path().join("kojied_persona.txt").exists());
}

#[tokio::test]
async fn write_failure_surfaces_as_internal_error() {
    let source = Arc::new(FakeSource::new(false));
    let model = Arc::new(FakeModel::new("text"));
    let state = state_with(
        source,
        model,
        std::path::Path::new("/nonexistent-persona-out-dir"),
    );

    let (status, _message) = generate(
        State(state),
        Json(GenerateRequest {
            url: "https://www.reddit.com/user/kojied".into(),
        }),
    )
    .await
    .unwrap_err();

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}
