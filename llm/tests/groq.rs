use httpmock::Method::POST;
use httpmock::MockServer;

use llm::GroqClient;
use persona::{ModelError, PersonaModel};

#[tokio::test]
async fn concatenates_streamed_deltas() {
    let server = MockServer::start_async().await;
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/chat/completions")
            .header("authorization", "Bearer key")
            .body_contains("\"stream\":true")
            .body_contains("llama-3.3-70b-versatile");
        then.status(200)
            .header("content-type", "text/event-stream")
            .body(concat!(
                "data: {\"choices\":[{\"delta\":{\"role\":\"assistant\"}}]}\n\n",
                "data: {\"choices\":[{\"delta\":{\"content\":\"## Perso\"}}]}\n\n",
                "data: {\"choices\":[{\"delta\":{\"content\":\"na\"}}]}\n\n",
                "data: [DONE]\n\n",
            ));
    });

    let client = GroqClient::with_base_url("key", server.base_url());
    let text = client.complete("describe this user").await.unwrap();
    mock.assert();
    assert_eq!(text, "## Persona");
}

#[tokio::test]
async fn prompt_is_sent_as_a_single_user_message() {
    let server = MockServer::start_async().await;
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/chat/completions")
            .body_contains("\"role\":\"user\"")
            .body_contains("the rendered prompt");
        then.status(200)
            .header("content-type", "text/event-stream")
            .body("data: {\"choices\":[{\"delta\":{\"content\":\"ok\"}}]}\n\ndata: [DONE]\n\n");
    });

    let client = GroqClient::with_base_url("key", server.base_url());
    let text = client.complete("the rendered prompt").await.unwrap();
    mock.assert();
    assert_eq!(text, "ok");
}

#[tokio::test]
async fn plain_json_reply_is_accepted_as_fallback() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/chat/completions");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"choices":[{"message":{"role":"assistant","content":"whole reply"}}]}"#);
    });

    let client = GroqClient::with_base_url("key", server.base_url());
    let text = client.complete("prompt").await.unwrap();
    assert_eq!(text, "whole reply");
}

#[tokio::test]
async fn provider_error_body_surfaces_in_the_error() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/chat/completions");
        then.status(400)
            .header("content-type", "application/json")
            .body(r#"{"error":{"message":"Request too large for model"}}"#);
    });

    let client = GroqClient::with_base_url("bad", server.base_url());
    let err = client.complete("prompt").await.unwrap_err();
    match err {
        ModelError::Api(msg) => assert!(msg.contains("Request too large")),
        other => panic!("expected Api error, got {other:?}"),
    }
}
