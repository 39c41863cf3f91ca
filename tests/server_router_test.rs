//! In-process tests for the HTTP router
//!
//! Requests are driven through `tower::ServiceExt::oneshot`, so no socket
//! is bound.

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{json, Value};
use tempfile::tempdir;
use tower::ServiceExt;

use divebuddy::content::ContentLibrary;
use divebuddy::error::{DiveBuddyError, Result};
use divebuddy::responder::{EchoResponder, Responder};
use divebuddy::server::{build_router, AppState, MAX_CHAT_BODY_BYTES};

struct BrokenResponder;

#[async_trait]
impl Responder for BrokenResponder {
    fn name(&self) -> &str {
        "broken"
    }

    async fn respond(&self, _message: &str) -> Result<String> {
        Err(DiveBuddyError::Responder("index unavailable".to_string()).into())
    }
}

fn state_with(responder: Arc<dyn Responder>, content_dir: &std::path::Path) -> AppState {
    AppState {
        responder,
        content: Arc::new(ContentLibrary::new(content_dir)),
    }
}

fn echo_state() -> AppState {
    state_with(
        Arc::new(EchoResponder::default()),
        std::path::Path::new("data/education/open-water"),
    )
}

async fn post_chat(state: AppState, body: impl Into<Body>) -> (StatusCode, Value) {
    let response = build_router(state)
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/chat")
                .header("content-type", "application/json")
                .body(body.into())
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn get(state: AppState, uri: &str) -> (StatusCode, String) {
    let response = build_router(state)
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn test_chat_echoes_message() {
    let (status, body) = post_chat(echo_state(), json!({"message": "Hello world"}).to_string()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"reply": "Echo: Hello world"}));
}

#[tokio::test]
async fn test_chat_truncates_long_message_to_100_chars() {
    let message = "abcdefghij".repeat(15);
    let (status, body) = post_chat(echo_state(), json!({"message": message}).to_string()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["reply"], format!("Echo: {}", &message[..100]));
}

#[tokio::test]
async fn test_chat_malformed_body_returns_apology() {
    for raw in ["{not json", "", "[]", "{}", r#"{"message":null}"#] {
        let (status, body) = post_chat(echo_state(), raw.to_string()).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "body {:?}", raw);
        assert_eq!(body, json!({"reply": "Sorry, something went wrong."}));
    }
}

#[tokio::test]
async fn test_chat_oversized_body_returns_apology() {
    let message = "a".repeat(3 * 1024 * 1024);
    let (status, body) = post_chat(echo_state(), json!({"message": message}).to_string()).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"reply": "Sorry, something went wrong."}));
}

#[tokio::test]
async fn test_chat_body_just_over_limit_returns_apology() {
    let filler = "b".repeat(MAX_CHAT_BODY_BYTES);
    let (status, body) = post_chat(echo_state(), json!({"message": filler}).to_string()).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["reply"], "Sorry, something went wrong.");
}

#[tokio::test]
async fn test_chat_coerces_numeric_message() {
    let (status, body) = post_chat(echo_state(), r#"{"message": 18}"#).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["reply"], "Echo: 18");
}

#[tokio::test]
async fn test_chat_responder_failure_returns_apology() {
    let dir = tempdir().unwrap();
    let state = state_with(Arc::new(BrokenResponder), dir.path());
    let (status, body) = post_chat(state, json!({"message": "hi"}).to_string()).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["reply"], "Sorry, something went wrong.");
}

#[tokio::test]
async fn test_chat_rejects_get() {
    let (status, _) = get(echo_state(), "/api/chat").await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_learn_lists_catalog() {
    let (status, body) = get(echo_state(), "/learn").await;
    assert_eq!(status, StatusCode::OK);
    let json: Value = serde_json::from_str(&body).unwrap();
    let topics = json["topics"].as_array().unwrap();
    assert_eq!(topics.len(), 3);
    assert_eq!(topics[1]["id"], "buoyancy");
    assert_eq!(topics[1]["level"], "beginner");
    assert_eq!(topics[1]["href"], "/learn/buoyancy");
    assert_eq!(json["chat_href"], "/chat");
}

#[tokio::test]
async fn test_learn_topic_returns_markdown() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("nitrox.md"), "# Nitrox\n\nEnriched air.\n").unwrap();
    let state = state_with(Arc::new(EchoResponder::default()), dir.path());

    let (status, body) = get(state, "/learn/nitrox").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "# Nitrox\n\nEnriched air.\n");
}

#[tokio::test]
async fn test_learn_unknown_topic_is_404() {
    let dir = tempdir().unwrap();
    let state = state_with(Arc::new(EchoResponder::default()), dir.path());
    let (status, _) = get(state, "/learn/wreck-penetration").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_learn_invalid_slug_is_404() {
    let dir = tempdir().unwrap();
    let state = state_with(Arc::new(EchoResponder::default()), dir.path());
    let (status, _) = get(state, "/learn/..%2Fsecrets").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
