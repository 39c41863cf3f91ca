//! Request handlers

use crate::content::{default_catalog, CHAT_PAGE_ROUTE};
use crate::error::DiveBuddyError;
use crate::protocol::{ChatReply, ChatRequest};
use crate::server::AppState;
use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

/// `POST /api/chat`
///
/// The body is decoded by hand so that any decode failure, an oversized
/// body, and any responder failure all end up as the apology reply with a
/// `500`.
pub async fn chat(
    State(state): State<AppState>,
    body: std::result::Result<Bytes, BytesRejection>,
) -> Response {
    let body = match body {
        Ok(body) => body,
        Err(rejection) => {
            tracing::warn!(
                status = %rejection.status(),
                "Rejecting unreadable chat body: {}",
                rejection
            );
            return apology();
        }
    };

    let request = match ChatRequest::decode(&body) {
        Ok(request) => request,
        Err(e) => {
            tracing::warn!("Rejecting malformed chat request: {}", e);
            return apology();
        }
    };

    tracing::debug!(
        chars = request.message.chars().count(),
        policy = state.responder.name(),
        "Handling chat request"
    );

    match state.responder.respond(&request.message).await {
        Ok(reply) => (StatusCode::OK, Json(ChatReply::new(reply))).into_response(),
        Err(e) => {
            tracing::warn!("Responder failed: {:#}", e);
            apology()
        }
    }
}

fn apology() -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, Json(ChatReply::apology())).into_response()
}

/// `GET /learn`
///
/// The featured catalog plus the link to the chat page.
pub async fn list_topics() -> impl IntoResponse {
    Json(json!({ "topics": default_catalog(), "chat_href": CHAT_PAGE_ROUTE }))
}

/// `GET /learn/{topic}`
pub async fn get_topic(State(state): State<AppState>, Path(topic): Path<String>) -> Response {
    match state.content.load(&topic) {
        Ok(source) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/markdown; charset=utf-8")],
            source,
        )
            .into_response(),
        Err(e) => match e.downcast_ref::<DiveBuddyError>() {
            Some(DiveBuddyError::TopicNotFound(_)) | Some(DiveBuddyError::InvalidTopic(_)) => {
                tracing::debug!(topic = %topic, "Topic not found");
                (StatusCode::NOT_FOUND, "Not found").into_response()
            }
            _ => {
                tracing::warn!(topic = %topic, "Failed to load topic: {:#}", e);
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        },
    }
}
