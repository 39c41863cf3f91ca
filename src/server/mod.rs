//! HTTP surface of the responder service
//!
//! Routes:
//!
//! - `POST /api/chat` -- the chat round trip (see [`crate::protocol`])
//! - `GET /learn` -- featured topic catalog
//! - `GET /learn/{topic}` -- raw markdown of one topic, `404` if unknown

pub mod handlers;

use crate::config::Config;
use crate::content::{ContentLibrary, LEARN_ROUTE};
use crate::error::Result;
use crate::protocol::CHAT_ROUTE;
use crate::responder::{create_responder, Responder};
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;

/// Largest chat request body accepted; larger bodies get the apology
pub const MAX_CHAT_BODY_BYTES: usize = 64 * 1024;

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    /// Reply policy
    pub responder: Arc<dyn Responder>,
    /// Learning content lookup
    pub content: Arc<ContentLibrary>,
}

impl AppState {
    /// Build state from configuration
    ///
    /// # Errors
    ///
    /// Returns error if the responder policy is unknown
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self {
            responder: create_responder(&config.responder)?,
            content: Arc::new(ContentLibrary::new(config.content.dir.clone())),
        })
    }
}

/// Build the application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            CHAT_ROUTE,
            post(handlers::chat).layer(DefaultBodyLimit::max(MAX_CHAT_BODY_BYTES)),
        )
        .route(LEARN_ROUTE, get(handlers::list_topics))
        .route(&format!("{}/:topic", LEARN_ROUTE), get(handlers::get_topic))
        .with_state(state)
}

/// Bind the configured address and serve until Ctrl-C
///
/// # Errors
///
/// Returns error if the listener cannot be bound or the server fails
pub async fn serve(config: &Config) -> Result<()> {
    let state = AppState::from_config(config)?;
    tracing::info!(
        policy = state.responder.name(),
        content_dir = %state.content.root().display(),
        "Responder service configured"
    );

    let router = build_router(state);
    let listener = tokio::net::TcpListener::bind(config.server.bind_address()).await?;
    tracing::info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
