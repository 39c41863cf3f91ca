//! Transport between the chat session and the responder service

use crate::config::ChatConfig;
use crate::error::{DiveBuddyError, Result};
use crate::protocol::{ChatReply, ChatRequest};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// Delivers one chat request and returns the service's reply
///
/// An `Ok` reply may carry the service's apology text; only failures to
/// reach the service or to decode its answer are errors.
#[async_trait]
pub trait ChatTransport: Send + Sync {
    /// Send a request and wait for the reply
    async fn send(&self, request: ChatRequest) -> Result<ChatReply>;
}

/// HTTP transport for `POST /api/chat`
///
/// # Examples
///
/// ```
/// use divebuddy::config::ChatConfig;
/// use divebuddy::session::HttpChatTransport;
///
/// let transport = HttpChatTransport::new(&ChatConfig::default()).unwrap();
/// assert_eq!(transport.url(), "http://127.0.0.1:3000/api/chat");
/// ```
#[derive(Debug, Clone)]
pub struct HttpChatTransport {
    client: Client,
    url: String,
}

impl HttpChatTransport {
    /// Build a transport from the chat configuration
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be initialized
    pub fn new(config: &ChatConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(concat!("divebuddy/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| DiveBuddyError::Transport(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            url: config.api_url.clone(),
        })
    }

    /// Endpoint this transport posts to
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl ChatTransport for HttpChatTransport {
    async fn send(&self, request: ChatRequest) -> Result<ChatReply> {
        tracing::debug!(url = %self.url, "Sending chat request");

        let response = self
            .client
            .post(&self.url)
            .json(&request)
            .send()
            .await
            .map_err(|e| DiveBuddyError::Transport(format!("Request failed: {}", e)))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| DiveBuddyError::Transport(format!("Failed to read body: {}", e)))?;

        let reply: ChatReply = serde_json::from_slice(&body).map_err(|e| {
            DiveBuddyError::Transport(format!("Undecodable reply (status {}): {}", status, e))
        })?;

        if !status.is_success() {
            tracing::warn!(%status, "Chat service answered with an error status");
        }

        Ok(reply)
    }
}
