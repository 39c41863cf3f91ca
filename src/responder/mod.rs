//! Responder module for DiveBuddy
//!
//! A responder maps one user message to one reply string. The service holds
//! no conversation state, so every call is independent. The only policy
//! today is [`EchoResponder`]; a retrieval-backed policy plugs in behind the
//! same [`Responder`] trait without touching the HTTP contract.

pub mod echo;

pub use echo::EchoResponder;

use crate::config::ResponderConfig;
use crate::error::{DiveBuddyError, Result};
use async_trait::async_trait;
use std::sync::Arc;

/// Names accepted by `responder.policy`
pub const POLICIES: &[&str] = &["echo"];

/// Reply-generating policy behind `POST /api/chat`
#[async_trait]
pub trait Responder: Send + Sync {
    /// Short policy name used in logs
    fn name(&self) -> &str;

    /// Produce a reply for a single user message
    ///
    /// # Errors
    ///
    /// Implementations return an error when no reply can be produced; the
    /// HTTP layer turns it into the fixed apology reply.
    async fn respond(&self, message: &str) -> Result<String>;
}

/// Create a responder from configuration
///
/// # Errors
///
/// Returns a `Config` error if the policy name is unknown
///
/// # Examples
///
/// ```
/// use divebuddy::config::ResponderConfig;
/// use divebuddy::responder::create_responder;
///
/// let responder = create_responder(&ResponderConfig::default()).unwrap();
/// assert_eq!(responder.name(), "echo");
/// ```
pub fn create_responder(config: &ResponderConfig) -> Result<Arc<dyn Responder>> {
    match config.policy.as_str() {
        "echo" => Ok(Arc::new(EchoResponder::new(
            config.echo_prefix.clone(),
            config.max_echo_chars,
        ))),
        other => Err(DiveBuddyError::Config(format!("Unknown responder policy: {}", other)).into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_responder_echo() {
        let responder = create_responder(&ResponderConfig::default()).unwrap();
        assert_eq!(responder.name(), "echo");
    }

    #[test]
    fn test_create_responder_invalid_policy() {
        let config = ResponderConfig {
            policy: "llm".to_string(),
            ..Default::default()
        };
        let err = create_responder(&config).err().unwrap();
        assert!(err.to_string().contains("Unknown responder policy"));
    }

    #[tokio::test]
    async fn test_created_responder_uses_configured_limit() {
        let config = ResponderConfig {
            max_echo_chars: 4,
            ..Default::default()
        };
        let responder = create_responder(&config).unwrap();
        assert_eq!(responder.respond("Tioman").await.unwrap(), "Echo: Tiom");
    }
}
