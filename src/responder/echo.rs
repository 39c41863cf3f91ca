//! Echo placeholder policy
//!
//! Replies with a fixed prefix followed by the first `max_chars` characters
//! of the user message. Deterministic and side-effect free.

use crate::error::Result;
use crate::responder::Responder;
use async_trait::async_trait;

/// Placeholder responder that echoes a truncated copy of the message
///
/// # Examples
///
/// ```
/// use divebuddy::responder::EchoResponder;
///
/// let echo = EchoResponder::default();
/// assert_eq!(echo.reply_for("Hello world"), "Echo: Hello world");
/// ```
#[derive(Debug, Clone)]
pub struct EchoResponder {
    prefix: String,
    max_chars: usize,
}

impl EchoResponder {
    /// Create an echo responder with the given prefix and character limit
    pub fn new(prefix: impl Into<String>, max_chars: usize) -> Self {
        Self {
            prefix: prefix.into(),
            max_chars,
        }
    }

    /// Build the reply synchronously
    ///
    /// Truncation counts Unicode scalar values, so a multi-byte character
    /// is never split.
    pub fn reply_for(&self, message: &str) -> String {
        let cut = message
            .char_indices()
            .nth(self.max_chars)
            .map(|(idx, _)| idx)
            .unwrap_or(message.len());
        format!("{}{}", self.prefix, &message[..cut])
    }
}

impl Default for EchoResponder {
    fn default() -> Self {
        Self::new("Echo: ", 100)
    }
}

#[async_trait]
impl Responder for EchoResponder {
    fn name(&self) -> &str {
        "echo"
    }

    async fn respond(&self, message: &str) -> Result<String> {
        Ok(self.reply_for(message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_message_is_echoed_whole() {
        let echo = EchoResponder::default();
        assert_eq!(echo.reply_for("Hello world"), "Echo: Hello world");
    }

    #[test]
    fn test_long_message_truncated_at_100_chars() {
        let echo = EchoResponder::default();
        let input: String = (0..150).map(|i| char::from(b'a' + (i % 26) as u8)).collect();
        let reply = echo.reply_for(&input);
        assert_eq!(reply, format!("Echo: {}", &input[..100]));
        assert_eq!(reply.chars().count(), "Echo: ".len() + 100);
    }

    #[test]
    fn test_exactly_100_chars_not_truncated() {
        let echo = EchoResponder::default();
        let input = "x".repeat(100);
        assert_eq!(echo.reply_for(&input), format!("Echo: {}", input));
    }

    #[test]
    fn test_truncation_respects_char_boundaries() {
        let echo = EchoResponder::new("Echo: ", 3);
        assert_eq!(echo.reply_for("🐠🐢🦈🐙"), "Echo: 🐠🐢🦈");
    }

    #[test]
    fn test_empty_message_still_yields_non_empty_reply() {
        let echo = EchoResponder::default();
        assert_eq!(echo.reply_for(""), "Echo: ");
    }

    #[tokio::test]
    async fn test_respond_matches_reply_for() {
        let echo = EchoResponder::default();
        let reply = echo.respond("dive sites near Tioman").await.unwrap();
        assert_eq!(reply, "Echo: dive sites near Tioman");
    }
}
