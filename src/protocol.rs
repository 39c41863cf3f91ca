//! Wire contract between the chat client and the responder service
//!
//! `POST /api/chat` takes `{ "message": "<string>" }` and always answers
//! with `{ "reply": "<string>" }`, either `200` with the generated text or
//! `500` with [`APOLOGY_REPLY`].

use crate::error::{DiveBuddyError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Route of the chat endpoint
pub const CHAT_ROUTE: &str = "/api/chat";

/// Fixed reply text returned alongside a server-error status
pub const APOLOGY_REPLY: &str = "Sorry, something went wrong.";

/// Request body sent by the chat client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    /// The user's message
    pub message: String,
}

impl ChatRequest {
    /// Build a request for the given text
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Decode a raw request body, coercing `message` to text
    ///
    /// Strings are taken verbatim; booleans become `true`/`false` and
    /// numbers their shortest text, with integral values printed without a
    /// fraction. Anything else (bad JSON, a non-object body, a missing or null
    /// `message`, arrays, nested objects) is reported as a single
    /// serialization failure; callers do not distinguish between them.
    ///
    /// # Examples
    ///
    /// ```
    /// use divebuddy::protocol::ChatRequest;
    ///
    /// let req = ChatRequest::decode(br#"{"message": 42}"#).unwrap();
    /// assert_eq!(req.message, "42");
    /// assert!(ChatRequest::decode(b"not json").is_err());
    /// ```
    pub fn decode(body: &[u8]) -> Result<Self> {
        let value: Value = serde_json::from_slice(body).map_err(DiveBuddyError::from)?;
        let message = match value.get("message") {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => number_text(n),
            Some(v @ Value::Bool(_)) => v.to_string(),
            _ => {
                return Err(DiveBuddyError::Serialization(serde::de::Error::custom(
                    "request body has no usable `message` field",
                ))
                .into())
            }
        };
        Ok(Self { message })
    }
}

/// Number text as a browser would print it: `3.0` becomes `3`
fn number_text(n: &serde_json::Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.is_finite() && f.fract() == 0.0 && f.abs() < 1e21 => {
            if f == 0.0 {
                "0".to_string()
            } else {
                format!("{:.0}", f)
            }
        }
        _ => n.to_string(),
    }
}

/// Response body returned by the responder service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    /// Generated reply text, or the apology on failure
    pub reply: String,
}

impl ChatReply {
    /// Build a reply carrying the given text
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
        }
    }

    /// The reply sent when the request could not be handled
    pub fn apology() -> Self {
        Self::new(APOLOGY_REPLY)
    }
}
