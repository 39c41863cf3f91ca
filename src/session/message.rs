//! Transcript messages
//!
//! A [`Transcript`] is the ordered list of [`Message`]s of one chat session.
//! It holds at most one pending assistant message at a time.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Who authored a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// The person typing
    User,
    /// The responder service
    Assistant,
    /// Session-level notices
    System,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::User => write!(f, "user"),
            Self::Assistant => write!(f, "assistant"),
            Self::System => write!(f, "system"),
        }
    }
}

/// One turn in a conversation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Author of the message
    pub role: Role,
    /// Message body
    pub text: String,
    /// Local creation time
    pub created_at: DateTime<Local>,
    /// True only for the assistant placeholder awaiting a reply
    pub pending: bool,
}

impl Message {
    fn new(role: Role, text: impl Into<String>, pending: bool) -> Self {
        Self {
            role,
            text: text.into(),
            created_at: Local::now(),
            pending,
        }
    }

    /// Creates a user message
    ///
    /// # Examples
    ///
    /// ```
    /// use divebuddy::session::{Message, Role};
    ///
    /// let msg = Message::user("Where can I dive in June?");
    /// assert_eq!(msg.role, Role::User);
    /// assert!(!msg.pending);
    /// ```
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Role::User, text, false)
    }

    /// Creates a resolved assistant message
    pub fn assistant(text: impl Into<String>) -> Self {
        Self::new(Role::Assistant, text, false)
    }

    /// Creates a system message
    pub fn system(text: impl Into<String>) -> Self {
        Self::new(Role::System, text, false)
    }

    /// Creates the assistant placeholder shown while a reply is in flight
    pub fn pending(text: impl Into<String>) -> Self {
        Self::new(Role::Assistant, text, true)
    }

    /// Creation time as `HH:MM:SS`
    pub fn timestamp(&self) -> String {
        self.created_at.format("%H:%M:%S").to_string()
    }
}

/// Ordered message history of a single session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    /// Creates an empty transcript
    pub fn new() -> Self {
        Self::default()
    }

    /// All messages in order
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Number of messages
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Returns true if no message has been added
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Appends a message
    ///
    /// Callers must not push a pending message while another one exists.
    pub fn push(&mut self, message: Message) {
        debug_assert!(
            !(message.pending && self.pending_index().is_some()),
            "transcript already holds a pending message"
        );
        self.messages.push(message);
    }

    /// Index of the first pending message, if any
    pub fn pending_index(&self) -> Option<usize> {
        self.messages.iter().position(|m| m.pending)
    }

    /// Number of pending messages (0 or 1 while the invariant holds)
    pub fn pending_count(&self) -> usize {
        self.messages.iter().filter(|m| m.pending).count()
    }

    /// Replaces the pending message with `resolved`, or appends it if none
    ///
    /// Returns the index the resolved message now occupies.
    ///
    /// # Examples
    ///
    /// ```
    /// use divebuddy::session::{Message, Transcript};
    ///
    /// let mut transcript = Transcript::new();
    /// transcript.push(Message::user("hi"));
    /// transcript.push(Message::pending("Thinking..."));
    /// let idx = transcript.resolve_pending(Message::assistant("Echo: hi"));
    /// assert_eq!(idx, 1);
    /// assert_eq!(transcript.len(), 2);
    /// assert_eq!(transcript.pending_count(), 0);
    /// ```
    pub fn resolve_pending(&mut self, resolved: Message) -> usize {
        match self.pending_index() {
            Some(idx) => {
                self.messages[idx] = resolved;
                idx
            }
            None => {
                tracing::debug!("No pending message to replace; appending reply");
                self.messages.push(resolved);
                self.messages.len() - 1
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_set_role_and_pending() {
        assert_eq!(Message::user("a").role, Role::User);
        assert_eq!(Message::assistant("b").role, Role::Assistant);
        assert_eq!(Message::system("c").role, Role::System);

        let pending = Message::pending("Thinking...");
        assert_eq!(pending.role, Role::Assistant);
        assert!(pending.pending);
    }

    #[test]
    fn test_timestamp_format() {
        let ts = Message::user("x").timestamp();
        assert_eq!(ts.len(), 8);
        assert_eq!(ts.matches(':').count(), 2);
    }

    #[test]
    fn test_resolve_pending_replaces_in_place() {
        let mut transcript = Transcript::new();
        transcript.push(Message::user("first"));
        transcript.push(Message::pending("Thinking..."));

        let idx = transcript.resolve_pending(Message::assistant("Echo: first"));

        assert_eq!(idx, 1);
        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript.messages()[1].text, "Echo: first");
        assert!(!transcript.messages()[1].pending);
    }

    #[test]
    fn test_resolve_without_pending_appends() {
        let mut transcript = Transcript::new();
        transcript.push(Message::user("first"));

        let idx = transcript.resolve_pending(Message::assistant("late reply"));

        assert_eq!(idx, 1);
        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript.messages()[1].text, "late reply");
    }

    #[test]
    fn test_role_serializes_lowercase() {
        let json = serde_json::to_value(Message::pending("x")).unwrap();
        assert_eq!(json["role"], "assistant");
        assert_eq!(json["pending"], true);
    }
}
