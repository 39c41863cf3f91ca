//! Chat session client
//!
//! [`ChatSession`] owns the transcript, the input buffer and the `loading`
//! flag of one browsing session. Each exchange moves through
//! `Idle -> Awaiting -> Idle`:
//!
//! 1. [`ChatSession::submit`] appends the user message and a pending
//!    assistant placeholder, then spawns the transport call.
//! 2. The returned [`PendingReply`] resolves exactly once, to a
//!    [`ReplyOutcome`].
//! 3. [`ChatSession::resolve`] swaps the placeholder for the reply or for
//!    [`ERROR_TEXT`].
//!
//! The session is the only writer of its transcript. Readers borrow
//! [`ChatSession::messages`], take a [`ChatSession::snapshot`], or follow
//! changes through [`ChatSession::subscribe`].

pub mod message;
pub mod render;
pub mod transport;

pub use message::{Message, Role, Transcript};
pub use render::{render_message, render_transcript, EMPTY_TRANSCRIPT_TEXT};
pub use transport::{ChatTransport, HttpChatTransport};

use crate::protocol::ChatRequest;
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Default text of the pending assistant placeholder
pub const PLACEHOLDER_TEXT: &str = "Thinking...";

/// Assistant text shown when the service cannot be reached
pub const ERROR_TEXT: &str = "Error: could not reach chat API.";

/// Observable state of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No request in flight
    Idle,
    /// Placeholder appended, waiting for the service
    Awaiting,
}

/// How an exchange ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplyOutcome {
    /// The service returned a reply string
    Reply(String),
    /// The service could not be reached or its answer could not be decoded
    Failed(String),
}

/// Handle to an in-flight exchange
///
/// Produced by [`ChatSession::submit`]; await [`PendingReply::outcome`] and
/// hand the result to [`ChatSession::resolve`].
#[derive(Debug)]
pub struct PendingReply {
    handle: JoinHandle<crate::error::Result<String>>,
}

impl PendingReply {
    /// Wait for the exchange to finish
    pub async fn outcome(self) -> ReplyOutcome {
        match self.handle.await {
            Ok(Ok(reply)) => ReplyOutcome::Reply(reply),
            Ok(Err(e)) => {
                tracing::warn!("Chat request failed: {:#}", e);
                ReplyOutcome::Failed(e.to_string())
            }
            Err(e) => {
                tracing::warn!("Chat request task aborted: {}", e);
                ReplyOutcome::Failed(e.to_string())
            }
        }
    }
}

/// In-memory chat session bound to one transport
pub struct ChatSession {
    transport: Arc<dyn ChatTransport>,
    transcript: Transcript,
    input: String,
    loading: bool,
    placeholder_text: String,
    snapshots: watch::Sender<Vec<Message>>,
}

impl ChatSession {
    /// Create an idle session with an empty transcript
    pub fn new(transport: Arc<dyn ChatTransport>) -> Self {
        let (snapshots, _) = watch::channel(Vec::new());
        Self {
            transport,
            transcript: Transcript::new(),
            input: String::new(),
            loading: false,
            placeholder_text: PLACEHOLDER_TEXT.to_string(),
            snapshots,
        }
    }

    /// Use a different placeholder text for pending replies
    pub fn with_placeholder_text(mut self, text: impl Into<String>) -> Self {
        self.placeholder_text = text.into();
        self
    }

    /// Current state
    pub fn state(&self) -> SessionState {
        if self.loading {
            SessionState::Awaiting
        } else {
            SessionState::Idle
        }
    }

    /// True while a request is in flight
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Replace the input buffer
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Current input buffer
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Whether the send affordance is enabled
    pub fn can_send(&self) -> bool {
        !self.loading && !self.input.trim().is_empty()
    }

    /// Borrow the transcript
    pub fn messages(&self) -> &[Message] {
        self.transcript.messages()
    }

    /// Owned copy of the transcript
    pub fn snapshot(&self) -> Vec<Message> {
        self.transcript.messages().to_vec()
    }

    /// Receive a fresh snapshot after every transcript change
    pub fn subscribe(&self) -> watch::Receiver<Vec<Message>> {
        self.snapshots.subscribe()
    }

    fn publish(&self) {
        self.snapshots.send_replace(self.snapshot());
    }

    /// Start an exchange for `text`
    ///
    /// Returns `None` without touching the transcript when `text` is blank
    /// or another exchange is still in flight. Otherwise appends the trimmed
    /// user message and the pending placeholder, clears the input buffer,
    /// enters `Awaiting`, and spawns the transport call on the current
    /// tokio runtime.
    pub fn submit(&mut self, text: &str) -> Option<PendingReply> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }
        if self.loading {
            tracing::debug!("Submit ignored while a reply is pending");
            return None;
        }

        self.transcript.push(Message::user(trimmed));
        self.input.clear();
        self.transcript
            .push(Message::pending(self.placeholder_text.clone()));
        self.loading = true;
        self.publish();

        let transport = Arc::clone(&self.transport);
        let request = ChatRequest::new(trimmed);
        let handle =
            tokio::spawn(async move { transport.send(request).await.map(|reply| reply.reply) });

        Some(PendingReply { handle })
    }

    /// Submit the current input buffer
    pub fn submit_input(&mut self) -> Option<PendingReply> {
        let text = self.input.clone();
        self.submit(&text)
    }

    /// Finish the exchange, replacing the placeholder with the outcome
    pub fn resolve(&mut self, outcome: ReplyOutcome) {
        let resolved = match outcome {
            ReplyOutcome::Reply(reply) => Message::assistant(reply),
            ReplyOutcome::Failed(_) => Message::assistant(ERROR_TEXT),
        };
        self.transcript.resolve_pending(resolved);
        self.loading = false;
        self.publish();
    }

    /// Submit `text`, wait for the reply and resolve it
    ///
    /// Returns false if the submit was rejected.
    pub async fn send(&mut self, text: &str) -> bool {
        match self.submit(text) {
            Some(pending) => {
                let outcome = pending.outcome().await;
                self.resolve(outcome);
                true
            }
            None => false,
        }
    }
}
