//! DiveBuddy - dive-training assistant library
//!
//! This library provides the chat round trip between a terminal client and a
//! reply-generating HTTP service, plus lookup of Open Water learning content.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//!
//! - `protocol`: Wire types for `POST /api/chat`
//! - `responder`: Reply policy abstraction and the echo placeholder policy
//! - `server`: HTTP routes (chat endpoint and learning content)
//! - `session`: Chat session client, transcript, transport and rendering
//! - `content`: File-backed learning topics and the featured catalog
//! - `config`: Configuration management and validation
//! - `error`: Error types and result aliases
//! - `cli`: Command-line interface definition
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use divebuddy::config::Config;
//! use divebuddy::session::{ChatSession, HttpChatTransport};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::default();
//!     let transport = HttpChatTransport::new(&config.chat)?;
//!     let mut session = ChatSession::new(Arc::new(transport));
//!     session.send("dive sites near Tioman").await;
//!     println!("{:?}", session.messages());
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod protocol;
pub mod responder;
pub mod server;
pub mod session;

// Re-export commonly used types
pub use config::Config;
pub use error::{DiveBuddyError, Result};
pub use protocol::{ChatReply, ChatRequest};
pub use responder::{EchoResponder, Responder};
pub use session::{ChatSession, Message, Role};

#[cfg(test)]
pub mod test_utils;
