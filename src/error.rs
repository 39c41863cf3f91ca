//! Error types for DiveBuddy
//!
//! This module defines all error types used throughout the application,
//! using `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Main error type for DiveBuddy operations
///
/// Covers configuration loading, responder policies, the chat transport,
/// and learning-content lookups. None of these variants is ever sent over
/// the wire: the chat endpoint collapses every failure into one apology reply.
#[derive(Error, Debug)]
pub enum DiveBuddyError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// A responder policy failed to produce a reply
    #[error("Responder error: {0}")]
    Responder(String),

    /// The chat client could not reach the service or decode its reply
    #[error("Transport error: {0}")]
    Transport(String),

    /// Learning content could not be read
    #[error("Content error: {0}")]
    Content(String),

    /// No learning content exists for the requested topic
    #[error("Topic not found: {0}")]
    TopicNotFound(String),

    /// Topic slug contains characters outside `[A-Za-z0-9_-]`
    #[error("Invalid topic slug: {0}")]
    InvalidTopic(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type alias for DiveBuddy operations
///
/// Uses `anyhow::Error` so context can be attached while propagating;
/// callers that need to branch on the kind use `downcast_ref::<DiveBuddyError>()`.
pub type Result<T> = anyhow::Result<T>;
