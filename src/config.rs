//! Configuration management for DiveBuddy
//!
//! This module handles loading, parsing, validating, and managing
//! configuration from files, environment variables, and CLI overrides.

use crate::error::{DiveBuddyError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure for DiveBuddy
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// HTTP server settings for the chat responder service
    #[serde(default)]
    pub server: ServerConfig,
    /// Reply policy used by the responder service
    #[serde(default)]
    pub responder: ResponderConfig,
    /// Chat session client settings
    #[serde(default)]
    pub chat: ChatConfig,
    /// Learning content location
    #[serde(default)]
    pub content: ContentConfig,
    /// Log output settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address to bind
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// `host:port` string suitable for binding a listener
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Responder policy configuration
///
/// Only the `echo` placeholder policy exists today; a retrieval-backed
/// policy would add its own settings block here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponderConfig {
    /// Name of the reply policy
    #[serde(default = "default_policy")]
    pub policy: String,

    /// Literal prefix prepended to echoed text
    #[serde(default = "default_echo_prefix")]
    pub echo_prefix: String,

    /// Maximum number of characters of the user message that are echoed
    #[serde(default = "default_max_echo_chars")]
    pub max_echo_chars: usize,
}

fn default_policy() -> String {
    "echo".to_string()
}

fn default_echo_prefix() -> String {
    "Echo: ".to_string()
}

fn default_max_echo_chars() -> usize {
    100
}

impl Default for ResponderConfig {
    fn default() -> Self {
        Self {
            policy: default_policy(),
            echo_prefix: default_echo_prefix(),
            max_echo_chars: default_max_echo_chars(),
        }
    }
}

/// Chat session client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatConfig {
    /// Full URL of the chat endpoint
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Request timeout for a single exchange (seconds)
    #[serde(default = "default_chat_timeout")]
    pub timeout_seconds: u64,

    /// Text shown in the pending assistant message while a reply is in flight
    #[serde(default = "default_placeholder_text")]
    pub placeholder_text: String,
}

fn default_api_url() -> String {
    "http://127.0.0.1:3000/api/chat".to_string()
}

fn default_chat_timeout() -> u64 {
    30
}

fn default_placeholder_text() -> String {
    crate::session::PLACEHOLDER_TEXT.to_string()
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            timeout_seconds: default_chat_timeout(),
            placeholder_text: default_placeholder_text(),
        }
    }
}

/// Learning content configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentConfig {
    /// Directory holding `<topic>.md` files
    #[serde(default = "default_content_dir")]
    pub dir: PathBuf,
}

fn default_content_dir() -> PathBuf {
    PathBuf::from("data/education/open-water")
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            dir: default_content_dir(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Emit JSON-formatted log lines instead of human-readable ones
    #[serde(default)]
    pub json: bool,
}

impl Config {
    /// Load configuration from file with environment and CLI overrides
    ///
    /// # Arguments
    ///
    /// * `path` - Path to configuration file
    /// * `cli` - CLI arguments for overrides
    ///
    /// # Errors
    ///
    /// Returns error if the file exists but cannot be read or parsed
    pub fn load(path: &str, cli: &crate::cli::Cli) -> Result<Self> {
        let mut config = if Path::new(path).exists() {
            Self::from_file(path)?
        } else {
            tracing::warn!("Config file not found at {}, using defaults", path);
            Self::default()
        };

        config.apply_env_vars();
        config.apply_cli_overrides(cli);

        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| DiveBuddyError::Config(format!("Failed to read config file: {}", e)))?;
        let config = serde_yaml::from_str(&contents).map_err(DiveBuddyError::from)?;
        Ok(config)
    }

    fn apply_env_vars(&mut self) {
        if let Ok(host) = std::env::var("DIVEBUDDY_HOST") {
            self.server.host = host;
        }

        if let Ok(port) = std::env::var("DIVEBUDDY_PORT") {
            match port.parse::<u16>() {
                Ok(v) => self.server.port = v,
                Err(_) => tracing::warn!("Invalid DIVEBUDDY_PORT: {}", port),
            }
        }

        if let Ok(policy) = std::env::var("DIVEBUDDY_RESPONDER") {
            self.responder.policy = policy;
        }

        if let Ok(max_chars) = std::env::var("DIVEBUDDY_MAX_ECHO_CHARS") {
            match max_chars.parse::<usize>() {
                Ok(v) => self.responder.max_echo_chars = v,
                Err(_) => tracing::warn!("Invalid DIVEBUDDY_MAX_ECHO_CHARS: {}", max_chars),
            }
        }

        if let Ok(api_url) = std::env::var("DIVEBUDDY_CHAT_API_URL") {
            tracing::debug!(api_url = %api_url, "Env override: DIVEBUDDY_CHAT_API_URL");
            self.chat.api_url = api_url;
        }

        if let Ok(timeout) = std::env::var("DIVEBUDDY_CHAT_TIMEOUT_SECONDS") {
            match timeout.parse::<u64>() {
                Ok(v) => self.chat.timeout_seconds = v,
                Err(_) => tracing::warn!("Invalid DIVEBUDDY_CHAT_TIMEOUT_SECONDS: {}", timeout),
            }
        }

        if let Ok(dir) = std::env::var("DIVEBUDDY_CONTENT_DIR") {
            tracing::debug!(dir = %dir, "Env override: DIVEBUDDY_CONTENT_DIR");
            self.content.dir = PathBuf::from(dir);
        }
    }

    fn apply_cli_overrides(&mut self, cli: &crate::cli::Cli) {
        if cli.json_logs {
            self.logging.json = true;
        }

        match &cli.command {
            crate::cli::Commands::Serve { host, port } => {
                if let Some(host) = host {
                    self.server.host = host.clone();
                }
                if let Some(port) = port {
                    self.server.port = *port;
                }
            }
            crate::cli::Commands::Chat { api_url } => {
                if let Some(url) = api_url {
                    self.chat.api_url = url.clone();
                }
            }
            crate::cli::Commands::Learn { .. } => {}
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns a `Config` error describing the first invalid field
    pub fn validate(&self) -> Result<()> {
        if self.server.host.trim().is_empty() {
            return Err(DiveBuddyError::Config("server.host cannot be empty".to_string()).into());
        }

        if self.server.port == 0 {
            return Err(
                DiveBuddyError::Config("server.port must be greater than 0".to_string()).into(),
            );
        }

        let valid_policies = crate::responder::POLICIES;
        if !valid_policies.contains(&self.responder.policy.as_str()) {
            return Err(DiveBuddyError::Config(format!(
                "Invalid responder policy: {}. Must be one of: {}",
                self.responder.policy,
                valid_policies.join(", ")
            ))
            .into());
        }

        if self.responder.max_echo_chars == 0 {
            return Err(DiveBuddyError::Config(
                "responder.max_echo_chars must be greater than 0".to_string(),
            )
            .into());
        }

        if self.responder.echo_prefix.is_empty() {
            return Err(
                DiveBuddyError::Config("responder.echo_prefix cannot be empty".to_string()).into(),
            );
        }

        if !(self.chat.api_url.starts_with("http://") || self.chat.api_url.starts_with("https://"))
        {
            return Err(DiveBuddyError::Config(format!(
                "chat.api_url must be an http(s) URL: {}",
                self.chat.api_url
            ))
            .into());
        }

        if self.chat.timeout_seconds == 0 {
            return Err(DiveBuddyError::Config(
                "chat.timeout_seconds must be greater than 0".to_string(),
            )
            .into());
        }

        if self.chat.placeholder_text.trim().is_empty() {
            return Err(DiveBuddyError::Config(
                "chat.placeholder_text cannot be empty".to_string(),
            )
            .into());
        }

        Ok(())
    }
}
