//! Command-line interface definition for DiveBuddy
//!
//! This module defines the CLI structure using clap's derive API,
//! providing commands for serving the chat API, chatting with it,
//! and reading learning content.

use clap::{Parser, Subcommand};

/// DiveBuddy - dive-training assistant
///
/// Serve the chat responder, talk to it from the terminal, or browse
/// the Open Water learning topics.
#[derive(Parser, Debug, Clone)]
#[command(name = "divebuddy")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/config.yaml")]
    pub config: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub json_logs: bool,

    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for DiveBuddy
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Run the chat responder HTTP service
    Serve {
        /// Override the bind host from config
        #[arg(long)]
        host: Option<String>,

        /// Override the bind port from config
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Start an interactive chat session against the responder service
    Chat {
        /// Override the chat endpoint URL (e.g. http://127.0.0.1:3000/api/chat)
        #[arg(long)]
        api_url: Option<String>,
    },

    /// List learning topics, or print one topic's content
    Learn {
        /// Topic slug (e.g. "buoyancy"); omit to list topics
        topic: Option<String>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

impl Default for Cli {
    fn default() -> Self {
        Self {
            config: Some("config/config.yaml".to_string()),
            verbose: false,
            json_logs: false,
            command: Commands::Learn { topic: None },
        }
    }
}
