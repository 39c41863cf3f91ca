/*!
Command handlers for the CLI

This module provides command handlers invoked by the CLI entrypoint:

- `serve` -- run the responder HTTP service
- `chat`  -- interactive terminal chat session
- `learn` -- list or print learning topics

These handlers are intentionally small and delegate to the library
components: server, session and content.
*/

use crate::config::Config;
use crate::error::Result;

// Special commands parser for the chat session
pub mod special_commands;

// Serve command handler
pub mod serve {
    //! Runs the responder service until interrupted.

    use super::*;

    /// Start the HTTP service
    pub async fn run_serve(config: Config) -> Result<()> {
        tracing::info!("Starting responder service");
        crate::server::serve(&config).await
    }
}

// Chat command handler
pub mod chat {
    //! Interactive chat session handler.
    //!
    //! Creates a `ChatSession` bound to the configured HTTP endpoint and
    //! runs a readline loop that submits each line to it.

    use super::*;
    use crate::commands::special_commands::{parse_special_command, print_help, SpecialCommand};
    use crate::session::{render_message, render_transcript, ChatSession, HttpChatTransport};
    use colored::Colorize;
    use rustyline::error::ReadlineError;
    use rustyline::DefaultEditor;
    use std::sync::Arc;

    /// Start interactive chat mode
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client or the line editor cannot be created
    pub async fn run_chat(config: Config) -> Result<()> {
        let transport = HttpChatTransport::new(&config.chat)?;
        tracing::info!(url = transport.url(), "Starting chat session");

        let mut session = ChatSession::new(Arc::new(transport))
            .with_placeholder_text(config.chat.placeholder_text.clone());
        let mut rl = DefaultEditor::new()?;

        print_welcome_banner(&config.chat.api_url);
        println!("{}\n", render_transcript(session.messages()));

        loop {
            match rl.readline(&format!("{} ", "you>".cyan().bold())) {
                Ok(line) => {
                    match parse_special_command(&line) {
                        SpecialCommand::Exit => break,
                        SpecialCommand::Help => {
                            print_help();
                            continue;
                        }
                        SpecialCommand::Transcript => {
                            println!("{}\n", render_transcript(session.messages()));
                            continue;
                        }
                        SpecialCommand::None => {}
                    }

                    session.set_input(line);
                    if !session.can_send() {
                        continue;
                    }
                    rl.add_history_entry(session.input().trim())?;

                    let Some(pending) = session.submit_input() else {
                        continue;
                    };
                    if let Some(placeholder) = session.messages().last() {
                        println!("{}", render_message(placeholder));
                    }

                    let outcome = pending.outcome().await;
                    session.resolve(outcome);
                    if let Some(reply) = session.messages().last() {
                        println!("{}\n", render_message(reply));
                    }
                }
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
                Err(e) => {
                    tracing::error!("Readline error: {}", e);
                    return Err(e.into());
                }
            }
        }

        tracing::info!(messages = session.messages().len(), "Chat session ended");
        println!("Goodbye!");
        Ok(())
    }

    fn print_welcome_banner(api_url: &str) {
        println!("{}", "DiveBuddy chat".green().bold());
        println!("Ask about dive sites, skills, or trip planning.");
        println!("Connected to {}. Type /help for commands.\n", api_url.dimmed());
    }
}

// Learn command handler
pub mod learn {
    //! Lists learning topics or prints one topic's markdown.

    use super::*;
    use crate::content::{default_catalog, ContentLibrary};

    /// List topics, or print `topic` if given
    ///
    /// # Errors
    ///
    /// Returns `TopicNotFound` / `InvalidTopic` for unknown slugs, or an IO
    /// error if the content directory cannot be read
    pub fn run_learn(config: &Config, topic: Option<&str>) -> Result<()> {
        let library = ContentLibrary::new(config.content.dir.clone());

        match topic {
            Some(slug) => {
                let source = library.load(slug)?;
                print!("{}", source);
                if !source.ends_with('\n') {
                    println!();
                }
            }
            None => {
                let available = library.list_topics()?;
                let catalog = default_catalog();
                println!("Featured topics:");
                for entry in &catalog {
                    let marker = if available.contains(&entry.id) { "" } else { " (no content)" };
                    println!("  {:<12} {:<24} [{}]{}", entry.id, entry.title, entry.level, marker);
                }

                let others: Vec<&String> = available
                    .iter()
                    .filter(|slug| !catalog.iter().any(|e| &e.id == *slug))
                    .collect();
                if !others.is_empty() {
                    println!("\nMore topics:");
                    for slug in others {
                        println!("  {}", slug);
                    }
                }
            }
        }

        Ok(())
    }
}
