//! Special commands for the interactive chat session
//!
//! Commands are prefixed with `/` and are case-insensitive. Anything else is
//! sent to the responder as a chat message.

/// Commands handled locally instead of being sent to the service
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpecialCommand {
    /// Print the whole transcript
    Transcript,
    /// Show available commands
    Help,
    /// Leave the session
    Exit,
    /// Not a special command
    None,
}

/// Parse a line of user input
///
/// # Examples
///
/// ```
/// use divebuddy::commands::special_commands::{parse_special_command, SpecialCommand};
///
/// assert_eq!(parse_special_command("/EXIT"), SpecialCommand::Exit);
/// assert_eq!(parse_special_command("best reef in Bali?"), SpecialCommand::None);
/// ```
pub fn parse_special_command(input: &str) -> SpecialCommand {
    match input.trim().to_lowercase().as_str() {
        "/transcript" | "/history" => SpecialCommand::Transcript,
        "/help" | "/?" => SpecialCommand::Help,
        "/exit" | "/quit" | "exit" | "quit" => SpecialCommand::Exit,
        _ => SpecialCommand::None,
    }
}

/// Print help for the chat session
pub fn print_help() {
    println!(
        r#"
Special commands:
  /transcript   Show the conversation so far (alias: /history)
  /help         Show this help
  /exit         Leave the chat (alias: /quit, exit, quit)

Anything else is sent to DiveBuddy.
"#
    );
}
