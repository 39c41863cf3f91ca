//! Terminal rendering of a transcript

use crate::session::{Message, Role};
use colored::Colorize;

/// Shown instead of an empty transcript
pub const EMPTY_TRANSCRIPT_TEXT: &str = "No messages yet - start the conversation.";

/// Render one message as a single line
pub fn render_message(message: &Message) -> String {
    let label = match message.role {
        Role::User => "You:".cyan().bold(),
        Role::Assistant => "DiveBuddy:".green().bold(),
        Role::System => "System:".yellow().bold(),
    };
    let stamp = format!("[{}]", message.timestamp()).dimmed();
    let text = if message.pending {
        message.text.as_str().dimmed().italic().to_string()
    } else {
        message.text.clone()
    };
    format!("{} {} {}", stamp, label, text)
}

/// Render the whole transcript, one message per line
pub fn render_transcript(messages: &[Message]) -> String {
    if messages.is_empty() {
        return EMPTY_TRANSCRIPT_TEXT.dimmed().to_string();
    }
    messages
        .iter()
        .map(render_message)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_transcript_shows_prompt() {
        assert!(render_transcript(&[]).contains(EMPTY_TRANSCRIPT_TEXT));
    }

    #[test]
    fn test_roles_are_distinguished() {
        let user = render_message(&Message::user("hello"));
        let assistant = render_message(&Message::assistant("Echo: hello"));
        assert!(user.contains("You:"));
        assert!(!user.contains("DiveBuddy:"));
        assert!(assistant.contains("DiveBuddy:"));
        assert!(assistant.contains("Echo: hello"));
    }

    #[test]
    fn test_transcript_one_line_per_message() {
        let messages = vec![Message::user("a"), Message::pending("Thinking...")];
        let rendered = render_transcript(&messages);
        assert_eq!(rendered.lines().count(), 2);
        assert!(rendered.contains("Thinking..."));
    }
}
