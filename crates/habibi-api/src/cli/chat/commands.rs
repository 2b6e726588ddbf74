//! Slash command parsing for the chat loop.

use console::style;

/// Available slash commands in the chat loop.
#[derive(Debug, PartialEq)]
pub enum ChatCommand {
    /// Show available commands.
    Help,
    /// Clear the terminal screen.
    Clear,
    /// Exit the chat session.
    Exit,
    /// Show this session's transcript.
    History,
    /// Unknown command.
    Unknown(String),
}

/// Parse user input as a slash command.
///
/// Returns `None` if the input doesn't start with `/`.
pub fn parse(input: &str) -> Option<ChatCommand> {
    let trimmed = input.trim();
    if !trimmed.starts_with('/') {
        return None;
    }

    let cmd = trimmed
        .split_whitespace()
        .next()
        .unwrap_or(trimmed)
        .to_lowercase();

    match cmd.as_str() {
        "/help" | "/h" | "/?" => Some(ChatCommand::Help),
        "/clear" | "/cls" => Some(ChatCommand::Clear),
        "/exit" | "/quit" | "/q" => Some(ChatCommand::Exit),
        "/history" => Some(ChatCommand::History),
        other => Some(ChatCommand::Unknown(other.to_string())),
    }
}

/// Help text for the chat loop.
pub fn help_text() -> String {
    format!(
        "\n  {}\n  /help     Show this help\n  /history  Show this session's messages\n  /clear    Clear the screen\n  /exit     End the session (or Ctrl+D)\n",
        style("Commands").bold()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_commands() {
        assert_eq!(parse("/exit"), Some(ChatCommand::Exit));
        assert_eq!(parse("/Quit"), Some(ChatCommand::Exit));
        assert_eq!(parse("/help"), Some(ChatCommand::Help));
        assert_eq!(parse("/history"), Some(ChatCommand::History));
        assert_eq!(parse("  /clear  "), Some(ChatCommand::Clear));
    }

    #[test]
    fn test_plain_text_is_not_a_command() {
        assert_eq!(parse("Where is Burj Khalifa?"), None);
    }

    #[test]
    fn test_unknown_command() {
        assert_eq!(parse("/dance now"), Some(ChatCommand::Unknown("/dance".to_string())));
    }
}
