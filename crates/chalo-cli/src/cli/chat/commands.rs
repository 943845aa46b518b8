//! Slash command parsing and help output for the chat loop.
//!
//! Commands start with `/` and provide in-chat controls alongside normal
//! messages.

use console::style;

/// Available slash commands in the chat loop.
#[derive(Debug, PartialEq)]
pub enum ChatCommand {
    /// Show available commands.
    Help,
    /// Clear the terminal screen.
    Clear,
    /// Show the conversation so far.
    History,
    /// List the topics the assistant knows about.
    Topics,
    /// End the chat session.
    Exit,
    /// Unknown command.
    Unknown(String),
}

/// Parse user input as a slash command.
///
/// Returns `None` when the input is a normal message.
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
        "/history" => Some(ChatCommand::History),
        "/topics" => Some(ChatCommand::Topics),
        "/exit" | "/quit" | "/q" => Some(ChatCommand::Exit),
        other => Some(ChatCommand::Unknown(other.to_string())),
    }
}

/// Print the help text listing all available commands.
pub fn print_help() {
    println!();
    println!("  {}", style("Available commands:").bold());
    println!();
    println!("  {}     {}", style("/help").cyan(), "Show this help message");
    println!("  {}    {}", style("/clear").cyan(), "Clear the screen");
    println!("  {}  {}", style("/history").cyan(), "Show the conversation so far");
    println!("  {}   {}", style("/topics").cyan(), "List topics the assistant knows about");
    println!("  {}     {}", style("/exit").cyan(), "End the chat session");
    println!();
    println!("  {}", style("Ctrl+D also ends the session").dim());
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_help() {
        assert_eq!(parse("/help"), Some(ChatCommand::Help));
        assert_eq!(parse("/h"), Some(ChatCommand::Help));
        assert_eq!(parse("/?"), Some(ChatCommand::Help));
    }

    #[test]
    fn test_parse_exit() {
        assert_eq!(parse("/exit"), Some(ChatCommand::Exit));
        assert_eq!(parse("/quit"), Some(ChatCommand::Exit));
        assert_eq!(parse("/q"), Some(ChatCommand::Exit));
    }

    #[test]
    fn test_parse_clear_and_history() {
        assert_eq!(parse("/clear"), Some(ChatCommand::Clear));
        assert_eq!(parse("/cls"), Some(ChatCommand::Clear));
        assert_eq!(parse("/history"), Some(ChatCommand::History));
        assert_eq!(parse("/topics"), Some(ChatCommand::Topics));
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(parse("/HELP"), Some(ChatCommand::Help));
    }

    #[test]
    fn test_parse_ignores_trailing_words() {
        assert_eq!(parse("/exit now please"), Some(ChatCommand::Exit));
    }

    #[test]
    fn test_parse_not_command() {
        assert_eq!(parse("hello world"), None);
        assert_eq!(parse("what about /help mid-message"), None);
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            parse("/teleport"),
            Some(ChatCommand::Unknown("/teleport".to_string()))
        );
    }
}
