//! Styled terminal rendering for the chat loop.
//!
//! Replies are plain text with a styled assistant label; `/history` shows
//! one truncated line per turn, oldest first.

use console::style;

use chalo_core::conversation::Conversation;
use chalo_types::chat::Sender;

/// Width at which /history previews are cut.
const HISTORY_PREVIEW_WIDTH: usize = 100;

/// Renders bot replies and history listings.
pub struct ChatRenderer {
    bot_label: String,
}

impl ChatRenderer {
    pub fn new(bot_name: &str) -> Self {
        Self {
            bot_label: bot_name.to_string(),
        }
    }

    /// Print a bot turn under the assistant's label.
    pub fn print_bot_turn(&self, text: &str) {
        println!();
        println!("  {} {}", style(&self.bot_label).cyan().bold(), text);
        println!();
    }

    /// Print the `/history` listing, capped at `limit` most recent turns.
    pub fn print_history(&self, conversation: &Conversation, limit: usize) {
        let turns = conversation.turns();
        let skip = turns.len().saturating_sub(limit);

        println!();
        if skip > 0 {
            println!(
                "  {}",
                style(format!("(showing last {limit} of {} turns)", turns.len())).dim()
            );
        }
        for turn in &turns[skip..] {
            let label = match turn.sender {
                Sender::User => style("You").green().bold(),
                Sender::Bot => style(self.bot_label.as_str()).cyan().bold(),
            };
            println!("  {} {}", label, truncate(&turn.text, HISTORY_PREVIEW_WIDTH));
        }
        println!();
    }
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() > width {
        let cut: String = text.chars().take(width.saturating_sub(3)).collect();
        format!("{cut}...")
    } else {
        text.to_string()
    }
}
