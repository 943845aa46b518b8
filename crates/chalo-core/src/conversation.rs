//! Append-only conversation store.
//!
//! Holds the ordered turn log for one chat session. The log lives in
//! memory only and is discarded when the session ends; it grows by append
//! and is never reordered or truncated.

use chalo_types::chat::Turn;

/// Ordered log of the turns exchanged during a session.
///
/// Insertion order is chronological order. There is exactly one writer
/// (the engine), so the store needs no interior mutability or locking.
#[derive(Debug, Default)]
pub struct Conversation {
    turns: Vec<Turn>,
}

impl Conversation {
    /// Create an empty conversation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a conversation seeded with a single welcome turn from the bot.
    pub fn with_welcome(text: impl Into<String>) -> Self {
        let mut conversation = Self::new();
        conversation.append(Turn::bot(text));
        conversation
    }

    /// Append a turn to the end of the log and return a reference to it.
    ///
    /// Never fails; duplicates are allowed and there is no size limit.
    pub fn append(&mut self, turn: Turn) -> &Turn {
        self.turns.push(turn);
        &self.turns[self.turns.len() - 1]
    }

    /// All turns in chronological order.
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// The most recently appended turn, if any.
    pub fn last(&self) -> Option<&Turn> {
        self.turns.last()
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chalo_types::chat::Sender;

    #[test]
    fn test_new_is_empty() {
        let conversation = Conversation::new();
        assert!(conversation.is_empty());
        assert!(conversation.last().is_none());
    }

    #[test]
    fn test_with_welcome_seeds_bot_turn() {
        let conversation = Conversation::with_welcome("👋 Hello!");
        assert_eq!(conversation.len(), 1);
        let turn = &conversation.turns()[0];
        assert_eq!(turn.sender, Sender::Bot);
        assert_eq!(turn.text, "👋 Hello!");
    }

    #[test]
    fn test_append_preserves_insertion_order() {
        let mut conversation = Conversation::new();
        conversation.append(Turn::user("first"));
        conversation.append(Turn::bot("second"));
        conversation.append(Turn::user("third"));

        let texts: Vec<&str> = conversation
            .turns()
            .iter()
            .map(|t| t.text.as_str())
            .collect();
        assert_eq!(texts, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_append_allows_duplicates() {
        let mut conversation = Conversation::new();
        conversation.append(Turn::user("hello"));
        conversation.append(Turn::user("hello"));
        assert_eq!(conversation.len(), 2);
    }

    #[test]
    fn test_append_returns_appended_turn() {
        let mut conversation = Conversation::new();
        let turn = conversation.append(Turn::bot("done"));
        let turn_id = turn.id;
        assert_eq!(turn.text, "done");
        assert_eq!(conversation.last().map(|t| t.id), Some(turn_id));
    }

    #[test]
    fn test_length_only_increases() {
        let mut conversation = Conversation::with_welcome("hi");
        let mut previous = conversation.len();
        for i in 0..10 {
            conversation.append(Turn::user(format!("message {i}")));
            assert!(conversation.len() > previous);
            previous = conversation.len();
        }
    }
}
