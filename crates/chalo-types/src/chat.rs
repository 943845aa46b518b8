//! Conversation turn types for chalo.
//!
//! A `Turn` is one message in the conversation log, tagged by its `Sender`.
//! Turns are immutable once created and owned by the conversation store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use std::fmt;
use std::str::FromStr;

/// Who authored a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

impl fmt::Display for Sender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sender::User => write!(f, "user"),
            Sender::Bot => write!(f, "bot"),
        }
    }
}

impl FromStr for Sender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "user" => Ok(Sender::User),
            "bot" => Ok(Sender::Bot),
            other => Err(format!("invalid sender: '{other}'")),
        }
    }
}

/// One message in the conversation log.
///
/// Turns are ordered by insertion within a session; `created_at` records
/// when the turn was appended. A turn never changes after construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Turn {
    pub id: Uuid,
    pub sender: Sender,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl Turn {
    fn new(sender: Sender, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::now_v7(),
            sender,
            text: text.into(),
            created_at: Utc::now(),
        }
    }

    /// Create a turn authored by the user.
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Sender::User, text)
    }

    /// Create a turn authored by the assistant.
    pub fn bot(text: impl Into<String>) -> Self {
        Self::new(Sender::Bot, text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sender_roundtrip() {
        for sender in [Sender::User, Sender::Bot] {
            let s = sender.to_string();
            let parsed: Sender = s.parse().unwrap();
            assert_eq!(sender, parsed);
        }
    }

    #[test]
    fn test_sender_parse_rejects_garbage() {
        assert!("assistant".parse::<Sender>().is_err());
        assert!("".parse::<Sender>().is_err());
    }

    #[test]
    fn test_sender_serde() {
        let json = serde_json::to_string(&Sender::Bot).unwrap();
        assert_eq!(json, "\"bot\"");
        let parsed: Sender = serde_json::from_str("\"user\"").unwrap();
        assert_eq!(parsed, Sender::User);
    }

    #[test]
    fn test_turn_constructors() {
        let user = Turn::user("where can I go?");
        assert_eq!(user.sender, Sender::User);
        assert_eq!(user.text, "where can I go?");

        let bot = Turn::bot("plenty of places!");
        assert_eq!(bot.sender, Sender::Bot);
        assert_ne!(user.id, bot.id);
    }

    #[test]
    fn test_turn_serialize() {
        let turn = Turn::bot("hello");
        let json = serde_json::to_string(&turn).unwrap();
        assert!(json.contains("\"sender\":\"bot\""));
        assert!(json.contains("\"text\":\"hello\""));
    }
}
