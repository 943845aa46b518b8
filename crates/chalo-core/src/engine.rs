//! Chat engine for a single session.
//!
//! Wires the conversation store to the resolver and tracks session
//! lifecycle. A submission is two-phase: `submit` appends the user turn and
//! schedules the reply, the caller shows its typing indicator for
//! `PendingReply::delay`, then `deliver` appends the bot turn. A scheduled
//! reply always completes; there is no cancellation.

use chrono::{DateTime, Utc};
use tracing::{debug, info};
use uuid::Uuid;

use chalo_types::chat::Turn;
use chalo_types::config::AssistantConfig;
use chalo_types::knowledge::KnowledgeBase;

use std::time::Duration;

use crate::conversation::Conversation;
use crate::resolver::{Reply, Resolver, Topic};

/// A reply that has been resolved but not yet delivered.
///
/// Only obtainable from [`ChatEngine::submit`], which guarantees the user
/// turn that caused it is already in the log -- so every delivered bot turn
/// is preceded by exactly one user turn.
#[derive(Debug)]
pub struct PendingReply {
    reply: Reply,
    delay: Duration,
}

impl PendingReply {
    pub fn topic(&self) -> Topic {
        self.reply.topic
    }

    pub fn text(&self) -> &str {
        &self.reply.text
    }

    /// How long the host should show its typing indicator before delivery.
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

/// Orchestrates one chat session: the turn log, the resolver, and the
/// session lifecycle.
pub struct ChatEngine {
    session_id: Uuid,
    started_at: DateTime<Utc>,
    ended_at: Option<DateTime<Utc>>,
    typing_delay: Duration,
    resolver: Resolver,
    conversation: Conversation,
    exchanges: u32,
}

impl ChatEngine {
    /// Start a session: build the resolver and seed the welcome turn.
    pub fn new(assistant: &AssistantConfig, knowledge: &KnowledgeBase) -> Self {
        let session_id = Uuid::now_v7();
        info!(session_id = %session_id, "chat session started");
        Self {
            session_id,
            started_at: Utc::now(),
            ended_at: None,
            typing_delay: Duration::from_millis(assistant.typing_delay_ms),
            resolver: Resolver::new(knowledge),
            conversation: Conversation::with_welcome(&assistant.welcome),
            exchanges: 0,
        }
    }

    /// Submit a user utterance.
    ///
    /// Blank input (empty or whitespace-only) is rejected before it reaches
    /// the resolver: no turn is appended and `None` is returned. Otherwise
    /// the trimmed utterance is appended as a user turn and the resolved
    /// reply comes back as a [`PendingReply`] for the caller to deliver
    /// after the typing delay.
    pub fn submit(&mut self, raw: &str) -> Option<PendingReply> {
        let text = raw.trim();
        if text.is_empty() {
            debug!("ignoring blank submission");
            return None;
        }

        self.conversation.append(Turn::user(text));
        let reply = self.resolver.resolve(text);
        Some(PendingReply {
            reply,
            delay: self.typing_delay,
        })
    }

    /// Append the pending reply as a bot turn and return it.
    pub fn deliver(&mut self, pending: PendingReply) -> &Turn {
        self.exchanges += 1;
        self.conversation.append(Turn::bot(pending.reply.text))
    }

    /// Mark the session as ended.
    pub fn end(&mut self) {
        if self.ended_at.is_none() {
            self.ended_at = Some(Utc::now());
            info!(
                session_id = %self.session_id,
                exchanges = self.exchanges,
                "chat session ended"
            );
        }
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn ended_at(&self) -> Option<DateTime<Utc>> {
        self.ended_at
    }

    /// Completed user/bot exchanges so far.
    pub fn exchanges(&self) -> u32 {
        self.exchanges
    }

    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    pub fn resolver(&self) -> &Resolver {
        &self.resolver
    }

    /// The configured typing delay.
    pub fn typing_delay(&self) -> Duration {
        self.typing_delay
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chalo_types::chat::Sender;

    fn engine() -> ChatEngine {
        ChatEngine::new(&AssistantConfig::default(), &KnowledgeBase::default())
    }

    #[test]
    fn test_new_session_seeds_welcome() {
        let engine = engine();
        assert_eq!(engine.conversation().len(), 1);
        let welcome = &engine.conversation().turns()[0];
        assert_eq!(welcome.sender, Sender::Bot);
        assert_eq!(welcome.text, AssistantConfig::default().welcome);
        assert_eq!(engine.exchanges(), 0);
        assert!(engine.started_at() <= Utc::now());
        assert!(engine.ended_at().is_none());
    }

    #[test]
    fn test_blank_submission_is_a_no_op() {
        let mut engine = engine();
        assert!(engine.submit("").is_none());
        assert!(engine.submit("   ").is_none());
        assert!(engine.submit("\t\n").is_none());
        // Conversation length is unchanged; only the welcome seed remains.
        assert_eq!(engine.conversation().len(), 1);
        assert_eq!(engine.exchanges(), 0);
    }

    #[test]
    fn test_submit_appends_trimmed_user_turn() {
        let mut engine = engine();
        let pending = engine.submit("  hello there  ").unwrap();
        assert_eq!(pending.topic(), Topic::Greeting);

        let last = engine.conversation().last().unwrap();
        assert_eq!(last.sender, Sender::User);
        assert_eq!(last.text, "hello there");
    }

    #[test]
    fn test_deliver_appends_bot_turn() {
        let mut engine = engine();
        let pending = engine.submit("what are your services").unwrap();
        let expected_text = pending.text().to_string();

        let turn = engine.deliver(pending);
        assert_eq!(turn.sender, Sender::Bot);
        assert_eq!(turn.text, expected_text);
        assert_eq!(engine.exchanges(), 1);
        assert_eq!(engine.conversation().len(), 3);
    }

    #[test]
    fn test_exchanges_grow_log_by_two() {
        let mut engine = engine();
        let seed = engine.conversation().len();
        let n = 4;
        for i in 0..n {
            let pending = engine.submit(format!("message {i}").as_str()).unwrap();
            engine.deliver(pending);
        }
        assert_eq!(engine.conversation().len(), seed + 2 * n);
        assert_eq!(engine.exchanges(), n as u32);

        // Turns after the seed alternate user, bot, user, bot, ...
        for (i, turn) in engine.conversation().turns()[seed..].iter().enumerate() {
            let expected = if i % 2 == 0 { Sender::User } else { Sender::Bot };
            assert_eq!(turn.sender, expected);
        }
    }

    #[test]
    fn test_typing_delay_from_config() {
        let assistant = AssistantConfig {
            typing_delay_ms: 50,
            ..AssistantConfig::default()
        };
        let mut engine = ChatEngine::new(&assistant, &KnowledgeBase::default());
        assert_eq!(engine.typing_delay(), Duration::from_millis(50));
        let pending = engine.submit("hello").unwrap();
        assert_eq!(pending.delay(), Duration::from_millis(50));
    }

    #[test]
    fn test_end_is_idempotent() {
        let mut engine = engine();
        engine.end();
        let first = engine.ended_at();
        assert!(first.is_some());
        engine.end();
        assert_eq!(engine.ended_at(), first);
    }

    #[test]
    fn test_fallback_exchange() {
        let mut engine = engine();
        let pending = engine.submit("asdkjasd").unwrap();
        assert_eq!(pending.topic(), Topic::Fallback);
        let text = pending.text().to_string();
        let turn = engine.deliver(pending);
        assert_eq!(turn.text, text);
    }
}
