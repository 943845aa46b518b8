//! Keyword-rule response resolver.
//!
//! Maps a user utterance to exactly one canned reply by scanning an ordered
//! rule table: the first rule with a substring hit wins, and a fallback
//! covers everything else. The resolver is pure and total -- any input,
//! including nonsense, produces a reply.

pub mod rules;

use serde::Serialize;
use tracing::debug;

use chalo_types::knowledge::KnowledgeBase;

pub use rules::{Rule, Topic};

/// A resolved reply: which topic matched and the text to show.
#[derive(Debug, Clone, Serialize)]
pub struct Reply {
    pub topic: Topic,
    pub text: String,
}

/// First-match-wins dispatcher over the keyword rule table.
///
/// Construction renders every reply up front from the (immutable) knowledge
/// base; `resolve` itself is stateless and safe to call from any thread.
#[derive(Debug, Clone)]
pub struct Resolver {
    rules: Vec<Rule>,
    fallback: String,
}

impl Resolver {
    /// Build the resolver for a knowledge base.
    pub fn new(kb: &KnowledgeBase) -> Self {
        Self {
            rules: rules::build_rules(kb),
            fallback: rules::fallback_reply(kb),
        }
    }

    /// Resolve an utterance to a reply.
    ///
    /// Matching is case-insensitive. Rules are evaluated in table order and
    /// the first trigger hit decides the topic; an utterance with no hits
    /// resolves to the fallback.
    pub fn resolve(&self, utterance: &str) -> Reply {
        let text = utterance.to_lowercase();
        for rule in &self.rules {
            if rule.matches(&text) {
                debug!(topic = %rule.topic(), "rule matched");
                return Reply {
                    topic: rule.topic(),
                    text: rule.reply().to_string(),
                };
            }
        }

        debug!("no rule matched, using fallback");
        Reply {
            topic: Topic::Fallback,
            text: self.fallback.clone(),
        }
    }

    /// The rule table in evaluation order (for listings and help output).
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// The fallback reply text.
    pub fn fallback(&self) -> &str {
        &self.fallback
    }
}
