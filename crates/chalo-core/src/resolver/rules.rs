//! The ordered keyword-rule table.
//!
//! Each rule pairs a topic with its trigger substrings and a fully rendered
//! reply. Replies that quote knowledge-base lists are rendered once when the
//! table is built, since the knowledge base never changes after startup.

use serde::Serialize;

use chalo_types::knowledge::KnowledgeBase;

use std::fmt;

/// The outcome a rule (or the fallback) resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Topic {
    Greeting,
    Booking,
    Vehicles,
    Services,
    Destinations,
    Packages,
    Pricing,
    Support,
    Cancellation,
    Payment,
    About,
    Fallback,
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Topic::Greeting => "greeting",
            Topic::Booking => "booking",
            Topic::Vehicles => "vehicles",
            Topic::Services => "services",
            Topic::Destinations => "destinations",
            Topic::Packages => "packages",
            Topic::Pricing => "pricing",
            Topic::Support => "support",
            Topic::Cancellation => "cancellation",
            Topic::Payment => "payment",
            Topic::About => "about",
            Topic::Fallback => "fallback",
        };
        write!(f, "{name}")
    }
}

/// One entry of the dispatch table: trigger substrings and the reply they
/// resolve to.
#[derive(Debug, Clone)]
pub struct Rule {
    topic: Topic,
    triggers: &'static [&'static str],
    reply: String,
}

impl Rule {
    fn new(topic: Topic, triggers: &'static [&'static str], reply: String) -> Self {
        Self {
            topic,
            triggers,
            reply,
        }
    }

    pub fn topic(&self) -> Topic {
        self.topic
    }

    pub fn triggers(&self) -> &'static [&'static str] {
        self.triggers
    }

    pub fn reply(&self) -> &str {
        &self.reply
    }

    /// Whether any trigger occurs in the (already lowercased) utterance.
    pub(crate) fn matches(&self, text: &str) -> bool {
        self.triggers.iter().any(|trigger| text.contains(trigger))
    }
}

/// Join the first `count` entries of a list with ", ".
fn quote_first(items: &[String], count: usize) -> String {
    items
        .iter()
        .take(count)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Build the rule table in evaluation order.
///
/// Order is part of the contract: earlier rules shadow later ones on
/// overlapping keywords ("hi, can I book a car" resolves to the greeting).
pub(crate) fn build_rules(kb: &KnowledgeBase) -> Vec<Rule> {
    vec![
        Rule::new(
            Topic::Greeting,
            &["hello", "hi", "hey"],
            "👋 Hello! How can I assist you with your travel plans today?".to_string(),
        ),
        Rule::new(
            Topic::Booking,
            &["book", "booking"],
            "📅 You can book rides, cars, or travel packages through our booking section. \
             We offer 24x7 pickup service from airports, railway stations, and bus stands!"
                .to_string(),
        ),
        Rule::new(
            Topic::Vehicles,
            &["car", "vehicle"],
            "🚗 We offer various car options: hatchbacks, sedans, SUVs, and luxury cars. \
             Our services include airport transfers, outstation rides, city tours, and \
             self-drive options."
                .to_string(),
        ),
        Rule::new(
            Topic::Services,
            &["service", "services"],
            format!(
                "🛠️ Our services include: {} and many more! What specific service are \
                 you looking for?",
                quote_first(&kb.services, 5)
            ),
        ),
        Rule::new(
            Topic::Destinations,
            &["destination", "place", "where"],
            format!(
                "🗺️ Popular destinations: {}. We focus on Indian destinations with \
                 amazing travel experiences!",
                quote_first(&kb.destinations, 3)
            ),
        ),
        Rule::new(
            Topic::Packages,
            &["package", "tour", "trip"],
            format!(
                "📦 Popular packages: {}. All packages include guided tours and \
                 comfortable accommodations!",
                quote_first(&kb.packages, 3)
            ),
        ),
        Rule::new(
            Topic::Pricing,
            &["price", "cost", "rate"],
            "💰 Our prices start from INR 1,850 for day trips and go up to INR 32,600 \
             for multi-day packages. Prices vary based on duration, accommodation, and \
             activities included."
                .to_string(),
        ),
        Rule::new(
            Topic::Support,
            &["contact", "support", "help"],
            format!(
                "📞 For support, you can email us at {} or call us at {}. We're here \
                 to help 24/7!",
                kb.site.support_email, kb.site.support_phone
            ),
        ),
        Rule::new(
            Topic::Cancellation,
            &["cancel", "refund"],
            "❌ For cancellations and refunds, please contact our customer support \
             team. Cancellation policies vary by package type."
                .to_string(),
        ),
        Rule::new(
            Topic::Payment,
            &["payment", "pay"],
            "💳 We accept all major credit cards, debit cards, UPI, and net banking. \
             Payment can be made online or on arrival."
                .to_string(),
        ),
        Rule::new(
            Topic::About,
            &["about", "company"],
            format!(
                "🏢 {} is your trusted travel partner, making travel dreams a reality \
                 with exceptional service and unforgettable memories. Our tagline is \
                 '{}'.",
                kb.site.name, kb.site.tagline
            ),
        ),
    ]
}

/// The reply returned when no rule matches.
pub(crate) fn fallback_reply(kb: &KnowledgeBase) -> String {
    format!(
        "🤔 I'm here to help with questions about {} travel services. You can ask \
         about booking, destinations, packages, prices, or contact information. How \
         can I assist you?",
        kb.site.name
    )
}
