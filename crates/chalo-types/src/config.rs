//! Configuration types for chalo.
//!
//! `ChaloConfig` represents the optional `chalo.toml` that overrides the
//! assistant's copy and knowledge base. All fields have built-in defaults,
//! so an empty (or absent) file yields a fully working assistant.

use serde::{Deserialize, Serialize};

use crate::knowledge::KnowledgeBase;

/// Presentation settings for the assistant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssistantConfig {
    /// Display name used in the banner and reply labels.
    #[serde(default = "default_assistant_name")]
    pub name: String,

    /// Welcome turn seeded into every new conversation.
    #[serde(default = "default_welcome")]
    pub welcome: String,

    /// Simulated typing delay before a reply is delivered, in milliseconds.
    #[serde(default = "default_typing_delay_ms")]
    pub typing_delay_ms: u64,

    /// Maximum turns shown by the in-chat `/history` command.
    #[serde(default = "default_history_preview")]
    pub history_preview: usize,
}

fn default_assistant_name() -> String {
    "CarSe-Chalo Assistant".to_string()
}

fn default_welcome() -> String {
    "👋 Hello! I'm your CarSe-Chalo Assistant. How can I help you with your travel plans today?"
        .to_string()
}

fn default_typing_delay_ms() -> u64 {
    800
}

fn default_history_preview() -> usize {
    20
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            name: default_assistant_name(),
            welcome: default_welcome(),
            typing_delay_ms: default_typing_delay_ms(),
            history_preview: default_history_preview(),
        }
    }
}

/// Top-level configuration document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChaloConfig {
    #[serde(default)]
    pub assistant: AssistantConfig,

    #[serde(default)]
    pub knowledge: KnowledgeBase,
}
