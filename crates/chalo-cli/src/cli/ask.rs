//! One-shot resolve command for scripting and quick checks.
//!
//! # Examples
//!
//! ```bash
//! chalo ask what are your services
//! chalo ask --json "where should I go"
//! ```

use anyhow::Result;
use console::style;

use chalo_core::resolver::Resolver;
use chalo_types::config::ChaloConfig;

/// Resolve `text` once and print the reply.
pub fn ask(config: &ChaloConfig, text: &str, json: bool) -> Result<()> {
    let text = text.trim();
    if text.is_empty() {
        anyhow::bail!("nothing to ask: the message is empty");
    }

    let resolver = Resolver::new(&config.knowledge);
    let reply = resolver.resolve(text);

    if json {
        println!("{}", serde_json::to_string_pretty(&reply)?);
        return Ok(());
    }

    println!();
    println!(
        "  {} {}",
        style(&config.assistant.name).cyan().bold(),
        reply.text
    );
    println!("  {}", style(format!("topic: {}", reply.topic)).dim());
    println!();
    Ok(())
}
