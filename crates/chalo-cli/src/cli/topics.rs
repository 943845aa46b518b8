//! Topic listing command.
//!
//! Renders the rule table (topic, triggers, reply preview) so users can see
//! what the assistant responds to and in which priority order.

use anyhow::Result;
use comfy_table::{presets, Cell, Color, ContentArrangement, Table};

use chalo_core::resolver::Resolver;
use chalo_types::config::ChaloConfig;

/// Truncation width for reply previews in the table.
const PREVIEW_WIDTH: usize = 60;

/// Print the rule table.
pub fn topics(config: &ChaloConfig, json: bool) -> Result<()> {
    let resolver = Resolver::new(&config.knowledge);

    if json {
        let rules: Vec<_> = resolver
            .rules()
            .iter()
            .map(|rule| {
                serde_json::json!({
                    "topic": rule.topic(),
                    "triggers": rule.triggers(),
                    "reply": rule.reply(),
                })
            })
            .collect();
        let listing = serde_json::json!({
            "rules": rules,
            "fallback": resolver.fallback(),
        });
        println!("{}", serde_json::to_string_pretty(&listing)?);
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("#").fg(Color::White),
        Cell::new("Topic").fg(Color::White),
        Cell::new("Triggers").fg(Color::White),
        Cell::new("Reply").fg(Color::White),
    ]);

    for (index, rule) in resolver.rules().iter().enumerate() {
        table.add_row(vec![
            Cell::new(index + 1),
            Cell::new(rule.topic()).fg(Color::Cyan),
            Cell::new(rule.triggers().join(", ")),
            Cell::new(preview(rule.reply())),
        ]);
    }
    table.add_row(vec![
        Cell::new("-"),
        Cell::new("fallback").fg(Color::DarkGrey),
        Cell::new("(anything else)").fg(Color::DarkGrey),
        Cell::new(preview(resolver.fallback())),
    ]);

    println!("{table}");
    Ok(())
}

fn preview(text: &str) -> String {
    if text.chars().count() > PREVIEW_WIDTH {
        let cut: String = text.chars().take(PREVIEW_WIDTH - 3).collect();
        format!("{cut}...")
    } else {
        text.to_string()
    }
}
