//! Main chat loop orchestration.
//!
//! Runs the complete session lifecycle: engine construction, welcome
//! banner and seeded greeting, the input loop with slash commands, the
//! typing indicator, and the end-of-session summary.

use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use chalo_core::engine::ChatEngine;
use chalo_types::config::ChaloConfig;

use std::time::Duration;

use super::banner::print_welcome_banner;
use super::commands::{self, ChatCommand};
use super::input::{ChatInput, InputEvent};
use super::renderer::ChatRenderer;

/// Run the interactive chat session.
pub async fn run_chat_loop(config: &ChaloConfig) -> anyhow::Result<()> {
    let mut engine = ChatEngine::new(&config.assistant, &config.knowledge);
    let renderer = ChatRenderer::new(&config.assistant.name);

    print_welcome_banner(
        &config.knowledge.site,
        &config.assistant,
        &engine.session_id().to_string(),
    );

    // The seeded welcome turn opens the conversation.
    if let Some(turn) = engine.conversation().turns().first() {
        renderer.print_bot_turn(&turn.text);
    }

    let prompt = format!("  {} ", style("You >").green().bold());
    let (mut chat_input, _writer) = ChatInput::new(prompt)
        .map_err(|e| anyhow::anyhow!("failed to initialize input: {e}"))?;

    loop {
        match chat_input.read_line().await {
            InputEvent::Eof => break,
            InputEvent::Interrupted => {
                println!(
                    "\n  {}",
                    style("Press Ctrl+D to exit, or keep chatting.").dim()
                );
            }
            InputEvent::Message(text) => {
                if let Some(cmd) = commands::parse(&text) {
                    match cmd {
                        ChatCommand::Help => commands::print_help(),
                        ChatCommand::Clear => chat_input.clear(),
                        ChatCommand::History => renderer
                            .print_history(engine.conversation(), config.assistant.history_preview),
                        ChatCommand::Topics => print_topics(&engine),
                        ChatCommand::Exit => break,
                        ChatCommand::Unknown(name) => {
                            println!(
                                "\n  {} Unknown command: {}. Type /help for available commands.\n",
                                style("?").yellow().bold(),
                                style(name).dim()
                            );
                        }
                    }
                    continue;
                }

                // Blank input: no turn appended, no reply scheduled.
                let Some(pending) = engine.submit(&text) else {
                    continue;
                };

                let spinner = typing_spinner(&config.assistant.name);
                tokio::time::sleep(pending.delay()).await;
                spinner.finish_and_clear();

                let turn = engine.deliver(pending);
                renderer.print_bot_turn(&turn.text);
            }
        }
    }

    engine.end();
    println!(
        "\n  {}",
        style(format!(
            "Session ended. {} exchange(s).",
            engine.exchanges()
        ))
        .dim()
    );
    Ok(())
}

/// Spinner shown while the reply is pending.
fn typing_spinner(name: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    spinner.set_message(format!("{name} is typing..."));
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}

/// In-chat `/topics` listing: topic names with their trigger keywords.
fn print_topics(engine: &ChatEngine) {
    println!();
    println!("  {}", style("You can ask about:").bold());
    for rule in engine.resolver().rules() {
        println!(
            "  {} {} {}",
            style("•").dim(),
            style(rule.topic()).cyan(),
            style(format!("({})", rule.triggers().join(", "))).dim()
        );
    }
    println!();
}
