//! chalo CLI entry point.
//!
//! Binary name: `chalo`
//!
//! Parses CLI arguments, initializes tracing and configuration, then
//! dispatches to the chat loop or one of the one-shot commands.

mod cli;

use anyhow::Context;
use clap::Parser;
use clap_complete::generate;
use tracing_subscriber::EnvFilter;

use chalo_types::config::ChaloConfig;
use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info,chalo_core=debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    // Shell completions don't need configuration
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "chalo", &mut std::io::stdout());
        return Ok(());
    }

    let config = match &cli.config {
        Some(path) => chalo_core::config::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => ChaloConfig::default(),
    };

    match cli.command {
        Commands::Chat => {
            cli::chat::loop_runner::run_chat_loop(&config).await?;
        }

        Commands::Ask { text } => {
            cli::ask::ask(&config, &text.join(" "), cli.json)?;
        }

        Commands::Topics => {
            cli::topics::topics(&config, cli.json)?;
        }

        Commands::Completions { .. } => unreachable!("handled above"),
    }

    Ok(())
}
