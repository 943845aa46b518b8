//! CLI command definitions and dispatch for the `chalo` binary.
//!
//! Uses clap derive macros for argument parsing.

pub mod ask;
pub mod chat;
pub mod topics;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use std::path::PathBuf;

/// Travel-assistant chat in your terminal.
#[derive(Parser)]
#[command(name = "chalo", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file overriding the built-in assistant copy and knowledge base.
    #[arg(long, global = true, env = "CHALO_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start an interactive chat session.
    Chat,

    /// Resolve a single message and print the reply.
    Ask {
        /// The message to send.
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// List the reply topics and their trigger keywords.
    Topics,

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}
