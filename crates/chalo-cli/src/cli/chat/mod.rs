//! Interactive terminal chat for chalo.
//!
//! Implements the chat surface: welcome banner, async readline input,
//! slash commands, the typing indicator, and styled rendering of the
//! conversation log. Entry point: `loop_runner::run_chat_loop`.

pub mod banner;
pub mod commands;
pub mod input;
pub mod loop_runner;
pub mod renderer;
