//! Business logic for chalo.
//!
//! This crate holds the conversation store, the keyword-rule response
//! resolver, and the `ChatEngine` that ties the two together for a single
//! chat session. Everything here is synchronous and free of I/O; the
//! application layer owns input, rendering, and the typing delay.

pub mod config;
pub mod conversation;
pub mod engine;
pub mod resolver;
