//! Shared domain types for chalo.
//!
//! This crate contains the core domain types used across the chalo
//! workspace: conversation turns, the travel knowledge base, and the
//! assistant configuration.
//!
//! Zero infrastructure dependencies -- only serde, uuid, chrono, thiserror.

pub mod chat;
pub mod config;
pub mod error;
pub mod knowledge;
