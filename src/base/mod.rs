//! Shared base types for relay-bot: configuration and the error taxonomy.

pub mod config;
pub mod types;
