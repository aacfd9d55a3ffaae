//! The two-stage relay pipeline and its message schemas.
//!
//! This module holds the core of relay-bot:
//! - Decoding inbound envelopes from the event source
//! - Parsing chat messages and deriving outbound tasks
//! - The ingress and egress handlers, one invocation each

pub mod egress;
pub mod envelope;
pub mod ingress;
pub mod message;
