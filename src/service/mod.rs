//! Service integrations for external APIs and clients.
//!
//! This module contains the narrow seams to the black-box collaborators:
//! - Queue services (e.g. SQS)
//! - Secret stores (e.g. Secrets Manager)
//! - Chat platforms (e.g. Telegram)
//!
//! Each service module defines both a generic trait and a concrete
//! implementation, allowing for extensibility and easy testing.

pub mod chat;
pub mod queue;
pub mod secrets;
