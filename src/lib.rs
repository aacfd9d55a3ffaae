//! Library root for `relay-bot`.
//!
//! Relay-bot forwards chat messages through a durable FIFO queue:
//! - The ingress relay turns one inbound Telegram update into one queued
//!   outbound task, ordered per conversation and deduplicated per publish
//! - The egress relay consumes one queued task, fetches the bot token from
//!   the secret store, and delivers the reply via the Telegram API
//!
//! Both relays are stateless one-shot invocations; the queue is the only
//! shared state. The architecture is built around extensible traits that
//! allow for different implementations of each external service.

#[deny(missing_docs)]
pub mod base;
pub mod prelude;
pub mod relay;
pub mod runtime;
pub mod service;

use base::{config::Config, types::Void};
use relay::envelope::Invocation;
use runtime::Runtime;
use tracing::error;

/// Public async entry for the ingress binary.
///
/// Builds the runtime and relays the invocation's event onto the queue.
/// Any failure is logged once here and re-raised to the host unmodified.
pub async fn run_ingress(config: Config, invocation: Invocation) -> Void {
    let result = run_ingress_internal(config, invocation).await;

    if let Err(err) = &result {
        error!("ingress relay failed: {err}");
    }

    result
}

async fn run_ingress_internal(config: Config, invocation: Invocation) -> Void {
    let runtime = Runtime::new(config).await?;

    relay::ingress::handle(&invocation.event, &invocation.context, &runtime.queue, &runtime.config).await
}

/// Public async entry for the egress binary.
///
/// Builds the runtime and delivers the invocation's queued task to the chat
/// API. Any failure is logged once here and re-raised to the host unmodified.
pub async fn run_egress(config: Config, invocation: Invocation) -> Void {
    let result = run_egress_internal(config, invocation).await;

    if let Err(err) = &result {
        error!("egress relay failed: {err}");
    }

    result
}

async fn run_egress_internal(config: Config, invocation: Invocation) -> Void {
    let runtime = Runtime::new(config).await?;

    relay::egress::handle(&invocation.event, &runtime.secrets, &runtime.chat, &runtime.config).await
}
