//! Binary entry point for the egress relay.
//!
//! Invoked once per queued task by the hosting environment: the queued
//! record batch arrives as JSON on stdin, and the process exit status is
//! the success/failure signal the host's redrive policy acts on. There is
//! no CLI surface; configuration comes from the environment.

use std::io::Read;

use tracing_subscriber::EnvFilter;

use relay_bot::prelude::*;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))).init();

    let config = Config::load(None)?;

    let mut raw = String::new();
    std::io::stdin().read_to_string(&mut raw)?;
    let invocation: Invocation = serde_json::from_str(&raw).map_err(|e| RelayError::Parse(format!("invalid invocation document: {e}")))?;

    relay_bot::run_egress(config, invocation).await?;

    Ok(())
}
