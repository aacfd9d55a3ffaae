//! Runtime services and shared state for relay-bot.

use aws_config::{BehaviorVersion, Region};
use tracing::instrument;

use crate::{
    base::{config::Config, types::Res},
    service::{chat::ChatClient, queue::QueueClient, secrets::SecretsClient},
};

/// Runtime service context for one invocation.
///
/// Holds the configuration and the three service clients. It is designed to
/// be trivially cloneable, allowing it to be passed around without the need
/// for `Arc` or `Mutex`. Clients live at most as long as the hosting
/// execution context; nothing is shared across invocations in a way that
/// needs synchronization.
#[derive(Clone)]
pub struct Runtime {
    /// The configuration for the application.
    pub config: Config,
    /// The queue client instance.
    pub queue: QueueClient,
    /// The secret store client instance.
    pub secrets: SecretsClient,
    /// The chat client instance.
    pub chat: ChatClient,
}

impl Runtime {
    /// Create a new runtime instance.
    #[instrument(skip_all)]
    pub async fn new(config: Config) -> Res<Self> {
        let sdk_config = aws_config::defaults(BehaviorVersion::latest()).region(Region::new(config.aws_region.clone())).load().await;

        let queue = QueueClient::sqs(&sdk_config);
        let secrets = SecretsClient::secrets_manager(&sdk_config);
        let chat = ChatClient::telegram(&config);

        Ok(Self { config, queue, secrets, chat })
    }
}
