//! Telegram Bot API implementation of the chat seam.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Url;
use tracing::instrument;

use crate::base::{
    config::Config,
    types::{RelayError, Res},
};

use super::{ChatClient, DeliveryResult, GenericChatClient};

use crate::service::secrets::DeliveryCredential;

// Extra methods on `ChatClient` applied by the Telegram implementation.

impl ChatClient {
    /// Creates a chat client backed by the Telegram Bot API.
    pub fn telegram(config: &Config) -> Self {
        Self {
            inner: Arc::new(TelegramChatClient::new(config)),
        }
    }
}

impl From<TelegramChatClient> for ChatClient {
    fn from(client: TelegramChatClient) -> Self {
        Self { inner: Arc::new(client) }
    }
}

// Structs.

/// Telegram client implementation.
#[derive(Clone)]
pub struct TelegramChatClient {
    api_base: String,
    client: reqwest::Client,
}

impl TelegramChatClient {
    pub fn new(config: &Config) -> Self {
        Self {
            api_base: config.telegram_api_base.clone(),
            client: reqwest::Client::new(),
        }
    }
}

/// Builds the `sendMessage` URL with the reply text URL-encoded.
pub fn send_message_url(api_base: &str, credential: &DeliveryCredential, conversation_id: i64, text: &str) -> Res<Url> {
    let endpoint = format!("{}/bot{}/sendMessage", api_base, credential.expose_token());
    let chat_id = conversation_id.to_string();

    Url::parse_with_params(&endpoint, &[("chat_id", chat_id.as_str()), ("parse_mode", "Markdown"), ("text", text)])
        .map_err(|e| RelayError::Delivery(format!("cannot build send URL: {e}")))
}

#[async_trait]
impl GenericChatClient for TelegramChatClient {
    #[instrument(name = "TelegramChatClient::send_message", skip_all)]
    async fn send_message(&self, credential: &DeliveryCredential, conversation_id: i64, text: &str) -> Res<DeliveryResult> {
        let url = send_message_url(&self.api_base, credential, conversation_id, text)?;

        let response = self.client.get(url).send().await.map_err(|e| RelayError::Delivery(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(RelayError::Delivery(format!("chat API returned status {status}")));
        }

        Ok(DeliveryResult { status: status.as_u16() })
    }
}
