pub mod telegram;

use std::{ops::Deref, sync::Arc};

use async_trait::async_trait;

use crate::base::types::Res;

use super::secrets::DeliveryCredential;

// Traits.

/// Generic "chat" trait that clients must implement.
///
/// This is the narrow seam to the external chat platform's messaging API.
/// Rate limits and message formatting rules stay on the platform's side;
/// any non-success outcome is uniformly a delivery failure.
#[async_trait]
pub trait GenericChatClient: Send + Sync + 'static {
    /// Send `text` to the given conversation, authenticating with the
    /// supplied credential. Returns the captured response status on success.
    async fn send_message(&self, credential: &DeliveryCredential, conversation_id: i64, text: &str) -> Res<DeliveryResult>;
}

// Structs.

/// Chat client for the application.
///
/// It is designed to be trivially cloneable, allowing it to be passed around
/// without the need for `Arc` or `Mutex`.
#[derive(Clone)]
pub struct ChatClient {
    inner: Arc<dyn GenericChatClient>,
}

impl Deref for ChatClient {
    type Target = dyn GenericChatClient;

    fn deref(&self) -> &Self::Target {
        &*self.inner
    }
}

impl ChatClient {
    pub fn new(inner: Arc<dyn GenericChatClient>) -> Self {
        Self { inner }
    }
}

/// Outcome of a successful external API call.
///
/// Observed only through the invocation's success signal; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeliveryResult {
    /// HTTP status code returned by the chat API.
    pub status: u16,
}
