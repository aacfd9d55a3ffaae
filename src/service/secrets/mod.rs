pub mod aws;

use std::{fmt, ops::Deref, sync::Arc};

use async_trait::async_trait;
use secrecy::{ExposeSecret, Secret};

use crate::base::types::Res;

// Traits.

/// Generic "secret store" trait that clients must implement.
///
/// The store owns encryption and access control; callers only read one
/// credential by identifier, per invocation.
#[async_trait]
pub trait GenericSecretsClient: Send + Sync + 'static {
    /// Fetch the delivery credential stored under `secret_id`.
    ///
    /// A missing secret, a secret with no string value, or a value without
    /// a usable token are all error conditions.
    async fn fetch(&self, secret_id: &str) -> Res<DeliveryCredential>;
}

// Structs.

/// Secret store client for the application.
///
/// It is designed to be trivially cloneable, allowing it to be passed around
/// without the need for `Arc` or `Mutex`.
#[derive(Clone)]
pub struct SecretsClient {
    inner: Arc<dyn GenericSecretsClient>,
}

impl Deref for SecretsClient {
    type Target = dyn GenericSecretsClient;

    fn deref(&self) -> &Self::Target {
        &*self.inner
    }
}

impl SecretsClient {
    pub fn new(inner: Arc<dyn GenericSecretsClient>) -> Self {
        Self { inner }
    }
}

/// Short-lived credential for the external chat API.
///
/// Lives only for the invocation that fetched it; never serialized and
/// never logged.
#[derive(Clone)]
pub struct DeliveryCredential {
    token: Secret<String>,
}

impl DeliveryCredential {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: Secret::new(token.into()),
        }
    }

    /// Exposes the raw token for constructing the delivery request.
    pub fn expose_token(&self) -> &str {
        self.token.expose_secret()
    }
}

impl fmt::Debug for DeliveryCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeliveryCredential").field("token", &"[REDACTED]").finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_never_shows_the_token() {
        let credential = DeliveryCredential::new("123:abc");

        let rendered = format!("{credential:?}");

        assert!(rendered.contains("[REDACTED]"));
        assert!(!rendered.contains("123:abc"));
    }
}
