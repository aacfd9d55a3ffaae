//! Secrets Manager implementation of the secret store seam.

use std::sync::Arc;

use async_trait::async_trait;
use aws_config::SdkConfig;
use serde::Deserialize;
use tracing::instrument;

use crate::base::types::{RelayError, Res};

use super::{DeliveryCredential, GenericSecretsClient, SecretsClient};

// Extra methods on `SecretsClient` applied by the Secrets Manager implementation.

impl SecretsClient {
    /// Creates a secrets client backed by AWS Secrets Manager.
    pub fn secrets_manager(sdk_config: &SdkConfig) -> Self {
        Self {
            inner: Arc::new(SecretsManagerClient::new(sdk_config)),
        }
    }
}

impl From<SecretsManagerClient> for SecretsClient {
    fn from(client: SecretsManagerClient) -> Self {
        Self { inner: Arc::new(client) }
    }
}

// Structs.

/// Stored secret payload: a JSON object with a `token` field.
#[derive(Deserialize)]
struct StoredToken {
    token: String,
}

/// Secrets Manager client implementation.
#[derive(Clone)]
pub struct SecretsManagerClient {
    client: aws_sdk_secretsmanager::Client,
}

impl SecretsManagerClient {
    pub fn new(sdk_config: &SdkConfig) -> Self {
        Self {
            client: aws_sdk_secretsmanager::Client::new(sdk_config),
        }
    }
}

#[async_trait]
impl GenericSecretsClient for SecretsManagerClient {
    #[instrument(name = "SecretsManagerClient::fetch", skip_all)]
    async fn fetch(&self, secret_id: &str) -> Res<DeliveryCredential> {
        let output = self
            .client
            .get_secret_value()
            .secret_id(secret_id)
            .send()
            .await
            .map_err(|e| RelayError::Secret(e.to_string()))?;

        let raw = output.secret_string().ok_or_else(|| RelayError::Secret(format!("secret `{secret_id}` has no string value")))?;

        let stored: StoredToken = serde_json::from_str(raw).map_err(|e| RelayError::Secret(format!("secret `{secret_id}` is not a token object: {e}")))?;

        if stored.token.is_empty() {
            return Err(RelayError::Secret(format!("secret `{secret_id}` contains an empty token")));
        }

        Ok(DeliveryCredential::new(stored.token))
    }
}
