//! SQS implementation of the queue seam.

use std::sync::Arc;

use async_trait::async_trait;
use aws_config::SdkConfig;
use tracing::instrument;

use crate::base::types::{RelayError, Res};

use super::{GenericQueueClient, QueueClient};

// Extra methods on `QueueClient` applied by the SQS implementation.

impl QueueClient {
    /// Creates a queue client backed by SQS.
    pub fn sqs(sdk_config: &SdkConfig) -> Self {
        Self {
            inner: Arc::new(SqsQueueClient::new(sdk_config)),
        }
    }
}

impl From<SqsQueueClient> for QueueClient {
    fn from(client: SqsQueueClient) -> Self {
        Self { inner: Arc::new(client) }
    }
}

// Structs.

/// SQS client implementation.
#[derive(Clone)]
pub struct SqsQueueClient {
    client: aws_sdk_sqs::Client,
}

impl SqsQueueClient {
    pub fn new(sdk_config: &SdkConfig) -> Self {
        Self {
            client: aws_sdk_sqs::Client::new(sdk_config),
        }
    }
}

#[async_trait]
impl GenericQueueClient for SqsQueueClient {
    #[instrument(name = "SqsQueueClient::publish", skip_all)]
    async fn publish(&self, queue_url: &str, ordering_key: &str, dedup_token: &str, body: &str) -> Res<String> {
        let output = self
            .client
            .send_message()
            .queue_url(queue_url)
            .message_group_id(ordering_key)
            .message_deduplication_id(dedup_token)
            .message_body(body)
            .send()
            .await
            .map_err(|e| RelayError::Publish(e.to_string()))?;

        Ok(output.message_id().unwrap_or_default().to_string())
    }
}
