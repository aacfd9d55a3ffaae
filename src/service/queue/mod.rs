pub mod sqs;

use std::{ops::Deref, sync::Arc};

use async_trait::async_trait;

use crate::base::types::Res;

// Traits.

/// Generic "queue" trait that clients must implement.
///
/// This is the narrow seam to the durable queue service. The queue itself
/// owns durability, at-least-once delivery, and ordering; callers only
/// supply the correct ordering key and a fresh deduplication token.
#[async_trait]
pub trait GenericQueueClient: Send + Sync + 'static {
    /// Publish one message to the queue.
    ///
    /// `ordering_key` partitions the queue so ordering holds per
    /// conversation; `dedup_token` must be unique per publish attempt.
    /// Returns the queue-assigned message id.
    async fn publish(&self, queue_url: &str, ordering_key: &str, dedup_token: &str, body: &str) -> Res<String>;
}

// Structs.

/// Queue client for the application.
///
/// It is designed to be trivially cloneable, allowing it to be passed around
/// without the need for `Arc` or `Mutex`.
#[derive(Clone)]
pub struct QueueClient {
    inner: Arc<dyn GenericQueueClient>,
}

impl Deref for QueueClient {
    type Target = dyn GenericQueueClient;

    fn deref(&self) -> &Self::Target {
        &*self.inner
    }
}

impl QueueClient {
    pub fn new(inner: Arc<dyn GenericQueueClient>) -> Self {
        Self { inner }
    }
}
