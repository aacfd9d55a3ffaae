//! Ingress relay: turns one inbound chat event into one outbound task on
//! the queue.

use tracing::{info, instrument};
use uuid::Uuid;

use crate::{
    base::{config::Config, types::Void},
    relay::{
        envelope::{EventBatch, InvocationContext},
        message::{ChatMessage, OutboundTask},
    },
    service::queue::QueueClient,
};

/// Handles one ingress invocation.
///
/// Decodes and parses the first record of the batch, derives the reply task,
/// and publishes it with the conversation id as the ordering key and a fresh
/// deduplication token. Exactly one queue call is made; any failure before
/// the publish means no queue call at all. Retry policy belongs to the host.
#[instrument(skip_all)]
pub async fn handle(event: &EventBatch, context: &InvocationContext, queue: &QueueClient, config: &Config) -> Void {
    let record = event.first_record()?;
    let body = record.decoded_body()?;
    let inbound = ChatMessage::parse(&body)?;

    let task = OutboundTask::reply_to(&inbound);
    let queue_url = config.queue_url(context.account_id()?);

    // A fresh token per publish, so queue-side dedup never collapses two
    // distinct sends.
    let dedup_token = Uuid::new_v4().to_string();

    let message_id = queue.publish(&queue_url, &task.conversation_id.to_string(), &dedup_token, &serde_json::to_string(&task)?).await?;

    info!(conversation_id = task.conversation_id, queue_message_id = %message_id, "published outbound task");

    Ok(())
}
