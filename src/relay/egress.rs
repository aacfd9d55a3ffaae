//! Egress relay: delivers one queued task to the external chat API.

use tracing::{info, instrument};

use crate::{
    base::{config::Config, types::Void},
    relay::{envelope::EventBatch, message::OutboundTask},
    service::{chat::ChatClient, secrets::SecretsClient},
};

/// Handles one egress invocation.
///
/// Parses the first queued record into an outbound task, fetches the
/// delivery credential, and sends the reply. The chat API is never called
/// without a credential in hand, and a non-success delivery fails the
/// invocation for the host's redrive policy to handle.
#[instrument(skip_all)]
pub async fn handle(event: &EventBatch, secrets: &SecretsClient, chat: &ChatClient, config: &Config) -> Void {
    let record = event.first_record()?;
    let body = record.decoded_body()?;
    let task = OutboundTask::parse(&body)?;

    let credential = secrets.fetch(&config.bot_token_secret_id).await?;

    let result = chat.send_message(&credential, task.conversation_id, &task.message).await?;

    info!(conversation_id = task.conversation_id, status = result.status, "delivered reply");

    Ok(())
}
