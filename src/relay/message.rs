//! Structured message schemas shared by the two relays: the parsed inbound
//! chat message and the outbound task queued between them.

use serde::{Deserialize, Serialize};

use crate::base::types::Res;

/// A decoded Telegram update.
///
/// Only the update id, the chat id, and the text are required; sender and
/// timestamp fields are carried when present but nothing downstream depends
/// on them.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatMessage {
    pub update_id: i64,
    pub message: MessageBody,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MessageBody {
    pub chat: Chat,
    pub text: String,
    #[serde(default)]
    pub message_id: Option<i64>,
    #[serde(default)]
    pub from: Option<Sender>,
    #[serde(default)]
    pub date: Option<i64>,
}

/// The physical chat the message arrived in.
///
/// `id` is stable per chat and is the ordering/partition key downstream.
#[derive(Debug, Clone, Deserialize)]
pub struct Chat {
    pub id: i64,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Sender {
    pub id: i64,
    #[serde(default)]
    pub is_bot: bool,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub language_code: Option<String>,
}

impl ChatMessage {
    pub fn parse(body: &str) -> Res<Self> {
        Ok(serde_json::from_str(body)?)
    }

    /// The conversation identifier used as the queue ordering key.
    pub fn conversation_id(&self) -> i64 {
        self.message.chat.id
    }
}

/// The unit queued between the two relays.
///
/// Serialized as `{"chatid":...,"message":...}` — the wire contract the
/// egress side must parse exactly as produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutboundTask {
    #[serde(rename = "chatid")]
    pub conversation_id: i64,
    pub message: String,
}

impl OutboundTask {
    /// Derives the reply task for an inbound message: same conversation,
    /// echoed text.
    pub fn reply_to(inbound: &ChatMessage) -> Self {
        Self {
            conversation_id: inbound.conversation_id(),
            message: format!("You typed: {}", inbound.message.text),
        }
    }

    pub fn parse(body: &str) -> Res<Self> {
        Ok(serde_json::from_str(body)?)
    }
}
