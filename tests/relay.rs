#![cfg(test)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use mockall::mock;
use relay_bot::{
    base::{
        config::{Config, ConfigInner},
        types::{RelayError, Res},
    },
    relay::{
        egress,
        envelope::{EventBatch, InvocationContext},
        ingress,
    },
    service::{
        chat::{ChatClient, DeliveryResult, GenericChatClient},
        queue::{GenericQueueClient, QueueClient},
        secrets::{DeliveryCredential, GenericSecretsClient, SecretsClient},
    },
};

// Mocks.

mock! {
    pub Queue {}

    #[async_trait]
    impl GenericQueueClient for Queue {
        async fn publish(&self, queue_url: &str, ordering_key: &str, dedup_token: &str, body: &str) -> Res<String>;
    }
}

mock! {
    pub Secrets {}

    #[async_trait]
    impl GenericSecretsClient for Secrets {
        async fn fetch(&self, secret_id: &str) -> Res<DeliveryCredential>;
    }
}

mock! {
    pub Chat {}

    #[async_trait]
    impl GenericChatClient for Chat {
        async fn send_message(&self, credential: &DeliveryCredential, conversation_id: i64, text: &str) -> Res<DeliveryResult>;
    }
}

// Helpers.

fn test_config() -> Config {
    Config {
        inner: Arc::new(ConfigInner {
            aws_region: "eu-west-1".to_string(),
            outbound_queue_name: "outbound.fifo".to_string(),
            bot_token_secret_id: "TelegramBotToken".to_string(),
            telegram_api_base: "https://api.telegram.org".to_string(),
        }),
    }
}

fn test_context() -> InvocationContext {
    serde_json::from_value(serde_json::json!({
        "invokedFunctionArn": "arn:aws:lambda:eu-west-1:123456789012:function:ingress-relay",
    }))
    .unwrap()
}

fn batch_with_body(body: &str) -> EventBatch {
    serde_json::from_value(serde_json::json!({
        "Records": [{
            "messageId": "059f36b4-87a3-44ab-83d2-661975830a7d",
            "body": body,
            "eventSourceARN": "arn:aws:sqs:eu-west-1:123456789012:inbound.fifo",
            "awsRegion": "eu-west-1",
        }],
    }))
    .unwrap()
}

// Base64 of `{"update_id":1,"message":{"chat":{"id":42},"text":"hi"}}`.
const VALID_UPDATE_B64: &str = "eyJ1cGRhdGVfaWQiOjEsIm1lc3NhZ2UiOnsiY2hhdCI6eyJpZCI6NDJ9LCJ0ZXh0IjoiaGkifX0=";

// Ingress.

#[tokio::test]
async fn ingress_publishes_one_task_keyed_by_conversation() {
    let mut queue = MockQueue::new();
    queue
        .expect_publish()
        .times(1)
        .withf(|queue_url, ordering_key, dedup_token, body| {
            queue_url == "https://sqs.eu-west-1.amazonaws.com/123456789012/outbound.fifo"
                && ordering_key == "42"
                && !dedup_token.is_empty()
                && body == r#"{"chatid":42,"message":"You typed: hi"}"#
        })
        .returning(|_, _, _, _| Ok("queue-message-1".to_string()));

    let event = batch_with_body(VALID_UPDATE_B64);

    let result = ingress::handle(&event, &test_context(), &QueueClient::new(Arc::new(queue)), &test_config()).await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn ingress_generates_a_fresh_dedup_token_per_publish() {
    let tokens = Arc::new(Mutex::new(Vec::new()));

    let mut queue = MockQueue::new();
    let seen = tokens.clone();
    queue.expect_publish().times(2).returning(move |_, _, dedup_token, _| {
        seen.lock().unwrap().push(dedup_token.to_string());
        Ok("queue-message".to_string())
    });

    let event = batch_with_body(VALID_UPDATE_B64);
    let client = QueueClient::new(Arc::new(queue));
    let config = test_config();
    let context = test_context();

    // Identical input twice; the tokens must still differ.
    ingress::handle(&event, &context, &client, &config).await.unwrap();
    ingress::handle(&event, &context, &client, &config).await.unwrap();

    let tokens = tokens.lock().unwrap();
    assert_eq!(tokens.len(), 2);
    assert_ne!(tokens[0], tokens[1]);
}

#[tokio::test]
async fn ingress_rejects_malformed_body_without_publishing() {
    let mut queue = MockQueue::new();
    queue.expect_publish().times(0);

    // Decodes to `not json`.
    let event = batch_with_body("bm90IGpzb24=");

    let result = ingress::handle(&event, &test_context(), &QueueClient::new(Arc::new(queue)), &test_config()).await;

    assert!(matches!(result, Err(RelayError::Parse(_))));
}

#[tokio::test]
async fn ingress_rejects_malformed_context_without_publishing() {
    let mut queue = MockQueue::new();
    queue.expect_publish().times(0);

    let event = batch_with_body(VALID_UPDATE_B64);
    let context = InvocationContext::default();

    let result = ingress::handle(&event, &context, &QueueClient::new(Arc::new(queue)), &test_config()).await;

    assert!(matches!(result, Err(RelayError::Parse(_))));
}

// Egress.

#[tokio::test]
async fn egress_delivers_the_queued_task() {
    let mut secrets = MockSecrets::new();
    secrets
        .expect_fetch()
        .times(1)
        .withf(|secret_id| secret_id == "TelegramBotToken")
        .returning(|_| Ok(DeliveryCredential::new("123:abc")));

    let mut chat = MockChat::new();
    chat.expect_send_message()
        .times(1)
        .withf(|_, conversation_id, text| *conversation_id == 42 && text == "You typed: hi")
        .returning(|_, _, _| Ok(DeliveryResult { status: 200 }));

    let event = batch_with_body(r#"{"chatid":42,"message":"You typed: hi"}"#);

    let result = egress::handle(&event, &SecretsClient::new(Arc::new(secrets)), &ChatClient::new(Arc::new(chat)), &test_config()).await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn egress_never_calls_the_chat_api_without_a_credential() {
    let mut secrets = MockSecrets::new();
    secrets.expect_fetch().times(1).returning(|id| Err(RelayError::Secret(format!("secret `{id}` has no string value"))));

    let mut chat = MockChat::new();
    chat.expect_send_message().times(0);

    let event = batch_with_body(r#"{"chatid":42,"message":"You typed: hi"}"#);

    let result = egress::handle(&event, &SecretsClient::new(Arc::new(secrets)), &ChatClient::new(Arc::new(chat)), &test_config()).await;

    assert!(matches!(result, Err(RelayError::Secret(_))));
}

#[tokio::test]
async fn egress_surfaces_non_success_status_as_delivery_failure() {
    let mut secrets = MockSecrets::new();
    secrets.expect_fetch().returning(|_| Ok(DeliveryCredential::new("123:abc")));

    let mut chat = MockChat::new();
    // One call, no internal retry on failure.
    chat.expect_send_message().times(1).returning(|_, _, _| Err(RelayError::Delivery("chat API returned status 429".to_string())));

    let event = batch_with_body(r#"{"chatid":42,"message":"You typed: hi"}"#);

    let result = egress::handle(&event, &SecretsClient::new(Arc::new(secrets)), &ChatClient::new(Arc::new(chat)), &test_config()).await;

    assert!(matches!(result, Err(RelayError::Delivery(_))));
}

#[tokio::test]
async fn egress_rejects_a_task_the_ingress_side_did_not_produce() {
    let mut secrets = MockSecrets::new();
    secrets.expect_fetch().times(0);

    let mut chat = MockChat::new();
    chat.expect_send_message().times(0);

    let event = batch_with_body(r#"{"unrelated":true}"#);

    let result = egress::handle(&event, &SecretsClient::new(Arc::new(secrets)), &ChatClient::new(Arc::new(chat)), &test_config()).await;

    assert!(matches!(result, Err(RelayError::Parse(_))));
}
