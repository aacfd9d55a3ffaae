//! Wire shapes of the inbound trigger: the event-source batch and the
//! invocation's execution context.

use base64::Engine;
use serde::Deserialize;

use crate::base::types::{RelayError, Res};

/// One full invocation as delivered by the hosting environment: the event
/// batch plus the execution context it was invoked with.
#[derive(Debug, Clone, Deserialize)]
pub struct Invocation {
    pub event: EventBatch,
    #[serde(default)]
    pub context: InvocationContext,
}

/// Batch wrapper around the inbound records.
///
/// The relays read exactly the first record; batch size is a property of the
/// event source, not of this pipeline.
#[derive(Debug, Clone, Deserialize)]
pub struct EventBatch {
    #[serde(rename = "Records")]
    pub records: Vec<EnvelopeRecord>,
}

impl EventBatch {
    pub fn first_record(&self) -> Res<&EnvelopeRecord> {
        self.records.first().ok_or_else(|| RelayError::Parse("event contains no records".to_string()))
    }
}

/// One record from the event source.
#[derive(Debug, Clone, Deserialize)]
pub struct EnvelopeRecord {
    #[serde(rename = "messageId", default)]
    pub message_id: String,
    pub body: String,
    #[serde(rename = "eventSourceARN", default)]
    pub event_source_arn: Option<String>,
    #[serde(rename = "awsRegion", default)]
    pub aws_region: Option<String>,
}

impl EnvelopeRecord {
    /// Decodes the record body from its transport encoding.
    ///
    /// Bodies arrive either base64-encoded or as plain text. A body the
    /// base64 alphabet rejects is taken as plain; a body that decodes but is
    /// not valid UTF-8 is a decode failure.
    pub fn decoded_body(&self) -> Res<String> {
        match base64::engine::general_purpose::STANDARD.decode(self.body.trim()) {
            Ok(bytes) => String::from_utf8(bytes).map_err(|e| RelayError::Decode(format!("base64 body is not valid UTF-8: {e}"))),
            Err(_) => Ok(self.body.clone()),
        }
    }
}

/// Execution context supplied by the hosting environment.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InvocationContext {
    #[serde(rename = "invokedFunctionArn", default)]
    pub invoked_function_arn: String,
}

impl InvocationContext {
    /// Extracts the account id from the invoked function ARN
    /// (`arn:aws:lambda:region:ACCOUNT:function:name`).
    pub fn account_id(&self) -> Res<&str> {
        self.invoked_function_arn
            .split(':')
            .nth(4)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| RelayError::Parse(format!("cannot extract account id from ARN `{}`", self.invoked_function_arn)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(body: &str) -> EnvelopeRecord {
        EnvelopeRecord {
            message_id: "m-1".to_string(),
            body: body.to_string(),
            event_source_arn: None,
            aws_region: None,
        }
    }

    #[test]
    fn base64_body_decodes() {
        // {"a":1}
        let rec = record("eyJhIjoxfQ==");

        assert_eq!(rec.decoded_body().unwrap(), r#"{"a":1}"#);
    }

    #[test]
    fn plain_body_passes_through() {
        let rec = record(r#"{"chatid":42,"message":"hi"}"#);

        assert_eq!(rec.decoded_body().unwrap(), r#"{"chatid":42,"message":"hi"}"#);
    }

    #[test]
    fn base64_body_with_invalid_utf8_fails() {
        // 0xFF 0xFE is valid base64 but not valid UTF-8.
        let rec = record("//4=");

        assert!(matches!(rec.decoded_body(), Err(RelayError::Decode(_))));
    }

    #[test]
    fn empty_batch_is_an_error() {
        let batch = EventBatch { records: vec![] };

        assert!(matches!(batch.first_record(), Err(RelayError::Parse(_))));
    }

    #[test]
    fn account_id_is_the_fifth_arn_field() {
        let ctx = InvocationContext {
            invoked_function_arn: "arn:aws:lambda:eu-west-1:123456789012:function:ingress-relay".to_string(),
        };

        assert_eq!(ctx.account_id().unwrap(), "123456789012");
    }

    #[test]
    fn malformed_arn_is_an_error() {
        let ctx = InvocationContext {
            invoked_function_arn: "not-an-arn".to_string(),
        };

        assert!(matches!(ctx.account_id(), Err(RelayError::Parse(_))));
    }
}
