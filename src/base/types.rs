//! Error taxonomy and result alias for the relay pipeline.

use thiserror::Error;

/// Error taxonomy for the relay pipeline.
///
/// Each variant maps to one failure category an invocation can hit. Errors
/// are logged once where they are detected and then re-raised to the host
/// unmodified; there is no local recovery.
#[derive(Debug, Error)]
pub enum RelayError {
    /// The envelope body could not be decoded from its transport encoding.
    #[error("malformed envelope body: {0}")]
    Decode(String),

    /// The decoded body (or invocation context) is not a well-formed message.
    #[error("malformed message: {0}")]
    Parse(String),

    /// The queue service rejected or failed the publish call.
    #[error("queue publish failed: {0}")]
    Publish(String),

    /// The secret store call failed or returned no usable credential.
    #[error("credential unavailable: {0}")]
    Secret(String),

    /// The external chat API call failed or returned a non-success status.
    #[error("delivery failed: {0}")]
    Delivery(String),

    /// Required configuration is missing or invalid.
    #[error("configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for RelayError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

impl From<config::ConfigError> for RelayError {
    fn from(err: config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

/// Result alias used throughout the crate.
pub type Res<T> = Result<T, RelayError>;
/// Result alias for operations that only signal success or failure.
pub type Void = Res<()>;
