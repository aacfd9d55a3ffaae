//! Load configuration via `config` crate with env-override support.

use std::{ops::Deref, sync::Arc};

use serde::Deserialize;

use super::types::{RelayError, Res};

/// Default base URL for the Telegram Bot API.
fn default_telegram_api_base() -> String {
    "https://api.telegram.org".to_string()
}

/// Configuration for the relay-bot application.
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Shared inner configuration.
    pub inner: Arc<ConfigInner>,
}

impl Deref for Config {
    type Target = ConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

/// The configuration values themselves, validated once at load.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct ConfigInner {
    /// AWS region for the queue and secret store (`RELAY_BOT_AWS_REGION`).
    ///
    /// Also the region segment of the derived queue URL, so both relays
    /// always agree on it.
    pub aws_region: String,
    /// Name of the outbound FIFO queue (`RELAY_BOT_OUTBOUND_QUEUE_NAME`).
    pub outbound_queue_name: String,
    /// Secret store identifier of the bot token (`RELAY_BOT_BOT_TOKEN_SECRET_ID`).
    pub bot_token_secret_id: String,
    /// Base URL for the Telegram Bot API (`RELAY_BOT_TELEGRAM_API_BASE`).
    #[serde(default = "default_telegram_api_base")]
    pub telegram_api_base: String,
}

impl Config {
    /// Loads configuration from `RELAY_BOT_`-prefixed environment variables,
    /// optionally overlaid with a TOML file. Required keys are validated
    /// here so a missing destination fails at startup, not mid-invocation.
    pub fn load(explicit_path: Option<&std::path::Path>) -> Res<Self> {
        let mut cfg = config::Config::builder().add_source(config::Environment::default().prefix("RELAY_BOT"));

        if let Some(p) = explicit_path {
            cfg = cfg.add_source(config::File::from(p.to_path_buf()));
        } else if std::path::Path::new(".hidden/config.toml").exists() {
            cfg = cfg.add_source(config::File::with_name(".hidden/config.toml"));
        }

        let result = Config {
            inner: Arc::new(cfg.build()?.try_deserialize()?),
        };

        if result.aws_region.is_empty() {
            return Err(RelayError::Config("aws_region must not be empty".to_string()));
        }

        if result.outbound_queue_name.is_empty() {
            return Err(RelayError::Config("outbound_queue_name must not be empty".to_string()));
        }

        if result.bot_token_secret_id.is_empty() {
            return Err(RelayError::Config("bot_token_secret_id must not be empty".to_string()));
        }

        Ok(result)
    }

    /// Derives the full queue URL for the given account.
    ///
    /// The account id comes from the invocation's execution context; the
    /// region and queue name come from configuration.
    pub fn queue_url(&self, account_id: &str) -> String {
        format!("https://sqs.{}.amazonaws.com/{}/{}", self.aws_region, account_id, self.outbound_queue_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Config {
        Config {
            inner: Arc::new(ConfigInner {
                aws_region: "eu-west-1".to_string(),
                outbound_queue_name: "outbound.fifo".to_string(),
                bot_token_secret_id: "TelegramBotToken".to_string(),
                telegram_api_base: default_telegram_api_base(),
            }),
        }
    }

    #[test]
    fn queue_url_combines_region_account_and_name() {
        let config = test_config();

        assert_eq!(config.queue_url("123456789012"), "https://sqs.eu-west-1.amazonaws.com/123456789012/outbound.fifo");
    }
}
