//! Webhook channel configuration.

use serde::Deserialize;

/// Environment variable that overrides `notifications.webhook.url`.
pub const WEBHOOK_URL_ENV: &str = "TRADECAST_WEBHOOK_URL";

const fn default_timeout_secs() -> u64 {
    10
}

/// Webhook channel configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct WebhookAppConfig {
    /// Enable webhook notifications.
    #[serde(default)]
    pub enabled: bool,
    /// Endpoint receiving the JSON payload.
    #[serde(default)]
    pub url: Option<String>,
    /// Request timeout in seconds (default: 10).
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for WebhookAppConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            url: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}
