//! Channel registry factory.
//!
//! Builds the [`ChannelRegistry`] from configuration. Channels are
//! registered in a fixed order: log, webhook, Telegram.

use std::time::Duration;

use tracing::info;

use crate::adapter::outbound::channel::{LogChannel, WebhookChannel, WebhookConfig};
use crate::error::{ConfigError, Result};
use crate::infrastructure::config::settings::Config;
use crate::port::ChannelRegistry;

#[cfg(feature = "telegram")]
use crate::adapter::outbound::channel::telegram::{TelegramChannel, TelegramConfig};

/// Build the channel registry from configuration.
///
/// The registry's gate starts at the configured minimum level.
///
/// # Errors
///
/// Returns a configuration error when an enabled channel cannot be built:
/// a webhook without a usable URL, or Telegram without credentials.
pub fn build_channel_registry(config: &Config) -> Result<ChannelRegistry> {
    let notifications = &config.notifications;
    let mut registry = ChannelRegistry::new(config.threshold());

    if notifications.log.enabled {
        registry.register(Box::new(LogChannel));
    }

    if notifications.webhook.enabled {
        let url = notifications
            .webhook
            .url
            .clone()
            .ok_or(ConfigError::MissingField {
                field: "notifications.webhook.url",
            })?;
        let webhook = WebhookConfig {
            url,
            timeout: Duration::from_secs(notifications.webhook.timeout_secs),
        };
        let channel = WebhookChannel::new(webhook).map_err(|e| ConfigError::InvalidValue {
            field: "notifications.webhook",
            reason: e.to_string(),
        })?;
        registry.register(Box::new(channel));
        info!("Webhook channel enabled");
    }

    if notifications.telegram.enabled {
        register_telegram(&mut registry)?;
    }

    info!(
        channels = ?registry.channel_names(),
        min_level = %config.min_level(),
        "Channel registry built"
    );
    Ok(registry)
}

#[cfg(feature = "telegram")]
fn register_telegram(registry: &mut ChannelRegistry) -> Result<()> {
    let telegram = TelegramConfig::from_env().ok_or(ConfigError::MissingField {
        field: "TELEGRAM_BOT_TOKEN/TELEGRAM_CHAT_ID",
    })?;
    registry.register(Box::new(TelegramChannel::new(telegram)));
    info!("Telegram channel enabled");
    Ok(())
}

#[cfg(not(feature = "telegram"))]
fn register_telegram(_registry: &mut ChannelRegistry) -> Result<()> {
    Err(ConfigError::InvalidValue {
        field: "notifications.telegram.enabled",
        reason: "telegram support requires the telegram feature".to_string(),
    }
    .into())
}
