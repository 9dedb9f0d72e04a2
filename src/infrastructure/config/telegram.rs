//! Telegram channel configuration.
//!
//! Only the switch lives in the config file; the bot token and chat ID are
//! read from `TELEGRAM_BOT_TOKEN` and `TELEGRAM_CHAT_ID`.

use serde::Deserialize;

/// Telegram channel configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TelegramAppConfig {
    /// Enable telegram notifications.
    #[serde(default)]
    pub enabled: bool,
}
