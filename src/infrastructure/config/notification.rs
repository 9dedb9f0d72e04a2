//! Notification configuration: severity gate, rendering switches and the
//! per-channel sections.

use serde::Deserialize;

use super::telegram::TelegramAppConfig;
use super::webhook::WebhookAppConfig;
use crate::application::render::{RenderOptions, DEFAULT_PRECISION};

const fn default_true() -> bool {
    true
}

fn default_min_level() -> String {
    "info".to_string()
}

const fn default_precision() -> u32 {
    DEFAULT_PRECISION
}

/// Log channel configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LogAppConfig {
    /// Enable the log channel (default: true).
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl Default for LogAppConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
        }
    }
}

/// The `[notifications]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct NotificationConfig {
    /// Name of the lowest severity that is delivered (default: `info`).
    ///
    /// Resolved to a [`Severity`](crate::domain::Severity) when the
    /// configuration is loaded; see [`Config::min_level`](super::Config::min_level).
    #[serde(default = "default_min_level")]
    pub min_level: String,
    /// Render compact bodies instead of line-oriented ones.
    #[serde(default)]
    pub short_format: bool,
    /// Decimal places for numeric fields (default: 8).
    #[serde(default = "default_precision")]
    pub precision: u32,
    #[serde(default)]
    pub log: LogAppConfig,
    #[serde(default)]
    pub webhook: WebhookAppConfig,
    #[serde(default)]
    pub telegram: TelegramAppConfig,
}

impl NotificationConfig {
    #[must_use]
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            short_format: self.short_format,
            precision: self.precision,
        }
    }
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            min_level: default_min_level(),
            short_format: false,
            precision: default_precision(),
            log: LogAppConfig::default(),
            webhook: WebhookAppConfig::default(),
            telegram: TelegramAppConfig::default(),
        }
    }
}
