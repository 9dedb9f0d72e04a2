//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all settings.
//! Configuration is loaded from a TOML file with environment variable
//! overrides for values that should not live in the file, such as the
//! webhook URL and the Telegram credentials.
//!
//! # Example
//!
//! ```no_run
//! use tradecast::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::path::Path;

use serde::Deserialize;

use super::logging::LoggingConfig;
use super::notification::NotificationConfig;
use super::webhook::WEBHOOK_URL_ENV;
use crate::application::render::RenderOptions;
use crate::domain::Severity;
use crate::error::{ConfigError, Result};
use crate::port::DeliveryThreshold;

/// Largest precision `rust_decimal` can represent.
const MAX_PRECISION: u32 = 28;

/// Main application configuration.
///
/// Load from a TOML file using [`Config::load`] or parse directly with
/// [`Config::parse_toml`]. Every section is optional.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Severity gate, rendering switches and channel sections.
    #[serde(default)]
    pub notifications: NotificationConfig,

    /// `notifications.min_level`, resolved once at load.
    #[serde(skip)]
    min_level: Severity,
}

impl Config {
    /// Parse configuration from a TOML string.
    ///
    /// Applies the `TRADECAST_WEBHOOK_URL` override and validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed, the minimum level names no
    /// known severity, or any value is out of range.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;

        if let Ok(url) = std::env::var(WEBHOOK_URL_ENV) {
            if !url.trim().is_empty() {
                config.notifications.webhook.url = Some(url.trim().to_string());
            }
        }

        config.min_level = config
            .notifications
            .min_level
            .parse()
            .map_err(ConfigError::UnknownSeverity)?;

        config.validate()?;

        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML content is malformed
    /// - Validation fails
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Validate configuration values.
    #[allow(clippy::result_large_err)]
    fn validate(&self) -> Result<()> {
        let notifications = &self.notifications;

        if notifications.precision > MAX_PRECISION {
            return Err(ConfigError::InvalidValue {
                field: "precision",
                reason: format!("must be at most {MAX_PRECISION}"),
            }
            .into());
        }

        let webhook = &notifications.webhook;
        if webhook.enabled {
            let Some(url) = webhook.url.as_deref() else {
                return Err(ConfigError::MissingField {
                    field: "notifications.webhook.url",
                }
                .into());
            };
            let parsed = url::Url::parse(url).map_err(|e| ConfigError::InvalidValue {
                field: "notifications.webhook.url",
                reason: e.to_string(),
            })?;
            if !matches!(parsed.scheme(), "http" | "https") {
                return Err(ConfigError::InvalidValue {
                    field: "notifications.webhook.url",
                    reason: format!("unsupported scheme '{}'", parsed.scheme()),
                }
                .into());
            }
            if webhook.timeout_secs == 0 {
                return Err(ConfigError::InvalidValue {
                    field: "notifications.webhook.timeout_secs",
                    reason: "must be greater than 0".to_string(),
                }
                .into());
            }
        }

        Ok(())
    }

    /// The lowest severity that is delivered.
    #[must_use]
    pub const fn min_level(&self) -> Severity {
        self.min_level
    }

    /// A fresh delivery gate starting at [`Config::min_level`].
    #[must_use]
    pub fn threshold(&self) -> DeliveryThreshold {
        DeliveryThreshold::new(self.min_level)
    }

    #[must_use]
    pub fn render_options(&self) -> RenderOptions {
        self.notifications.render_options()
    }

    /// Initialize logging with the configured settings.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::testkit::ENV_LOCK;

    #[test]
    fn empty_config_uses_defaults() {
        let _guard = ENV_LOCK.lock();
        let config = Config::parse_toml("").unwrap();

        assert_eq!(config.min_level(), Severity::Info);
        assert_eq!(config.render_options(), RenderOptions::default());
        assert!(config.notifications.log.enabled);
        assert!(!config.notifications.webhook.enabled);
        assert!(!config.notifications.telegram.enabled);
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn min_level_is_case_insensitive() {
        let _guard = ENV_LOCK.lock();
        let config = Config::parse_toml("[notifications]\nmin_level = \"Warning\"\n").unwrap();

        assert_eq!(config.min_level(), Severity::Warn);
        assert_eq!(config.threshold().get(), Severity::Warn);
    }

    #[test]
    fn unknown_min_level_is_rejected() {
        let _guard = ENV_LOCK.lock();
        let result = Config::parse_toml("[notifications]\nmin_level = \"loud\"\n");

        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::UnknownSeverity(_)))
        ));
    }

    #[test]
    fn precision_is_bounded() {
        let _guard = ENV_LOCK.lock();
        let result = Config::parse_toml("[notifications]\nprecision = 29\n");

        match result {
            Err(Error::Config(ConfigError::InvalidValue { field, .. })) => {
                assert_eq!(field, "precision");
            }
            other => panic!("expected invalid precision, got {other:?}"),
        }
    }

    #[test]
    fn enabled_webhook_requires_url() {
        let _guard = ENV_LOCK.lock();
        std::env::remove_var(WEBHOOK_URL_ENV);
        let result = Config::parse_toml("[notifications.webhook]\nenabled = true\n");

        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::MissingField {
                field: "notifications.webhook.url"
            }))
        ));
    }

    #[test]
    fn webhook_url_must_be_http() {
        let _guard = ENV_LOCK.lock();
        std::env::remove_var(WEBHOOK_URL_ENV);
        let toml = "[notifications.webhook]\nenabled = true\nurl = \"ftp://example.com\"\n";

        assert!(matches!(
            Config::parse_toml(toml),
            Err(Error::Config(ConfigError::InvalidValue { .. }))
        ));
    }

    #[test]
    fn webhook_url_env_overrides_file() {
        let _guard = ENV_LOCK.lock();
        std::env::set_var(WEBHOOK_URL_ENV, "https://hooks.example.com/abc");
        let toml = "[notifications.webhook]\nenabled = true\nurl = \"https://file.example.com\"\n";

        let config = Config::parse_toml(toml);
        std::env::remove_var(WEBHOOK_URL_ENV);

        assert_eq!(
            config.unwrap().notifications.webhook.url.as_deref(),
            Some("https://hooks.example.com/abc")
        );
    }

    #[test]
    fn disabled_webhook_skips_url_checks() {
        let _guard = ENV_LOCK.lock();
        std::env::remove_var(WEBHOOK_URL_ENV);
        let toml = "[notifications.webhook]\nenabled = false\nurl = \"not a url\"\n";

        assert!(Config::parse_toml(toml).is_ok());
    }
}
