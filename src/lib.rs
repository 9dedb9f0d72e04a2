//! Tradecast - trading event notifications.
//!
//! Renders signal, trade and operational events into a subject plus plain,
//! compact and HTML bodies, then fans the result out to every configured
//! channel behind a minimum-severity gate.
//!
//! # Architecture
//!
//! - [`domain`] - Severities, signals, trades, events and rendered messages
//! - [`application`] - The pure renderer
//! - [`port`] - The `Channel` trait and the fan-out registry
//! - [`adapter`] - Channel implementations and the CLI
//! - [`infrastructure`] - Configuration and wiring
//! - [`error`] - Error types for the crate
//!
//! # Features
//!
//! - `telegram` (default) - Telegram channel via teloxide
//! - `testkit` - Spy channels and fixtures for integration tests
//!
//! # Example
//!
//! ```no_run
//! use tradecast::application::render::{render, RenderOptions};
//! use tradecast::domain::{NotificationEvent, Severity};
//! use tradecast::infrastructure::config::Config;
//! use tradecast::infrastructure::factory::build_channel_registry;
//!
//! # async fn run() -> tradecast::error::Result<()> {
//! let config = Config::load("config.toml")?;
//! let registry = build_channel_registry(&config)?;
//!
//! let event = NotificationEvent::new(Severity::Warn).with_reason("Balance low");
//! registry.notify_all(&render(&event, &config.render_options())).await?;
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
