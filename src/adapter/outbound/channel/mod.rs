//! Channel adapters.
//!
//! Implements the `port::Channel` trait for the supported transports.

pub mod log;
pub mod webhook;

#[cfg(feature = "telegram")]
pub mod telegram;

pub use log::LogChannel;
pub use webhook::{WebhookChannel, WebhookConfig};
