//! Telegram delivery.
//!
//! Requires the `telegram` feature to be enabled.

mod format;

pub mod channel;

pub use channel::{TelegramChannel, TelegramConfig};
