//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`channel`] - Spy [`Channel`](crate::port::Channel) implementations:
//!   `RecordingChannel`, `FailingChannel`, `SlowChannel`.
//! - [`domain`] - Builders for signals, trades and events.

pub mod channel;
pub mod domain;

/// Serializes tests that read or modify process environment variables.
pub static ENV_LOCK: parking_lot::Mutex<()> = parking_lot::const_mutex(());
