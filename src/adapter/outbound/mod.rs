//! Outbound adapters.

pub mod channel;
