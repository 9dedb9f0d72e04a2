//! Adapters connecting the application to the outside world.
//!
//! - [`inbound`] - The command-line interface
//! - [`outbound`] - Channel implementations (log, webhook, Telegram)

pub mod inbound;
pub mod outbound;
