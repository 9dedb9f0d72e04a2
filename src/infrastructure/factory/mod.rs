//! Factory functions that wire configured components together.
//!
//! - [`channel`] - Channel registry construction

pub mod channel;

pub use channel::build_channel_registry;
