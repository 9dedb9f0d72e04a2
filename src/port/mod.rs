//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! ```text
//!   ┌──────────────┐   render   ┌──────────────────┐   notify_all   ┌───────────┐
//!   │ Notification │ ─────────▶ │ RenderedMessage  │ ─────────────▶ │  Channel  │
//!   │    Event     │            └──────────────────┘                │  Adapters │
//!   └──────────────┘                                                └───────────┘
//! ```
//!
//! # Available Ports
//!
//! - [`Channel`] - Message delivery (log, webhook, Telegram)
//! - [`ChannelRegistry`] - Severity-gated fan-out over all channels

pub mod outbound;

pub use outbound::channel::{Channel, ChannelRegistry, DeliveryThreshold};
