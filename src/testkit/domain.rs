//! Builders for domain values used across tests.
//!
//! Fixtures share one timestamp so rendered output is stable.

use chrono::{DateTime, Duration, TimeZone, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::domain::{
    EntryType, NotificationEvent, PositionType, RenderedMessage, Score, Severity, Signal, Trade,
};

/// 2024-05-20 14:00:00 UTC.
pub fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 20, 14, 0, 0)
        .single()
        .unwrap_or_default()
}

/// A long `BTCUSDT` entry signal from the `trend` strategy.
pub fn signal() -> Signal {
    Signal::new("BTCUSDT", PositionType::Long, EntryType::Enter, "trend", t0())
        .with_price(dec!(64000.50))
        .with_score(Score::Value(dec!(0.8)))
}

/// An open long `BTCUSDT` trade bought at 100.
pub fn open_trade() -> Trade {
    Trade::new("BTCUSDT", PositionType::Long, "trend")
        .with_quantity(dec!(2))
        .with_cost(dec!(200))
        .with_buy(dec!(100), t0())
}

/// [`open_trade`] sold at `sell` after `held`.
pub fn closed_trade(sell: Decimal, held: Duration) -> Trade {
    open_trade().with_sell(sell, t0() + held)
}

/// A bare event carrying only a reason.
pub fn notice(severity: Severity, reason: &str) -> NotificationEvent {
    NotificationEvent::new(severity).with_reason(reason)
}

/// A hand-built message, bypassing the renderer.
pub fn message(severity: Severity) -> RenderedMessage {
    RenderedMessage {
        severity,
        subject: format!("{severity} Notification."),
        body: String::new(),
        raw: "Notification.".to_string(),
        html: String::new(),
    }
}
