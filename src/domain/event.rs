//! Renderer input.

use serde::{Deserialize, Serialize};

use super::severity::Severity;
use super::signal::Signal;
use super::trade::Trade;
use super::types::EventSource;

/// Something worth telling an operator about.
///
/// Signal and trade are independent: a trade without a signal is raised
/// when an existing long position is rebalanced, and an event with neither
/// is a bare notice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationEvent {
    pub severity: Severity,
    #[serde(default)]
    pub source: Option<EventSource>,
    #[serde(default)]
    pub signal: Option<Signal>,
    #[serde(default)]
    pub trade: Option<Trade>,
    #[serde(default)]
    pub reason: Option<String>,
}

impl NotificationEvent {
    #[must_use]
    pub fn new(severity: Severity) -> Self {
        Self {
            severity,
            source: None,
            signal: None,
            trade: None,
            reason: None,
        }
    }

    #[must_use]
    pub fn with_source(mut self, source: EventSource) -> Self {
        self.source = Some(source);
        self
    }

    #[must_use]
    pub fn with_signal(mut self, signal: Signal) -> Self {
        self.signal = Some(signal);
        self
    }

    #[must_use]
    pub fn with_trade(mut self, trade: Trade) -> Self {
        self.trade = Some(trade);
        self
    }

    #[must_use]
    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    /// Strategy to credit: the trade's when present, else the signal's.
    #[must_use]
    pub fn strategy(&self) -> Option<&str> {
        self.trade
            .as_ref()
            .map(|t| t.strategy.as_str())
            .or_else(|| self.signal.as_ref().map(|s| s.strategy.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{EntryType, PositionType};
    use chrono::{DateTime, Utc};

    #[test]
    fn trade_strategy_wins_over_signal() {
        let signal = Signal::new(
            "BTCUSDT",
            PositionType::Long,
            EntryType::Enter,
            "signal-strategy",
            DateTime::<Utc>::UNIX_EPOCH,
        );
        let trade = Trade::new("BTCUSDT", PositionType::Long, "trade-strategy");

        let event = NotificationEvent::new(Severity::Info).with_signal(signal.clone());
        assert_eq!(event.strategy(), Some("signal-strategy"));

        let event = event.with_trade(trade);
        assert_eq!(event.strategy(), Some("trade-strategy"));
    }

    #[test]
    fn bare_notice_has_no_strategy() {
        let event = NotificationEvent::new(Severity::Warn).with_reason("disk almost full");
        assert_eq!(event.strategy(), None);
        assert_eq!(event.reason.as_deref(), Some("disk almost full"));
    }

    #[test]
    fn deserializes_with_optional_fields_missing() {
        let event: NotificationEvent =
            serde_json::from_str(r#"{"severity":"warn","source":"balancer"}"#).unwrap();
        assert_eq!(event.severity, Severity::Warn);
        assert_eq!(event.source, Some(EventSource::Balancer));
        assert!(event.signal.is_none());
        assert!(event.trade.is_none());
    }
}
