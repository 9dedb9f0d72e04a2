//! Compact one-paragraph rendering.

use rust_decimal::Decimal;

use super::format::{format_decimal, format_duration};
use crate::domain::{EventSource, NotificationEvent, Severity};

/// Places shown for the profit percentage, independent of the configured precision.
const PNL_PRECISION: u32 = 3;

/// Build the raw body.
///
/// Fragments (reason, P&L, cost, duration, source) are joined with `". "`,
/// followed by the action clause and the crediting strategy.
pub(super) fn raw_body(event: &NotificationEvent, action: &str, precision: u32) -> String {
    let mut parts: Vec<String> = Vec::new();

    if let Some(reason) = event.reason.as_deref() {
        let reason = reason.trim();
        let reason = reason.strip_suffix('.').unwrap_or(reason);
        if !reason.is_empty() {
            parts.push(reason.to_string());
        }
    }

    if let Some(trade) = &event.trade {
        if event.severity == Severity::Success {
            if let Some(pnl) = trade.profit_percent() {
                let headline = if pnl < Decimal::ZERO { "LOSS!" } else { "PROFIT!" };
                parts.push(format!("{headline} {}%", format_decimal(pnl, PNL_PRECISION)));
            }
        }
        if let Some(cost) = trade.cost {
            parts.push(format!("Cost: {}", format_decimal(cost, precision)));
        }
        if let Some(duration) = trade.duration() {
            parts.push(format!("Duration: {}", format_duration(duration)));
        }
    }

    if let Some(source) = event.source.filter(|s| *s != EventSource::Signal) {
        parts.push(source.to_string());
    }

    let mut raw = String::new();
    if !parts.is_empty() {
        raw.push_str(&parts.join(". "));
        raw.push_str(". ");
    }
    raw.push_str(action);
    raw.push('.');
    if let Some(strategy) = event.strategy() {
        raw.push(' ');
        raw.push_str(strategy);
        raw.push('.');
    }
    raw
}
