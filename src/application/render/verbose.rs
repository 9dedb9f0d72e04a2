//! Line-oriented rendering.

use super::format::FormatValue;
use crate::domain::NotificationEvent;

fn field(label: &str, value: impl FormatValue, precision: u32) -> String {
    format!("{label}: {}", value.format_value(precision))
}

/// Body lines, subject first.
///
/// Absent fields keep their label with an empty value.
pub(super) fn body_lines(event: &NotificationEvent, subject: &str, precision: u32) -> Vec<String> {
    let mut lines = vec![subject.to_string()];

    lines.push(field("Source", event.source, precision));

    match (&event.signal, &event.trade) {
        (Some(signal), _) => {
            lines.push(field("Strategy", signal.strategy.as_str(), precision));
            lines.push(field("Signal price", signal.price, precision));
            lines.push(field("Score", signal.score, precision));
            lines.push(field("Signal time", signal.timestamp, precision));
        }
        // rebalancing an existing long raises trades without a signal
        (None, Some(trade)) => {
            lines.push(field("Strategy", trade.strategy.as_str(), precision));
        }
        (None, None) => {}
    }

    if let Some(trade) = &event.trade {
        lines.push(field("Quantity", trade.quantity, precision));
        lines.push(field("Cost", trade.cost, precision));
        lines.push(field("Borrow", trade.borrow, precision));
        lines.push(field("Wallet", trade.wallet, precision));
        lines.push(field("Trading type", trade.trading_type, precision));
        lines.push(field("Buy price", trade.buy_price, precision));
        lines.push(field("Buy time", trade.buy_time, precision));
        lines.push(field("Sell price", trade.sell_price, precision));
        lines.push(field("Sell time", trade.sell_time, precision));
        lines.push(field("Profit", trade.gross_profit(), precision));
    }

    if let Some(reason) = &event.reason {
        lines.push(String::new());
        lines.push(reason.clone());
    }

    lines
}
