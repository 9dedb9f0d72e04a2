//! Notification rendering.
//!
//! [`render`] turns a [`NotificationEvent`] into a [`RenderedMessage`] with a
//! subject and three body representations. It is pure: identical inputs and
//! options always yield identical output, and absent fields never error.
//!
//! # Modes
//!
//! - **Short** (`short_format = true`): the body is the compact raw paragraph,
//!   the HTML is only the bolded or badged action heading.
//! - **Verbose**: one `Label: value` line per field, subject first.
//!
//! The raw body is produced in both modes so chat transports always have a
//! compact variant.
//!
//! # Example
//!
//! ```
//! use tradecast::application::render::{render, RenderOptions};
//! use tradecast::domain::{NotificationEvent, Severity};
//!
//! let event = NotificationEvent::new(Severity::Warn).with_reason("Balance low.");
//! let message = render(&event, &RenderOptions::default());
//!
//! assert_eq!(message.subject, "WARN Notification.");
//! assert_eq!(message.raw, "Balance low. Notification.");
//! ```

mod format;
mod html;
mod short;
mod verbose;

pub use format::{
    escape_html, format_decimal, format_duration, format_timestamp, FormatValue,
    TIMESTAMP_FORMAT,
};

use serde::Deserialize;

use crate::domain::{NotificationEvent, RenderedMessage};

/// Default number of decimal places for prices, quantities and amounts.
pub const DEFAULT_PRECISION: u32 = 8;

/// Switches that control rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct RenderOptions {
    /// Render the compact body instead of the line-oriented one.
    #[serde(default)]
    pub short_format: bool,
    /// Decimal places for numeric fields before trailing zeros are stripped.
    #[serde(default = "default_precision")]
    pub precision: u32,
}

const fn default_precision() -> u32 {
    DEFAULT_PRECISION
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            short_format: false,
            precision: DEFAULT_PRECISION,
        }
    }
}

impl RenderOptions {
    #[must_use]
    pub const fn short(precision: u32) -> Self {
        Self {
            short_format: true,
            precision,
        }
    }

    #[must_use]
    pub const fn verbose(precision: u32) -> Self {
        Self {
            short_format: false,
            precision,
        }
    }
}

/// What the event reports, without trailing punctuation.
///
/// A trade takes precedence over a signal; with neither the event is a
/// bare notification.
#[must_use]
pub fn action(event: &NotificationEvent) -> String {
    if let Some(trade) = &event.trade {
        format!(
            "{} {} {} trade",
            trade.verb(),
            trade.symbol,
            trade.position_type
        )
    } else if let Some(signal) = &event.signal {
        format!(
            "{} {} {} signal",
            signal.entry_type, signal.symbol, signal.position_type
        )
    } else {
        "Notification".to_string()
    }
}

/// Render an event for delivery.
#[must_use]
pub fn render(event: &NotificationEvent, options: &RenderOptions) -> RenderedMessage {
    let action = action(event);
    let subject = format!("{} {}.", event.severity, action);
    let raw = short::raw_body(event, &action, options.precision);
    let heading = html::heading(event.severity, &action);

    let (body, html) = if options.short_format {
        (raw.clone(), heading)
    } else {
        let lines = verbose::body_lines(event, &subject, options.precision);
        let html = html::join_lines(&heading, lines.iter().skip(1).map(String::as_str));
        (lines.join("\n"), html)
    };

    RenderedMessage {
        severity: event.severity,
        subject,
        body,
        raw,
        html,
    }
}
