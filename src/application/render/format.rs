//! Scalar formatting shared by every body representation.

use chrono::{DateTime, Duration, Utc};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::domain::{EventSource, Score, TradingType, WalletType};

/// Timestamp layout used in every representation.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Largest magnitude shown in a unit before switching to the next one.
const UNIT_LIMIT: f64 = 60.0;

/// Round to `precision` places, then drop trailing zeros and a dangling point.
///
/// ```
/// use rust_decimal_macros::dec;
/// use tradecast::application::render::format_decimal;
///
/// assert_eq!(format_decimal(dec!(12.000000), 6), "12");
/// assert_eq!(format_decimal(dec!(12.5), 6), "12.5");
/// assert_eq!(format_decimal(dec!(0.123456789), 4), "0.1235");
/// ```
#[must_use]
pub fn format_decimal(value: Decimal, precision: u32) -> String {
    let rounded = value
        .round_dp_with_strategy(precision, RoundingStrategy::MidpointAwayFromZero)
        .normalize();
    if rounded.is_zero() {
        // normalize keeps the sign of -0
        return "0".to_string();
    }
    rounded.to_string()
}

#[must_use]
pub fn format_timestamp(value: &DateTime<Utc>) -> String {
    value.format(TIMESTAMP_FORMAT).to_string()
}

/// Scale a duration to seconds, minutes or hours, one decimal place.
///
/// The smallest unit whose magnitude does not exceed 60 is chosen; anything
/// longer than an hour stays in hours.
#[must_use]
pub fn format_duration(value: Duration) -> String {
    let seconds = value.num_milliseconds() as f64 / 1000.0;
    if seconds.abs() <= UNIT_LIMIT {
        return format!("{seconds:.1} sec");
    }
    let minutes = seconds / 60.0;
    if minutes.abs() <= UNIT_LIMIT {
        return format!("{minutes:.1} min");
    }
    format!("{:.1} hr", minutes / 60.0)
}

/// Escape text for inclusion in an HTML body.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }
    result
}

/// A field value that can appear in a rendered body.
///
/// Absent values render as the empty string.
pub trait FormatValue {
    fn format_value(&self, precision: u32) -> String;
}

impl FormatValue for Decimal {
    fn format_value(&self, precision: u32) -> String {
        format_decimal(*self, precision)
    }
}

impl FormatValue for DateTime<Utc> {
    fn format_value(&self, _precision: u32) -> String {
        format_timestamp(self)
    }
}

impl FormatValue for Score {
    fn format_value(&self, precision: u32) -> String {
        match self {
            Score::Value(v) => format_decimal(*v, precision),
            Score::NotAvailable => "N/A".to_string(),
        }
    }
}

impl FormatValue for str {
    fn format_value(&self, _precision: u32) -> String {
        self.to_string()
    }
}

macro_rules! display_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FormatValue for $ty {
                fn format_value(&self, _precision: u32) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

display_value!(String, EventSource, WalletType, TradingType);

impl<T: FormatValue + ?Sized> FormatValue for &T {
    fn format_value(&self, precision: u32) -> String {
        (**self).format_value(precision)
    }
}

impl<T: FormatValue> FormatValue for Option<T> {
    fn format_value(&self, precision: u32) -> String {
        self.as_ref()
            .map(|v| v.format_value(precision))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    #[test]
    fn decimal_strips_trailing_zeros() {
        assert_eq!(format_decimal(dec!(12.000000), 6), "12");
        assert_eq!(format_decimal(dec!(12.5), 6), "12.5");
        assert_eq!(format_decimal(dec!(12.50), 1), "12.5");
        assert_eq!(format_decimal(dec!(100), 8), "100");
    }

    #[test]
    fn decimal_rounds_half_away_from_zero() {
        assert_eq!(format_decimal(dec!(1.2345), 3), "1.235");
        assert_eq!(format_decimal(dec!(-1.2345), 3), "-1.235");
        assert_eq!(format_decimal(dec!(2.5), 0), "3");
    }

    #[test]
    fn negative_zero_renders_as_zero() {
        assert_eq!(format_decimal(dec!(-0.0001), 2), "0");
    }

    #[test]
    fn timestamp_uses_fixed_layout() {
        let ts = Utc.with_ymd_and_hms(2024, 7, 4, 8, 5, 9).unwrap();
        assert_eq!(format_timestamp(&ts), "2024-07-04 08:05:09");
    }

    #[test]
    fn duration_scales_units() {
        assert_eq!(format_duration(Duration::seconds(45)), "45.0 sec");
        assert_eq!(format_duration(Duration::seconds(60)), "60.0 sec");
        assert_eq!(format_duration(Duration::seconds(61)), "1.0 min");
        assert_eq!(format_duration(Duration::seconds(3600)), "60.0 min");
        assert_eq!(format_duration(Duration::seconds(5400)), "1.5 hr");
        assert_eq!(format_duration(Duration::seconds(-30)), "-30.0 sec");
    }

    #[test]
    fn escape_html_replaces_markup() {
        assert_eq!(escape_html("a < b & c"), "a &lt; b &amp; c");
        assert_eq!(escape_html("\"quoted\""), "&quot;quoted&quot;");
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn absent_values_render_empty() {
        let missing: Option<Decimal> = None;
        assert_eq!(missing.format_value(4), "");
        assert_eq!(Some(dec!(1.50)).format_value(4), "1.5");
        assert_eq!(Score::NotAvailable.format_value(4), "N/A");
        assert_eq!(Some(WalletType::Margin).format_value(0), "margin");
    }
}
