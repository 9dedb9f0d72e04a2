//! Notification severity levels.
//!
//! Severity is totally ordered by declaration order and drives the delivery
//! gate in [`ChannelRegistry`](crate::port::outbound::channel::ChannelRegistry).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Importance of a notification.
///
/// Ordering: `Debug < Info < Success < Warn < Error`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Severity {
    Debug,
    #[default]
    Info,
    Success,
    Warn,
    Error,
}

impl Severity {
    /// All severities in ascending order.
    pub const ALL: [Severity; 5] = [
        Severity::Debug,
        Severity::Info,
        Severity::Success,
        Severity::Warn,
        Severity::Error,
    ];

    /// Upper-case name used in subjects and logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Success => "SUCCESS",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
        }
    }

    /// Position in the total order, starting at 0 for `Debug`.
    #[must_use]
    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// True for severities that carry no outcome (`Debug`, `Info`).
    #[must_use]
    pub const fn is_informational(self) -> bool {
        matches!(self, Self::Debug | Self::Info)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a severity name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown severity '{0}' (expected one of debug, info, success, warn, error)")]
pub struct ParseSeverityError(pub String);

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "success" => Ok(Self::Success),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            _ => Err(ParseSeverityError(s.to_string())),
        }
    }
}

impl Serialize for Severity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Severity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_follows_declaration() {
        let mut sorted = Severity::ALL;
        sorted.sort();
        assert_eq!(sorted, Severity::ALL);
        assert!(Severity::Debug < Severity::Info);
        assert!(Severity::Success < Severity::Warn);
        assert!(Severity::Warn < Severity::Error);
    }

    #[test]
    fn rank_matches_order() {
        let ranks: Vec<u8> = Severity::ALL.iter().map(|s| s.rank()).collect();
        assert_eq!(ranks, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("SUCCESS".parse::<Severity>(), Ok(Severity::Success));
        assert_eq!(" warn ".parse::<Severity>(), Ok(Severity::Warn));
        assert_eq!("Warning".parse::<Severity>(), Ok(Severity::Warn));
    }

    #[test]
    fn parse_rejects_unknown_names() {
        let err = "critical".parse::<Severity>().unwrap_err();
        assert_eq!(err, ParseSeverityError("critical".to_string()));
    }

    #[test]
    fn display_is_upper_case() {
        assert_eq!(Severity::Error.to_string(), "ERROR");
        assert_eq!(Severity::Info.to_string(), "INFO");
    }

    #[test]
    fn informational_levels() {
        assert!(Severity::Debug.is_informational());
        assert!(Severity::Info.is_informational());
        assert!(!Severity::Success.is_informational());
        assert!(!Severity::Error.is_informational());
    }

    #[test]
    fn serde_round_trip_uses_names() {
        let json = serde_json::to_string(&Severity::Success).unwrap();
        assert_eq!(json, "\"SUCCESS\"");
        let parsed: Severity = serde_json::from_str("\"error\"").unwrap();
        assert_eq!(parsed, Severity::Error);
        assert!(serde_json::from_str::<Severity>("\"loud\"").is_err());
    }
}
