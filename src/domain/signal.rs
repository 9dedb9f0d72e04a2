//! Trading signals emitted by upstream strategies.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::money::Price;
use super::types::{EntryType, PositionType};

/// Strategy confidence attached to a signal.
///
/// Strategies that cannot score a signal report the literal `NA`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Score {
    Value(Decimal),
    NotAvailable,
}

impl Score {
    /// Numeric value, if the strategy produced one.
    #[must_use]
    pub fn value(&self) -> Option<Decimal> {
        match self {
            Self::Value(v) => Some(*v),
            Self::NotAvailable => None,
        }
    }
}

impl From<Decimal> for Score {
    fn from(value: Decimal) -> Self {
        Self::Value(value)
    }
}

impl FromStr for Score {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s == "NA" {
            return Ok(Self::NotAvailable);
        }
        Decimal::from_str(s).map(Self::Value)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(v) => write!(f, "{v}"),
            Self::NotAvailable => f.write_str("NA"),
        }
    }
}

impl Serialize for Score {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Value(v) => Serialize::serialize(v, serializer),
            Self::NotAvailable => serializer.serialize_str("NA"),
        }
    }
}

impl<'de> Deserialize<'de> for Score {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(Decimal),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Number(v) => Ok(Self::Value(v)),
            Raw::Text(text) => text.parse().map_err(|_| {
                serde::de::Error::custom(format!("invalid score \"{text}\""))
            }),
        }
    }
}

/// A trading recommendation produced by a strategy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Signal {
    pub symbol: String,
    pub position_type: PositionType,
    pub entry_type: EntryType,
    /// Name of the strategy that produced the signal.
    pub strategy: String,
    #[serde(default)]
    pub price: Option<Price>,
    #[serde(default)]
    pub score: Option<Score>,
    pub timestamp: DateTime<Utc>,
}

impl Signal {
    /// Create a signal with no price or score.
    pub fn new(
        symbol: impl Into<String>,
        position_type: PositionType,
        entry_type: EntryType,
        strategy: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            position_type,
            entry_type,
            strategy: strategy.into(),
            price: None,
            score: None,
            timestamp,
        }
    }

    #[must_use]
    pub fn with_price(mut self, price: Price) -> Self {
        self.price = Some(price);
        self
    }

    #[must_use]
    pub fn with_score(mut self, score: Score) -> Self {
        self.score = Some(score);
        self
    }
}
