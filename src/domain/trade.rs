//! Trade lifecycle records.
//!
//! A [`Trade`] carries the already-computed figures of an executed trade:
//! entry and exit legs, quantity and cost. Both legs are optional because
//! notifications are raised while a trade is still open.
//!
//! # Examples
//!
//! ```
//! use chrono::{Duration, TimeZone, Utc};
//! use rust_decimal_macros::dec;
//! use tradecast::domain::{PositionType, Trade};
//!
//! let opened = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
//! let trade = Trade::new("BTCUSDT", PositionType::Long, "trend")
//!     .with_buy(dec!(100), opened)
//!     .with_sell(dec!(110), opened + Duration::seconds(45));
//!
//! assert!(trade.is_closed());
//! assert_eq!(trade.profit_percent(), Some(dec!(10)));
//! assert_eq!(trade.duration(), Some(Duration::seconds(45)));
//! ```

use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::money::{Amount, Price, Quantity};
use super::types::{PositionType, TradingType, WalletType};

/// Verb describing what a trade notification reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TradeVerb {
    Open,
    Close,
}

impl std::fmt::Display for TradeVerb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Open => "Open",
            Self::Close => "Close",
        })
    }
}

/// A trade as seen by the notifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    pub symbol: String,
    pub position_type: PositionType,
    /// Name of the strategy that owns the trade.
    pub strategy: String,
    #[serde(default)]
    pub quantity: Option<Quantity>,
    #[serde(default)]
    pub cost: Option<Amount>,
    #[serde(default)]
    pub borrow: Option<Amount>,
    #[serde(default)]
    pub wallet: Option<WalletType>,
    #[serde(default)]
    pub trading_type: Option<TradingType>,
    #[serde(default)]
    pub buy_price: Option<Price>,
    #[serde(default)]
    pub buy_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub sell_price: Option<Price>,
    #[serde(default)]
    pub sell_time: Option<DateTime<Utc>>,
}

impl Trade {
    /// Create a trade with no legs filled in.
    pub fn new(
        symbol: impl Into<String>,
        position_type: PositionType,
        strategy: impl Into<String>,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            position_type,
            strategy: strategy.into(),
            quantity: None,
            cost: None,
            borrow: None,
            wallet: None,
            trading_type: None,
            buy_price: None,
            buy_time: None,
            sell_price: None,
            sell_time: None,
        }
    }

    #[must_use]
    pub fn with_buy(mut self, price: Price, time: DateTime<Utc>) -> Self {
        self.buy_price = Some(price);
        self.buy_time = Some(time);
        self
    }

    #[must_use]
    pub fn with_sell(mut self, price: Price, time: DateTime<Utc>) -> Self {
        self.sell_price = Some(price);
        self.sell_time = Some(time);
        self
    }

    #[must_use]
    pub fn with_quantity(mut self, quantity: Quantity) -> Self {
        self.quantity = Some(quantity);
        self
    }

    #[must_use]
    pub fn with_cost(mut self, cost: Amount) -> Self {
        self.cost = Some(cost);
        self
    }

    #[must_use]
    pub fn with_borrow(mut self, borrow: Amount) -> Self {
        self.borrow = Some(borrow);
        self
    }

    #[must_use]
    pub fn with_wallet(mut self, wallet: WalletType) -> Self {
        self.wallet = Some(wallet);
        self
    }

    #[must_use]
    pub fn with_trading_type(mut self, trading_type: TradingType) -> Self {
        self.trading_type = Some(trading_type);
        self
    }

    /// Both legs have executed.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.buy_time.is_some() && self.sell_time.is_some()
    }

    #[must_use]
    pub fn verb(&self) -> TradeVerb {
        if self.is_closed() {
            TradeVerb::Close
        } else {
            TradeVerb::Open
        }
    }

    /// Percentage return of the sell leg over the buy leg.
    ///
    /// `None` unless both prices are known, the buy price is non-zero and
    /// the result fits in a `Decimal`.
    #[must_use]
    pub fn profit_percent(&self) -> Option<Decimal> {
        let buy = self.buy_price?;
        let sell = self.sell_price?;
        if buy.is_zero() {
            return None;
        }
        sell.checked_sub(buy)?
            .checked_mul(Decimal::ONE_HUNDRED)?
            .checked_div(buy)
    }

    /// Time between the two legs.
    ///
    /// Short positions sell before they buy, so the sign is flipped to keep
    /// the duration positive for well-formed trades.
    #[must_use]
    pub fn duration(&self) -> Option<Duration> {
        let elapsed = self.sell_time? - self.buy_time?;
        Some(match self.position_type {
            PositionType::Long => elapsed,
            PositionType::Short => -elapsed,
        })
    }

    /// Gross profit: `quantity * sell - quantity * buy`.
    ///
    /// `None` when a leg is missing or the result overflows.
    #[must_use]
    pub fn gross_profit(&self) -> Option<Amount> {
        let quantity = self.quantity?;
        let sold = quantity.checked_mul(self.sell_price?)?;
        let bought = quantity.checked_mul(self.buy_price?)?;
        sold.checked_sub(bought)
    }
}
