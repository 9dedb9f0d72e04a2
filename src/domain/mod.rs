//! Transport-agnostic domain types: severities, signals, trades and the
//! renderer's input and output.

mod event;
mod message;
mod money;
mod severity;
mod signal;
mod trade;
mod types;

pub use event::NotificationEvent;
pub use message::RenderedMessage;
pub use money::{Amount, Price, Quantity};
pub use severity::{ParseSeverityError, Severity};
pub use signal::{Score, Signal};
pub use trade::{Trade, TradeVerb};
pub use types::{EntryType, EventSource, PositionType, TradingType, WalletType};
