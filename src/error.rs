use thiserror::Error;

use crate::domain::ParseSeverityError;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("invalid value for min_level: {0}")]
    UnknownSeverity(#[from] ParseSeverityError),

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Failure reported by a single notification channel.
#[derive(Error, Debug)]
pub enum ChannelError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Telegram error: {0}")]
    Telegram(String),

    #[error("{0}")]
    Other(String),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("delivery via {channel} failed: {source}")]
    Delivery {
        channel: &'static str,
        #[source]
        source: ChannelError,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Name of the channel that failed, for delivery errors.
    #[must_use]
    pub fn channel(&self) -> Option<&'static str> {
        match self {
            Self::Delivery { channel, .. } => Some(*channel),
            _ => None,
        }
    }
}
