//! Channel that writes notifications to the tracing log.

use async_trait::async_trait;
use tracing::{debug, error, info, warn};

use crate::domain::{RenderedMessage, Severity};
use crate::error::ChannelError;
use crate::port::Channel;

/// Logs the subject and compact body at a level matching the severity.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogChannel;

#[async_trait]
impl Channel for LogChannel {
    fn name(&self) -> &'static str {
        "log"
    }

    async fn notify(&self, message: &RenderedMessage) -> Result<(), ChannelError> {
        let subject = message.subject.as_str();
        let raw = message.raw.as_str();
        match message.severity {
            Severity::Debug => debug!(subject, raw, "Notification"),
            Severity::Info | Severity::Success => info!(subject, raw, "Notification"),
            Severity::Warn => warn!(subject, raw, "Notification"),
            Severity::Error => error!(subject, raw, "Notification"),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn log_channel_never_fails() {
        for severity in Severity::ALL {
            let message = RenderedMessage {
                severity,
                subject: format!("{severity} Notification."),
                body: String::new(),
                raw: "Notification.".to_string(),
                html: String::new(),
            };
            assert!(LogChannel.notify(&message).await.is_ok());
        }
        assert_eq!(LogChannel.name(), "log");
    }
}
