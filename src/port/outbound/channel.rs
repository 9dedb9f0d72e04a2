//! Notification channel port.
//!
//! A [`Channel`] delivers a [`RenderedMessage`] over one transport (log,
//! webhook, Telegram). The [`ChannelRegistry`] owns every configured channel
//! and broadcasts to all of them behind a severity gate.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use futures_util::stream::{FuturesUnordered, StreamExt};
use parking_lot::RwLock;
use tracing::{debug, error};

use crate::domain::{RenderedMessage, Severity};
use crate::error::{ChannelError, Error, Result};

/// A transport capable of delivering rendered messages.
///
/// # Implementation Notes
///
/// - Implementations must be thread-safe (`Send + Sync`)
/// - `notify` resolves once the transport has finished its I/O; retries,
///   if any, belong to the implementation
#[async_trait]
pub trait Channel: Send + Sync {
    /// Short, stable name used in logs and errors.
    fn name(&self) -> &'static str;

    /// Deliver one message.
    async fn notify(&self, message: &RenderedMessage) -> std::result::Result<(), ChannelError>;
}

/// Minimum severity a message needs to be delivered.
///
/// Cloned handles share the same value, so the gate can be moved at runtime
/// and the registry sees the change on its next broadcast.
#[derive(Clone)]
pub struct DeliveryThreshold {
    minimum: Arc<RwLock<Severity>>,
}

impl DeliveryThreshold {
    #[must_use]
    pub fn new(minimum: Severity) -> Self {
        Self {
            minimum: Arc::new(RwLock::new(minimum)),
        }
    }

    #[must_use]
    pub fn get(&self) -> Severity {
        *self.minimum.read()
    }

    pub fn set(&self, minimum: Severity) {
        *self.minimum.write() = minimum;
    }

    /// True if a message of `severity` passes the gate.
    #[must_use]
    pub fn admits(&self, severity: Severity) -> bool {
        severity >= self.get()
    }
}

impl Default for DeliveryThreshold {
    fn default() -> Self {
        Self::new(Severity::default())
    }
}

impl fmt::Debug for DeliveryThreshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("DeliveryThreshold").field(&self.get()).finish()
    }
}

/// Registry of channels (composite pattern).
///
/// Built once at startup; the channel list is read-only afterwards.
pub struct ChannelRegistry {
    channels: Vec<Box<dyn Channel>>,
    threshold: DeliveryThreshold,
}

impl ChannelRegistry {
    /// Create an empty registry gated by `threshold`.
    #[must_use]
    pub fn new(threshold: DeliveryThreshold) -> Self {
        Self {
            channels: vec![],
            threshold,
        }
    }

    /// Register a channel. Delivery logs follow registration order.
    pub fn register(&mut self, channel: Box<dyn Channel>) {
        self.channels.push(channel);
    }

    /// Broadcast `message` to every channel.
    ///
    /// Messages below the threshold return `Ok(())` without touching any
    /// channel. Otherwise all channels run concurrently and this resolves
    /// once every one of them has finished. The first failure to complete
    /// is returned; later failures are dropped.
    pub async fn notify_all(&self, message: &RenderedMessage) -> Result<()> {
        let minimum = self.threshold.get();
        if message.severity < minimum {
            debug!(
                severity = %message.severity,
                minimum = %minimum,
                "Notification below threshold, skipped"
            );
            return Ok(());
        }

        let mut pending: FuturesUnordered<_> = self
            .channels
            .iter()
            .map(|channel| async move { (channel.name(), channel.notify(message).await) })
            .collect();

        let mut failure: Option<Error> = None;
        while let Some((channel, result)) = pending.next().await {
            match result {
                Ok(()) => debug!(channel, "Notification delivered"),
                Err(source) if failure.is_none() => {
                    failure = Some(Error::Delivery { channel, source });
                }
                Err(_) => debug!(channel, "Further channel failure ignored"),
            }
        }

        match failure {
            Some(err) => {
                error!(error = %err, subject = %message.subject, "Notification fan-out failed");
                Err(err)
            }
            None => Ok(()),
        }
    }

    /// The gate shared with configuration.
    #[must_use]
    pub fn threshold(&self) -> &DeliveryThreshold {
        &self.threshold
    }

    /// Names of registered channels in registration order.
    #[must_use]
    pub fn channel_names(&self) -> Vec<&'static str> {
        self.channels.iter().map(|c| c.name()).collect()
    }

    /// Number of registered channels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.channels.len()
    }

    /// Check if registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }
}

impl Default for ChannelRegistry {
    fn default() -> Self {
        Self::new(DeliveryThreshold::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingChannel {
        count: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl Channel for CountingChannel {
        fn name(&self) -> &'static str {
            "counting"
        }

        async fn notify(&self, _message: &RenderedMessage) -> std::result::Result<(), ChannelError> {
            self.count.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    fn message(severity: Severity) -> RenderedMessage {
        RenderedMessage {
            severity,
            subject: format!("{severity} Notification."),
            body: String::new(),
            raw: String::new(),
            html: String::new(),
        }
    }

    fn registry_with(count: &Arc<AtomicUsize>, minimum: Severity) -> ChannelRegistry {
        let mut registry = ChannelRegistry::new(DeliveryThreshold::new(minimum));
        for _ in 0..2 {
            registry.register(Box::new(CountingChannel {
                count: count.clone(),
            }));
        }
        registry
    }

    #[tokio::test]
    async fn test_registry_notify_all() {
        let count = Arc::new(AtomicUsize::new(0));
        let registry = registry_with(&count, Severity::Info);

        registry.notify_all(&message(Severity::Info)).await.unwrap();

        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_registry_skips_below_threshold() {
        let count = Arc::new(AtomicUsize::new(0));
        let registry = registry_with(&count, Severity::Warn);

        registry.notify_all(&message(Severity::Success)).await.unwrap();

        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_threshold_read_at_call_time() {
        let count = Arc::new(AtomicUsize::new(0));
        let registry = registry_with(&count, Severity::Error);

        registry.notify_all(&message(Severity::Warn)).await.unwrap();
        assert_eq!(count.load(Ordering::SeqCst), 0);

        registry.threshold().set(Severity::Debug);
        registry.notify_all(&message(Severity::Warn)).await.unwrap();
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_empty_registry_is_a_no_op() {
        let registry = ChannelRegistry::default();
        assert!(registry.notify_all(&message(Severity::Error)).await.is_ok());
    }

    #[test]
    fn test_registry_len_and_is_empty() {
        let mut registry = ChannelRegistry::default();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);

        registry.register(Box::new(CountingChannel {
            count: Arc::new(AtomicUsize::new(0)),
        }));
        assert!(!registry.is_empty());
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.channel_names(), vec!["counting"]);
    }

    #[test]
    fn test_threshold_admits() {
        let threshold = DeliveryThreshold::new(Severity::Success);
        assert!(!threshold.admits(Severity::Info));
        assert!(threshold.admits(Severity::Success));
        assert!(threshold.admits(Severity::Error));

        let shared = threshold.clone();
        shared.set(Severity::Error);
        assert_eq!(threshold.get(), Severity::Error);
    }
}
