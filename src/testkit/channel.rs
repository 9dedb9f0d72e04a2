//! Spy channels for fan-out assertions.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::domain::RenderedMessage;
use crate::error::ChannelError;
use crate::port::Channel;

/// Records every message it receives. Clones share the same record.
#[derive(Clone)]
pub struct RecordingChannel {
    name: &'static str,
    messages: Arc<Mutex<Vec<RenderedMessage>>>,
}

impl RecordingChannel {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            messages: Arc::default(),
        }
    }

    pub fn count(&self) -> usize {
        self.messages.lock().len()
    }

    pub fn messages(&self) -> Vec<RenderedMessage> {
        self.messages.lock().clone()
    }
}

impl Default for RecordingChannel {
    fn default() -> Self {
        Self::new("recording")
    }
}

#[async_trait]
impl Channel for RecordingChannel {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn notify(&self, message: &RenderedMessage) -> Result<(), ChannelError> {
        self.messages.lock().push(message.clone());
        Ok(())
    }
}

/// Always fails with [`ChannelError::Other`] carrying `reason`.
pub struct FailingChannel {
    name: &'static str,
    reason: String,
}

impl FailingChannel {
    pub fn new(name: &'static str, reason: impl Into<String>) -> Self {
        Self {
            name,
            reason: reason.into(),
        }
    }
}

#[async_trait]
impl Channel for FailingChannel {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn notify(&self, _message: &RenderedMessage) -> Result<(), ChannelError> {
        Err(ChannelError::Other(self.reason.clone()))
    }
}

/// Sleeps before recording, to observe concurrent delivery.
#[derive(Clone)]
pub struct SlowChannel {
    delay: Duration,
    inner: RecordingChannel,
}

impl SlowChannel {
    pub fn new(name: &'static str, delay: Duration) -> Self {
        Self {
            delay,
            inner: RecordingChannel::new(name),
        }
    }

    pub fn count(&self) -> usize {
        self.inner.count()
    }
}

#[async_trait]
impl Channel for SlowChannel {
    fn name(&self) -> &'static str {
        self.inner.name()
    }

    async fn notify(&self, message: &RenderedMessage) -> Result<(), ChannelError> {
        tokio::time::sleep(self.delay).await;
        self.inner.notify(message).await
    }
}
