//! Channel that posts notifications to an HTTP webhook.
//!
//! The payload carries every representation of the message plus a `text`
//! field, so Slack-style incoming webhooks display it without extra setup.

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use tracing::{debug, instrument};

use crate::domain::{RenderedMessage, Severity};
use crate::error::ChannelError;
use crate::port::Channel;

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Webhook endpoint settings.
#[derive(Debug, Clone)]
pub struct WebhookConfig {
    pub url: String,
    pub timeout: Duration,
}

impl WebhookConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

#[derive(Serialize)]
struct WebhookPayload<'a> {
    text: String,
    severity: Severity,
    subject: &'a str,
    body: &'a str,
    raw: &'a str,
    html: &'a str,
}

impl<'a> From<&'a RenderedMessage> for WebhookPayload<'a> {
    fn from(message: &'a RenderedMessage) -> Self {
        Self {
            text: format!("{}\n{}", message.subject, message.raw),
            severity: message.severity,
            subject: &message.subject,
            body: &message.body,
            raw: &message.raw,
            html: &message.html,
        }
    }
}

/// Posts each message as JSON to a fixed URL.
pub struct WebhookChannel {
    client: reqwest::Client,
    url: String,
}

impl WebhookChannel {
    /// Build the channel and its HTTP client.
    pub fn new(config: WebhookConfig) -> Result<Self, ChannelError> {
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            client,
            url: config.url,
        })
    }
}

#[async_trait]
impl Channel for WebhookChannel {
    fn name(&self) -> &'static str {
        "webhook"
    }

    #[instrument(skip_all, fields(severity = %message.severity))]
    async fn notify(&self, message: &RenderedMessage) -> Result<(), ChannelError> {
        let response = self
            .client
            .post(&self.url)
            .json(&WebhookPayload::from(message))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ChannelError::Status {
                status: status.as_u16(),
                body,
            });
        }

        debug!(status = status.as_u16(), "Webhook accepted notification");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn message() -> RenderedMessage {
        RenderedMessage {
            severity: Severity::Warn,
            subject: "WARN Notification.".to_string(),
            body: "WARN Notification.\n\nFeed stale".to_string(),
            raw: "Feed stale. Notification.".to_string(),
            html: "<b>WARN</b> Notification.".to_string(),
        }
    }

    #[tokio::test]
    async fn posts_all_representations() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/hook"))
            .and(body_partial_json(json!({
                "text": "WARN Notification.\nFeed stale. Notification.",
                "severity": "WARN",
                "subject": "WARN Notification.",
                "raw": "Feed stale. Notification.",
            })))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let channel = WebhookChannel::new(WebhookConfig::new(format!("{}/hook", server.uri())))
            .unwrap();

        assert!(channel.notify(&message()).await.is_ok());
    }

    #[tokio::test]
    async fn non_success_status_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let channel = WebhookChannel::new(WebhookConfig::new(server.uri())).unwrap();
        let err = channel.notify(&message()).await.unwrap_err();

        match err {
            ChannelError::Status { status, body } => {
                assert_eq!(status, 500);
                assert_eq!(body, "boom");
            }
            other => panic!("expected status error, got {other}"),
        }
    }

    #[tokio::test]
    async fn slow_endpoint_times_out() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
            .mount(&server)
            .await;

        let config = WebhookConfig {
            url: server.uri(),
            timeout: Duration::from_millis(200),
        };
        let channel = WebhookChannel::new(config).unwrap();
        let err = channel.notify(&message()).await.unwrap_err();

        match err {
            ChannelError::Http(e) => assert!(e.is_timeout(), "expected timeout, got {e}"),
            other => panic!("expected HTTP error, got {other}"),
        }
    }
}
