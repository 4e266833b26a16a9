//! Incoming-webhook notifier
//!
//! Posts `{"text": ...}` to a fixed URL with a hard client timeout.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info, warn};

use super::{NotificationDeliveryError, Notifier};
use crate::config::NotifyConfig;

/// Notifier backed by a Slack-compatible incoming webhook
pub struct WebhookNotifier {
    webhook_url: String,
    http: Client,
    timeout: Duration,
}

impl WebhookNotifier {
    /// Create a new notifier from configuration
    pub fn from_config(config: &NotifyConfig) -> Result<Self, NotificationDeliveryError> {
        debug!(timeout_ms = %config.timeout_ms, "WebhookNotifier::from_config: called");
        let timeout = Duration::from_millis(config.timeout_ms);
        let http = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            webhook_url: config.webhook_url.clone(),
            http,
            timeout,
        })
    }

    /// Send one message, reporting any delivery problem
    pub async fn deliver(&self, message: &str) -> Result<(), NotificationDeliveryError> {
        debug!(message_len = %message.len(), "WebhookNotifier::deliver: called");
        let body = serde_json::json!({ "text": message });

        let response = self
            .http
            .post(&self.webhook_url)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    NotificationDeliveryError::Timeout(self.timeout)
                } else {
                    NotificationDeliveryError::Network(e)
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            debug!(%status, "WebhookNotifier::deliver: non-success status");
            return Err(NotificationDeliveryError::Status(status.as_u16()));
        }

        Ok(())
    }
}

#[async_trait]
impl Notifier for WebhookNotifier {
    async fn notify(&self, message: &str) {
        match self.deliver(message).await {
            Ok(()) => info!("Notification sent"),
            Err(e) => warn!(error = %e, "Error sending notification"),
        }
    }
}
