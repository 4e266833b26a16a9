//! Notification delivery error types

use std::time::Duration;
use thiserror::Error;

/// Failure to deliver a message to the webhook
///
/// Never leaves the notifier: it is logged and swallowed.
#[derive(Debug, Error)]
pub enum NotificationDeliveryError {
    #[error("Webhook request timed out after {0:?}")]
    Timeout(Duration),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Webhook returned status {0}")]
    Status(u16),
}
