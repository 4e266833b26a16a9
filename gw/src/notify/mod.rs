//! Notification module
//!
//! Formats run results and delivers them to a chat webhook.

use async_trait::async_trait;

mod error;
pub mod message;
mod webhook;

pub use error::NotificationDeliveryError;
pub use message::{FAILURE_PREFIX, SUCCESS_HEADER, render};
pub use webhook::WebhookNotifier;

/// Best-effort message delivery
///
/// `notify` never fails from the caller's point of view; implementations log
/// delivery problems and return normally.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, message: &str);
}
