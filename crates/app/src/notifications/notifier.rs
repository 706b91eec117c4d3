//! Notifier seam.

use async_trait::async_trait;
use mockall::automock;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

/// Data delivered to the app alongside a push.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotificationPayload {
    pub message: String,
    pub order_id: String,
}

impl NotificationPayload {
    #[must_use]
    pub fn new(message: impl Into<String>, order_id: i64) -> Self {
        Self {
            message: message.into(),
            order_id: order_id.to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum NotifierError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("push service rejected the message: {0}")]
    Rejected(String),
}

/// Sends a push to one device.
#[automock]
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(
        &self,
        device_token: &str,
        payload: &NotificationPayload,
    ) -> Result<(), NotifierError>;
}

/// Keeps the last four characters of a device token.
fn redact(device_token: &str) -> String {
    let skipped = device_token.chars().count().saturating_sub(4);
    let tail: String = device_token.chars().skip(skipped).collect();

    format!("***{tail}")
}

/// Notifier used when no push credentials are configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn send(
        &self,
        device_token: &str,
        payload: &NotificationPayload,
    ) -> Result<(), NotifierError> {
        debug!(
            device_token = %redact(device_token),
            order_id = %payload.order_id,
            message = %payload.message,
            "push delivery disabled, dropping notification"
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redacted_tokens_keep_only_their_tail() {
        assert_eq!(redact("fcm-registration-token-abcd"), "***abcd");
        assert_eq!(redact("ab"), "***ab");
        assert_eq!(redact(""), "***");
    }
}
