//! Firebase Cloud Messaging legacy HTTP client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::notifications::{NotificationPayload, Notifier, NotifierError};

pub const FCM_LEGACY_ENDPOINT: &str = "https://fcm.googleapis.com/fcm/send";

/// Upper bound on one send, connect included.
pub const FCM_DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Clone)]
pub struct FcmConfig {
    /// Send endpoint, normally [`FCM_LEGACY_ENDPOINT`].
    pub endpoint: String,

    /// Server key of the app receiving the pushes.
    pub server_key: String,

    pub timeout: Duration,
}

impl std::fmt::Debug for FcmConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FcmConfig")
            .field("endpoint", &self.endpoint)
            .field("server_key", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct FcmNotifier {
    config: FcmConfig,
    http: Client,
}

impl FcmNotifier {
    /// # Errors
    ///
    /// Returns an error when the HTTP client cannot be built.
    pub fn new(config: FcmConfig) -> Result<Self, NotifierError> {
        let http = Client::builder().timeout(config.timeout).build()?;

        Ok(Self { config, http })
    }
}

#[derive(Debug, Serialize)]
struct FcmMessage<'a> {
    registration_ids: [&'a str; 1],
    data: &'a NotificationPayload,
}

#[derive(Debug, Deserialize)]
struct FcmResponse {
    #[serde(default)]
    failure: u32,

    #[serde(default)]
    results: Vec<FcmResult>,
}

#[derive(Debug, Deserialize)]
struct FcmResult {
    error: Option<String>,
}

#[async_trait]
impl Notifier for FcmNotifier {
    async fn send(
        &self,
        device_token: &str,
        payload: &NotificationPayload,
    ) -> Result<(), NotifierError> {
        let message = FcmMessage {
            registration_ids: [device_token],
            data: payload,
        };

        let response = self
            .http
            .post(&self.config.endpoint)
            .header(
                reqwest::header::AUTHORIZATION,
                format!("key={}", self.config.server_key),
            )
            .json(&message)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();

            return Err(NotifierError::Rejected(format!(
                "send failed with status {status}: {text}"
            )));
        }

        let parsed: FcmResponse = response.json().await?;

        if parsed.failure > 0 {
            let reason = parsed
                .results
                .into_iter()
                .find_map(|result| result.error)
                .unwrap_or_else(|| "unknown".to_string());

            return Err(NotifierError::Rejected(reason));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::net::TcpListener;

    use testresult::TestResult;

    use super::*;

    #[test]
    fn message_targets_one_device_with_data_payload() -> TestResult {
        let payload = NotificationPayload::new("Pesanan dibatalkan.", 42);

        let body = serde_json::to_value(FcmMessage {
            registration_ids: ["device-1"],
            data: &payload,
        })?;

        assert_eq!(
            body,
            serde_json::json!({
                "registration_ids": ["device-1"],
                "data": {"message": "Pesanan dibatalkan.", "order_id": "42"},
            })
        );

        Ok(())
    }

    #[test]
    fn config_debug_hides_server_key() {
        let config = FcmConfig {
            endpoint: FCM_LEGACY_ENDPOINT.to_string(),
            server_key: "AAAA-secret".to_string(),
            timeout: FCM_DEFAULT_TIMEOUT,
        };

        assert!(!format!("{config:?}").contains("AAAA-secret"));
    }

    #[tokio::test]
    async fn silent_push_service_times_out() -> TestResult {
        // Connections land in the backlog but are never answered.
        let listener = TcpListener::bind("127.0.0.1:0")?;

        let notifier = FcmNotifier::new(FcmConfig {
            endpoint: format!("http://{}/fcm/send", listener.local_addr()?),
            server_key: "AAAA-secret".to_string(),
            timeout: Duration::from_millis(200),
        })?;

        let payload = NotificationPayload::new("Pesanan baru.", 7);

        let sent = tokio::time::timeout(
            Duration::from_secs(5),
            notifier.send("device-1", &payload),
        )
        .await?;

        assert!(
            matches!(&sent, Err(NotifierError::Http(error)) if error.is_timeout()),
            "expected a client timeout, got {sent:?}"
        );

        drop(listener);

        Ok(())
    }
}
