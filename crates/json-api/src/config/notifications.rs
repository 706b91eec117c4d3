//! Notifications Config

use std::{path::PathBuf, time::Duration};

use clap::Args;
use panggilin_app::{
    context::PushSettings,
    messages::{Messages, MessagesError},
    notifications::{FCM_DEFAULT_TIMEOUT, FCM_LEGACY_ENDPOINT, FcmConfig},
};

/// Push delivery and user-facing text.
#[derive(Debug, Args)]
pub struct NotificationsConfig {
    /// FCM send endpoint
    #[arg(long, env = "FCM_ENDPOINT", default_value = FCM_LEGACY_ENDPOINT)]
    pub fcm_endpoint: String,

    /// FCM server key of the customer app; pushes are only logged when unset
    #[arg(long, env = "FCM_CUSTOMER_SERVER_KEY", hide_env_values = true)]
    pub fcm_customer_server_key: Option<String>,

    /// FCM server key of the provider app; pushes are only logged when unset
    #[arg(long, env = "FCM_PROVIDER_SERVER_KEY", hide_env_values = true)]
    pub fcm_provider_server_key: Option<String>,

    /// Seconds one push may take before it is abandoned
    #[arg(long, env = "FCM_TIMEOUT_SECONDS", default_value_t = FCM_DEFAULT_TIMEOUT.as_secs())]
    pub fcm_timeout_seconds: u64,

    /// JSON file overriding any of the built-in messages
    #[arg(long, env = "MESSAGES_FILE")]
    pub messages_file: Option<PathBuf>,
}

impl NotificationsConfig {
    #[must_use]
    pub fn push_settings(&self) -> PushSettings {
        let fcm = |server_key: Option<&str>| {
            server_key
                .map(str::trim)
                .filter(|key| !key.is_empty())
                .map(|key| FcmConfig {
                    endpoint: self.fcm_endpoint.clone(),
                    server_key: key.to_string(),
                    timeout: Duration::from_secs(self.fcm_timeout_seconds),
                })
        };

        PushSettings {
            customer_app: fcm(self.fcm_customer_server_key.as_deref()),
            provider_app: fcm(self.fcm_provider_server_key.as_deref()),
        }
    }

    /// The message catalog, with overrides from `MESSAGES_FILE` when given.
    ///
    /// # Errors
    ///
    /// Returns an error when the override file cannot be read or parsed.
    pub fn messages(&self) -> Result<Messages, MessagesError> {
        match &self.messages_file {
            Some(path) => Messages::from_json_file(path),
            None => Ok(Messages::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(customer: Option<&str>, provider: Option<&str>) -> NotificationsConfig {
        NotificationsConfig {
            fcm_endpoint: "http://fcm.test/send".to_string(),
            fcm_customer_server_key: customer.map(str::to_string),
            fcm_provider_server_key: provider.map(str::to_string),
            fcm_timeout_seconds: 3,
            messages_file: None,
        }
    }

    #[test]
    fn blank_server_keys_disable_that_app() {
        let push = config(Some("customer-key"), Some("  ")).push_settings();

        let customer = push
            .customer_app
            .map(|fcm| (fcm.endpoint, fcm.server_key, fcm.timeout));

        assert_eq!(
            customer,
            Some((
                "http://fcm.test/send".to_string(),
                "customer-key".to_string(),
                Duration::from_secs(3),
            ))
        );
        assert!(push.provider_app.is_none(), "blank key should disable pushes");
    }

    #[test]
    fn default_catalog_is_used_without_a_file() {
        let messages = config(None, None).messages().ok();

        assert_eq!(messages, Some(Messages::default()));
    }
}
