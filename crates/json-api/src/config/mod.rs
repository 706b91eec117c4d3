//! Server configuration module

use clap::Parser;

use crate::config::{
    auth::AuthConfig,
    db::DatabaseConfig,
    notifications::NotificationsConfig,
    observability::{LoggingConfig, RequestLoggingConfig},
    server::ServerRuntimeConfig,
};

pub(crate) mod auth;
pub(crate) mod db;
pub(crate) mod notifications;
pub(crate) mod observability;
pub(crate) mod server;

/// Panggilin JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "panggilin-json", about = "Panggilin JSON API Server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Per-request logging settings.
    #[command(flatten)]
    pub requests: RequestLoggingConfig,

    /// Application database settings.
    #[command(flatten)]
    pub database: DatabaseConfig,

    /// Session token settings.
    #[command(flatten)]
    pub auth: AuthConfig,

    /// Push notification and message catalog settings.
    #[command(flatten)]
    pub notifications: NotificationsConfig,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> String {
        self.server.socket_addr()
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    const REQUIRED: [&str; 5] = [
        "panggilin-json",
        "--database-url",
        "postgres://localhost/panggilin",
        "--session-signing-key",
        "c2VjcmV0LXNpZ25pbmcta2V5",
    ];

    #[test]
    fn defaults_apply_when_only_required_values_are_given() -> TestResult {
        let config = ServerConfig::try_parse_from(REQUIRED)?;

        assert_eq!(config.socket_addr(), "0.0.0.0:8698");
        assert_eq!(config.server.base_path, "api/v1");
        assert_eq!(config.server.shutdown_grace().as_secs(), 10);
        assert_eq!(config.auth.customer_token_ttl_hours, 48);
        assert_eq!(config.auth.provider_token_ttl_hours, 24);
        assert_eq!(config.database.max_connections, 10);
        assert!(config.notifications.fcm_customer_server_key.is_none());

        Ok(())
    }

    #[test]
    fn missing_signing_key_is_an_error() {
        let result = ServerConfig::try_parse_from([
            "panggilin-json",
            "--database-url",
            "postgres://localhost/panggilin",
        ]);

        assert!(result.is_err(), "signing key should be required");
    }
}
