//! Auth Config

use std::sync::Arc;

use clap::Args;
use jiff::SignedDuration;
use panggilin_app::{
    auth::{SigningKey, TokenError},
    context::SessionSettings,
};

/// Session token settings.
#[derive(Debug, Args)]
pub struct AuthConfig {
    /// Base64 HMAC key session tokens are signed with
    #[arg(long, env = "SESSION_SIGNING_KEY", hide_env_values = true)]
    pub session_signing_key: String,

    /// Lifetime of customer tokens, in hours
    #[arg(long, env = "CUSTOMER_TOKEN_TTL_HOURS", default_value_t = 48)]
    pub customer_token_ttl_hours: i64,

    /// Lifetime of provider tokens, in hours
    #[arg(long, env = "PROVIDER_TOKEN_TTL_HOURS", default_value_t = 24)]
    pub provider_token_ttl_hours: i64,
}

impl AuthConfig {
    /// Decode the signing key and assemble session settings.
    ///
    /// # Errors
    ///
    /// Returns an error when the signing key is not usable.
    pub fn session_settings(&self) -> Result<SessionSettings, TokenError> {
        Ok(SessionSettings {
            key: Arc::new(SigningKey::from_base64(&self.session_signing_key)?),
            customer_ttl: SignedDuration::from_hours(self.customer_token_ttl_hours),
            provider_ttl: SignedDuration::from_hours(self.provider_token_ttl_hours),
        })
    }
}
