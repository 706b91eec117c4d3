//! Account Models

use std::{fmt, str::FromStr};

use jiff::Timestamp;

use crate::auth::{Customer, PrincipalId, Provider};

/// Customer account id.
pub type CustomerId = PrincipalId<Customer>;

/// Provider account id.
pub type ProviderId = PrincipalId<Provider>;

/// How a customer proves who they are at login.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    /// Email and password.
    Email,

    /// Email only. The client asserts the identity; nothing is verified.
    Social,
}

impl AuthMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Social => "social",
        }
    }
}

impl fmt::Display for AuthMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownAuthMode;

impl fmt::Display for UnknownAuthMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unknown auth mode")
    }
}

impl std::error::Error for UnknownAuthMode {}

impl FromStr for AuthMode {
    type Err = UnknownAuthMode;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "email" => Ok(Self::Email),
            "social" => Ok(Self::Social),
            _ => Err(UnknownAuthMode),
        }
    }
}

/// Customer Account
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerAccount {
    pub id: CustomerId,
    pub email: String,
    pub auth_mode: AuthMode,
    pub full_name: String,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub device_token: Option<String>,
    pub joined_at: Timestamp,
}

/// Provider Account
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderAccount {
    pub id: ProviderId,
    pub email: String,
    pub full_name: String,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub is_active: bool,
    pub max_distance_km: i64,
    pub device_token: Option<String>,
    pub joined_at: Timestamp,
}

/// What a customer presents at login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CustomerCredential {
    Password(String),
    Social,
}

/// Customer login attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerLogin {
    pub email: String,
    pub credential: CustomerCredential,
    pub device_token: Option<String>,
}

/// New email/password customer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCustomer {
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub phone_number: Option<String>,
    pub device_token: Option<String>,
}

/// Contact details a customer edits on their profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerProfileUpdate {
    pub full_name: String,
    pub phone_number: Option<String>,
    pub address: Option<String>,
}

/// Social login, which signs the customer up on first use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialLogin {
    pub email: String,
    pub full_name: String,
    pub device_token: Option<String>,
}

/// Provider login attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderLogin {
    pub email: String,
    pub password: String,
    pub device_token: Option<String>,
}

/// New Provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProvider {
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub max_distance_km: i64,
}

/// Device tokens the apps send when push is not set up yet.
pub(crate) const PLACEHOLDER_DEVICE_TOKEN: &str = "-";

/// A device token worth storing or sending to, if any.
pub(crate) fn usable_device_token(token: Option<&str>) -> Option<&str> {
    token
        .map(str::trim)
        .filter(|token| !token.is_empty() && *token != PLACEHOLDER_DEVICE_TOKEN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_mode_parses_known_values() {
        assert_eq!("email".parse::<AuthMode>(), Ok(AuthMode::Email));
        assert_eq!("social".parse::<AuthMode>(), Ok(AuthMode::Social));
        assert_eq!("google".parse::<AuthMode>(), Err(UnknownAuthMode));
    }

    #[test]
    fn placeholder_and_blank_device_tokens_are_unusable() {
        assert_eq!(usable_device_token(None), None);
        assert_eq!(usable_device_token(Some("")), None);
        assert_eq!(usable_device_token(Some("  ")), None);
        assert_eq!(usable_device_token(Some("-")), None);
        assert_eq!(usable_device_token(Some("fcm-abc")), Some("fcm-abc"));
    }
}
