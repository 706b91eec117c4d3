//! Account response bodies shared by several routes.

use panggilin_app::{
    auth::IssuedToken,
    domain::accounts::models::{CustomerAccount, ProviderAccount},
};
use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

/// Bearer token handed out at login
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct AuthTokenResponse {
    pub token: String,

    /// Expiry as unix seconds
    pub expired_date: i64,
}

impl From<IssuedToken> for AuthTokenResponse {
    fn from(issued: IssuedToken) -> Self {
        Self {
            token: issued.token,
            expired_date: issued.expires_at.as_second(),
        }
    }
}

/// Logged-in customer
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CustomerLoginResponse {
    pub id: i64,
    pub full_name: String,
    pub email: String,
    pub phone_number: String,

    /// `email` or `social`
    pub auth_mode: String,
    pub auth_token: AuthTokenResponse,
}

impl CustomerLoginResponse {
    pub(crate) fn new(account: CustomerAccount, issued: IssuedToken) -> Self {
        Self {
            id: account.id.into_i64(),
            full_name: account.full_name,
            email: account.email,
            phone_number: account.phone_number.unwrap_or_default(),
            auth_mode: account.auth_mode.to_string(),
            auth_token: issued.into(),
        }
    }
}

/// Logged-in provider
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProviderLoginResponse {
    pub id: i64,
    pub full_name: String,
    pub email: String,
    pub phone_number: String,

    /// Service radius in kilometres
    pub max_distance: i64,
    pub auth_token: AuthTokenResponse,
}

impl ProviderLoginResponse {
    pub(crate) fn new(account: ProviderAccount, issued: IssuedToken) -> Self {
        Self {
            id: account.id.into_i64(),
            full_name: account.full_name,
            email: account.email,
            phone_number: account.phone_number.unwrap_or_default(),
            max_distance: account.max_distance_km,
            auth_token: issued.into(),
        }
    }
}

/// Provider availability after a change
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProviderStatusResponse {
    pub id: i64,
    pub is_active: bool,
    pub max_distance: i64,
}

impl From<ProviderAccount> for ProviderStatusResponse {
    fn from(account: ProviderAccount) -> Self {
        Self {
            id: account.id.into_i64(),
            is_active: account.is_active,
            max_distance: account.max_distance_km,
        }
    }
}
