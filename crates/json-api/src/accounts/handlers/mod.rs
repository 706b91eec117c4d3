//! Account Handlers

use panggilin_app::domain::accounts::models::{CustomerAccount, ProviderAccount};

use crate::{
    accounts::responses::{CustomerLoginResponse, ProviderLoginResponse},
    auth::into_api_error,
    errors::ApiError,
    state::State,
};

pub(crate) mod availability;
pub(crate) mod customer_signin;
pub(crate) mod customer_signup;
pub(crate) mod device_token;
pub(crate) mod max_distance;
pub(crate) mod me;
pub(crate) mod profile;
pub(crate) mod provider_signin;
pub(crate) mod social_auth;

/// Attach a session token to an authenticated customer.
async fn customer_login(
    state: &State,
    account: CustomerAccount,
) -> Result<CustomerLoginResponse, ApiError> {
    let issued = state
        .app
        .customer_sessions
        .issue_token(account.id, &account.email)
        .await
        .map_err(|error| into_api_error(error, state.errors()))?;

    Ok(CustomerLoginResponse::new(account, issued))
}

async fn provider_login(
    state: &State,
    account: ProviderAccount,
) -> Result<ProviderLoginResponse, ApiError> {
    let issued = state
        .app
        .provider_sessions
        .issue_token(account.id, &account.email)
        .await
        .map_err(|error| into_api_error(error, state.errors()))?;

    Ok(ProviderLoginResponse::new(account, issued))
}
