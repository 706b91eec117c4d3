//! Social Auth Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use panggilin_app::domain::accounts::models::SocialLogin;

use crate::{
    accounts::{errors::into_api_error, handlers::customer_login, responses::CustomerLoginResponse},
    errors::ApiError,
    extensions::*,
    state::State,
};

/// Social Auth Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct SocialAuthRequest {
    pub email: String,

    /// Used only when the account is created
    #[serde(default)]
    pub full_name: String,

    #[serde(default)]
    pub device_token: Option<String>,
}

impl From<SocialAuthRequest> for SocialLogin {
    fn from(request: SocialAuthRequest) -> Self {
        SocialLogin {
            email: request.email,
            full_name: request.full_name,
            device_token: request.device_token,
        }
    }
}

/// Social Auth Handler
///
/// The email is taken on trust from the client app. Unknown emails are
/// signed up first.
#[endpoint(
    tags("accounts"),
    summary = "Customer Social Auth",
    responses(
        (status_code = StatusCode::OK, description = "Logged in"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<SocialAuthRequest>,
    depot: &mut Depot,
) -> Result<Json<CustomerLoginResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let account = state
        .app
        .accounts
        .authenticate_social(json.into_inner().into())
        .await
        .map_err(|error| into_api_error(error, state.errors()))?;

    Ok(Json(customer_login(state, account).await?))
}
