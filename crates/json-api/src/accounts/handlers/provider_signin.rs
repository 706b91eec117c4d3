//! Provider Sign-in Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use panggilin_app::domain::accounts::models::ProviderLogin;

use crate::{
    accounts::{errors::into_api_error, handlers::provider_login, responses::ProviderLoginResponse},
    errors::ApiError,
    extensions::*,
    state::State,
};

/// Provider Sign-in Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProviderSignInRequest {
    pub email: String,
    pub password: String,

    #[serde(default)]
    pub device_token: Option<String>,
}

impl From<ProviderSignInRequest> for ProviderLogin {
    fn from(request: ProviderSignInRequest) -> Self {
        ProviderLogin {
            email: request.email,
            password: request.password,
            device_token: request.device_token,
        }
    }
}

/// Provider Sign-in Handler
#[endpoint(
    tags("accounts"),
    summary = "Provider Sign-in",
    responses(
        (status_code = StatusCode::OK, description = "Logged in"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<ProviderSignInRequest>,
    depot: &mut Depot,
) -> Result<Json<ProviderLoginResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let account = state
        .app
        .accounts
        .authenticate_provider(json.into_inner().into())
        .await
        .map_err(|error| into_api_error(error, state.errors()))?;

    Ok(Json(provider_login(state, account).await?))
}
