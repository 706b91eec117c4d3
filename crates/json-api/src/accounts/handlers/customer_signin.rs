//! Customer Sign-in Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use panggilin_app::domain::accounts::models::{AuthMode, CustomerCredential, CustomerLogin};

use crate::{
    accounts::{errors::into_api_error, handlers::customer_login, responses::CustomerLoginResponse},
    errors::ApiError,
    extensions::*,
    state::State,
};

/// Customer Sign-in Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CustomerSignInRequest {
    pub email: String,

    /// Required unless `auth_mode` is `social`
    #[serde(default)]
    pub password: Option<String>,

    /// `email` (default) or `social`
    #[serde(default)]
    pub auth_mode: Option<String>,

    #[serde(default)]
    pub device_token: Option<String>,
}

impl CustomerSignInRequest {
    fn into_login(self) -> Option<CustomerLogin> {
        let mode = match self.auth_mode.as_deref() {
            None | Some("") => AuthMode::Email,
            Some(mode) => mode.parse().ok()?,
        };

        let credential = match mode {
            AuthMode::Email => CustomerCredential::Password(self.password?),
            AuthMode::Social => CustomerCredential::Social,
        };

        Some(CustomerLogin {
            email: self.email,
            credential,
            device_token: self.device_token,
        })
    }
}

/// Customer Sign-in Handler
#[endpoint(
    tags("accounts"),
    summary = "Customer Sign-in",
    responses(
        (status_code = StatusCode::OK, description = "Logged in"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CustomerSignInRequest>,
    depot: &mut Depot,
) -> Result<Json<CustomerLoginResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let login = json
        .into_inner()
        .into_login()
        .ok_or_else(|| ApiError::bad_request(&state.errors().invalid_request))?;

    let account = state
        .app
        .accounts
        .authenticate_customer(login)
        .await
        .map_err(|error| into_api_error(error, state.errors()))?;

    Ok(Json(customer_login(state, account).await?))
}
