//! Customer Sign-up Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use panggilin_app::domain::accounts::models::NewCustomer;

use crate::{
    accounts::{errors::into_api_error, handlers::customer_login, responses::CustomerLoginResponse},
    errors::ApiError,
    extensions::*,
    state::State,
};

/// Customer Sign-up Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CustomerSignUpRequest {
    pub email: String,
    pub password: String,
    pub full_name: String,

    #[serde(default)]
    pub phone_number: Option<String>,

    #[serde(default)]
    pub device_token: Option<String>,
}

impl From<CustomerSignUpRequest> for NewCustomer {
    fn from(request: CustomerSignUpRequest) -> Self {
        NewCustomer {
            email: request.email,
            password: request.password,
            full_name: request.full_name,
            phone_number: request.phone_number,
            device_token: request.device_token,
        }
    }
}

/// Customer Sign-up Handler
///
/// Registers the customer and logs them straight in.
#[endpoint(
    tags("accounts"),
    summary = "Customer Sign-up",
    responses(
        (status_code = StatusCode::OK, description = "Signed up and logged in"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CustomerSignUpRequest>,
    depot: &mut Depot,
) -> Result<Json<CustomerLoginResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let account = state
        .app
        .accounts
        .sign_up_customer(json.into_inner().into())
        .await
        .map_err(|error| into_api_error(error, state.errors()))?;

    tracing::info!(customer_id = %account.id, "customer signed up");

    Ok(Json(customer_login(state, account).await?))
}
