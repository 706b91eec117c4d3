//! Customer Profile Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use panggilin_app::{auth::Customer, domain::accounts::models::CustomerAccount};

use crate::{accounts::errors::into_api_error, errors::ApiError, extensions::*, state::State};

/// Customer Profile Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CustomerProfileResponse {
    pub id: i64,
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub address: String,
    pub auth_mode: String,

    /// Unix seconds
    pub join_date: i64,
}

impl From<CustomerAccount> for CustomerProfileResponse {
    fn from(account: CustomerAccount) -> Self {
        Self {
            id: account.id.into_i64(),
            full_name: account.full_name,
            email: account.email,
            phone_number: account.phone_number.unwrap_or_default(),
            address: account.address.unwrap_or_default(),
            auth_mode: account.auth_mode.to_string(),
            join_date: account.joined_at.as_second(),
        }
    }
}

/// Customer Profile Handler
#[endpoint(
    tags("accounts"),
    summary = "Customer Profile",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Profile of the caller"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<CustomerProfileResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let customer = depot.principal::<Customer>()?;

    let account = state
        .app
        .accounts
        .get_customer(customer)
        .await
        .map_err(|error| into_api_error(error, state.errors()))?;

    Ok(Json(account.into()))
}
