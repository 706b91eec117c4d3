//! Customer Profile Update Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use panggilin_app::{auth::Customer, domain::accounts::models::CustomerProfileUpdate};

use crate::{
    accounts::{errors::into_api_error, handlers::me::CustomerProfileResponse},
    errors::ApiError,
    extensions::*,
    state::State,
};

/// Profile Update Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProfileUpdateRequest {
    pub full_name: String,

    #[serde(default)]
    pub phone_number: String,

    #[serde(default)]
    pub address: String,
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();

    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

impl From<ProfileUpdateRequest> for CustomerProfileUpdate {
    fn from(request: ProfileUpdateRequest) -> Self {
        CustomerProfileUpdate {
            full_name: request.full_name.trim().to_string(),
            phone_number: optional(&request.phone_number),
            address: optional(&request.address),
        }
    }
}

/// Profile Updated Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProfileUpdatedResponse {
    pub status: String,
    pub data: CustomerProfileResponse,
}

/// Customer Profile Update Handler
///
/// Blank phone number or address clears the stored value.
#[endpoint(
    tags("accounts"),
    summary = "Update Customer Profile",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Profile updated"),
        (status_code = StatusCode::BAD_REQUEST, description = "Blank name or unknown account"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<ProfileUpdateRequest>,
    depot: &mut Depot,
) -> Result<Json<ProfileUpdatedResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let customer_id = depot.principal::<Customer>()?;

    let account = state
        .app
        .accounts
        .update_customer_profile(customer_id, json.into_inner().into())
        .await
        .map_err(|error| into_api_error(error, state.errors()))?;

    Ok(Json(ProfileUpdatedResponse {
        status: state.success().profile_updated.clone(),
        data: account.into(),
    }))
}
