//! Device Token Handlers

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use panggilin_app::auth::{Customer, Provider};

use crate::{accounts::errors::into_api_error, errors::ApiError, extensions::*, state::State};

/// Device Token Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct DeviceTokenRequest {
    pub device_token: String,
}

/// Device Token Updated Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct DeviceTokenUpdatedResponse {
    pub success: String,
}

impl DeviceTokenUpdatedResponse {
    fn new(state: &State) -> Self {
        Self {
            success: state.success().device_token_updated.clone(),
        }
    }
}

/// Customer Device Token Handler
#[endpoint(
    tags("accounts"),
    summary = "Update Customer Device Token",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Device token stored"),
    ),
)]
pub(crate) async fn customer(
    json: JsonBody<DeviceTokenRequest>,
    depot: &mut Depot,
) -> Result<Json<DeviceTokenUpdatedResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let customer_id = depot.principal::<Customer>()?;

    state
        .app
        .accounts
        .update_customer_device_token(customer_id, json.into_inner().device_token)
        .await
        .map_err(|error| into_api_error(error, state.errors()))?;

    Ok(Json(DeviceTokenUpdatedResponse::new(state)))
}

/// Provider Device Token Handler
#[endpoint(
    tags("accounts"),
    summary = "Update Provider Device Token",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Device token stored"),
    ),
)]
pub(crate) async fn provider(
    json: JsonBody<DeviceTokenRequest>,
    depot: &mut Depot,
) -> Result<Json<DeviceTokenUpdatedResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let provider_id = depot.principal::<Provider>()?;

    state
        .app
        .accounts
        .update_provider_device_token(provider_id, json.into_inner().device_token)
        .await
        .map_err(|error| into_api_error(error, state.errors()))?;

    Ok(Json(DeviceTokenUpdatedResponse::new(state)))
}
