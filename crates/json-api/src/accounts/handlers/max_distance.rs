//! Provider Max Distance Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use panggilin_app::auth::Provider;

use crate::{
    accounts::{errors::into_api_error, responses::ProviderStatusResponse},
    errors::ApiError,
    extensions::*,
    state::State,
};

/// Max Distance Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct MaxDistanceRequest {
    /// Kilometres
    pub max_distance: i64,
}

/// Provider Max Distance Handler
#[endpoint(
    tags("accounts"),
    summary = "Update Provider Max Distance",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Radius updated"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<MaxDistanceRequest>,
    depot: &mut Depot,
) -> Result<Json<ProviderStatusResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let provider = depot.principal::<Provider>()?;

    let account = state
        .app
        .accounts
        .set_provider_max_distance(provider, json.into_inner().max_distance)
        .await
        .map_err(|error| into_api_error(error, state.errors()))?;

    Ok(Json(account.into()))
}
