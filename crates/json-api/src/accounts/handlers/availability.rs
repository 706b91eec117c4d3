//! Provider Availability Handlers

use std::sync::Arc;

use salvo::prelude::*;

use panggilin_app::auth::Provider;

use crate::{
    accounts::{errors::into_api_error, responses::ProviderStatusResponse},
    errors::ApiError,
    extensions::*,
    state::State,
};

async fn set_active(depot: &Depot, active: bool) -> Result<ProviderStatusResponse, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let provider = depot.principal::<Provider>()?;

    let account = state
        .app
        .accounts
        .set_provider_active(provider, active)
        .await
        .map_err(|error| into_api_error(error, state.errors()))?;

    tracing::info!(provider_id = %provider, active, "provider availability changed");

    Ok(account.into())
}

/// Provider Active Handler
///
/// Opens the caller for new orders.
#[endpoint(
    tags("accounts"),
    summary = "Activate Provider",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Provider active"),
    ),
)]
pub(crate) async fn activate(depot: &mut Depot) -> Result<Json<ProviderStatusResponse>, ApiError> {
    Ok(Json(set_active(depot, true).await?))
}

/// Provider Inactive Handler
#[endpoint(
    tags("accounts"),
    summary = "Deactivate Provider",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Provider inactive"),
    ),
)]
pub(crate) async fn deactivate(
    depot: &mut Depot,
) -> Result<Json<ProviderStatusResponse>, ApiError> {
    Ok(Json(set_active(depot, false).await?))
}
