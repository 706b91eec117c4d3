//! List Ratings Handlers

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use panggilin_app::{auth::Provider, domain::accounts::models::ProviderId};

use crate::{
    errors::ApiError,
    extensions::*,
    ratings::{errors::into_api_error, responses::ProviderRatingsResponse},
    state::State,
};

async fn list_ratings(
    depot: &Depot,
    provider: ProviderId,
) -> Result<ProviderRatingsResponse, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let ratings = state
        .app
        .ratings
        .list_ratings(provider)
        .await
        .map_err(|error| into_api_error(error, state.errors()))?;

    Ok(ratings.into())
}

/// Provider Ratings Handler
///
/// Customers look up any provider's ratings.
#[endpoint(
    tags("ratings"),
    summary = "Get Provider Ratings",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Ratings with count and average"),
    ),
)]
pub(crate) async fn for_provider(
    provider_id: PathParam<i64>,
    depot: &mut Depot,
) -> Result<Json<ProviderRatingsResponse>, ApiError> {
    let provider = ProviderId::from_i64(provider_id.into_inner());

    Ok(Json(list_ratings(depot, provider).await?))
}

/// Own Ratings Handler
#[endpoint(
    tags("ratings"),
    summary = "Get Own Ratings",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Ratings with count and average"),
    ),
)]
pub(crate) async fn mine(depot: &mut Depot) -> Result<Json<ProviderRatingsResponse>, ApiError> {
    let provider = depot.principal::<Provider>()?;

    Ok(Json(list_ratings(depot, provider).await?))
}
