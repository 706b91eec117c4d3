//! Provider Quick Info Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use panggilin_app::{
    auth::Provider,
    domain::orders::models::{Party, StatusFilter},
};

use crate::{
    errors::ApiError,
    extensions::*,
    orders::errors::into_api_error,
    ratings::errors::into_api_error as into_ratings_api_error,
    state::State,
};

/// Quick Info Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct QuickInfoResponse {
    pub count_order: usize,
    pub count_review: usize,
}

/// Provider Quick Info Handler
///
/// Dashboard counters for the calling provider.
#[endpoint(
    tags("orders"),
    summary = "Provider Quick Info",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Order and review counts"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<QuickInfoResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let provider = depot.principal::<Provider>()?;

    let orders = state
        .app
        .orders
        .list_orders(Party::Provider(provider), StatusFilter::default())
        .await
        .map_err(|error| into_api_error(error, state.errors()))?;

    let ratings = state
        .app
        .ratings
        .list_ratings(provider)
        .await
        .map_err(|error| into_ratings_api_error(error, state.errors()))?;

    Ok(Json(QuickInfoResponse {
        count_order: orders.len(),
        count_review: ratings.count(),
    }))
}
