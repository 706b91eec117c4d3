//! Order Detail Handlers

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use panggilin_app::domain::orders::models::{OrderId, Party};

use crate::{
    errors::ApiError,
    extensions::*,
    orders::{
        errors::into_api_error,
        handlers::{customer_party, provider_party},
        responses::OrderDetailResponse,
    },
    state::State,
};

async fn get_order(
    depot: &Depot,
    party: Party,
    order: OrderId,
) -> Result<OrderDetailResponse, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let detail = state
        .app
        .orders
        .get_order(party, order)
        .await
        .map_err(|error| into_api_error(error, state.errors()))?;

    Ok(detail.into())
}

/// Customer Order Detail Handler
#[endpoint(
    tags("orders"),
    summary = "Customer Order Detail",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Order with items, journey and tracking"),
    ),
)]
pub(crate) async fn customer(
    order_id: PathParam<i64>,
    depot: &mut Depot,
) -> Result<Json<OrderDetailResponse>, ApiError> {
    let order = OrderId::from_i64(order_id.into_inner());

    Ok(Json(get_order(depot, customer_party(depot)?, order).await?))
}

/// Provider Order Detail Handler
#[endpoint(
    tags("orders"),
    summary = "Provider Order Detail",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Order with items, journey and tracking"),
    ),
)]
pub(crate) async fn provider(
    order_id: PathParam<i64>,
    depot: &mut Depot,
) -> Result<Json<OrderDetailResponse>, ApiError> {
    let order = OrderId::from_i64(order_id.into_inner());

    Ok(Json(get_order(depot, provider_party(depot)?, order).await?))
}
