//! Cancel Order Handlers

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use panggilin_app::domain::orders::models::{CancelOrder, JourneyEventId, OrderId, Party};

use crate::{
    errors::ApiError,
    extensions::*,
    orders::{
        errors::into_api_error,
        handlers::{customer_party, provider_party},
    },
    state::State,
};

/// Cancel Order Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CancelOrderRequest {
    pub order_id: i64,

    /// Journey event the cancellation belongs to, if any
    #[serde(default)]
    pub journey_id: Option<i64>,

    #[serde(default)]
    pub message: String,
}

impl From<CancelOrderRequest> for CancelOrder {
    fn from(request: CancelOrderRequest) -> Self {
        CancelOrder {
            order_id: OrderId::from_i64(request.order_id),
            message: request.message,
            journey_event_id: request.journey_id.map(JourneyEventId::from_i64),
        }
    }
}

/// Order Canceled Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderCanceledResponse {
    pub success: String,
}

async fn cancel_order(
    depot: &Depot,
    party: Party,
    request: CancelOrderRequest,
) -> Result<OrderCanceledResponse, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    tracing::Span::current().record("order_id", request.order_id);

    state
        .app
        .orders
        .cancel_order(party, request.into())
        .await
        .map_err(|error| into_api_error(error, state.errors()))?;

    Ok(OrderCanceledResponse {
        success: state.success().order_canceled.clone(),
    })
}

/// Customer Cancel Order Handler
///
/// Records the cancellation only. A second cancellation is rejected.
#[endpoint(
    tags("orders"),
    summary = "Customer Cancel Order",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Order canceled"),
    ),
)]
#[tracing::instrument(
    name = "orders.customer_cancel",
    skip(json, depot),
    fields(order_id = tracing::field::Empty),
    err(Debug)
)]
pub(crate) async fn customer(
    json: JsonBody<CancelOrderRequest>,
    depot: &mut Depot,
) -> Result<Json<OrderCanceledResponse>, ApiError> {
    let party = customer_party(depot)?;

    Ok(Json(cancel_order(depot, party, json.into_inner()).await?))
}

/// Provider Cancel Order Handler
#[endpoint(
    tags("orders"),
    summary = "Provider Cancel Order",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Order canceled"),
    ),
)]
#[tracing::instrument(
    name = "orders.provider_cancel",
    skip(json, depot),
    fields(order_id = tracing::field::Empty),
    err(Debug)
)]
pub(crate) async fn provider(
    json: JsonBody<CancelOrderRequest>,
    depot: &mut Depot,
) -> Result<Json<OrderCanceledResponse>, ApiError> {
    let party = provider_party(depot)?;

    Ok(Json(cancel_order(depot, party, json.into_inner()).await?))
}
