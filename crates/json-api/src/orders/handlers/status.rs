//! Order Status Handlers

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use panggilin_app::domain::orders::{
    journey::OrderStatus,
    models::{NewJourneyEvent, OrderId, Party},
};

use crate::{
    errors::ApiError,
    extensions::*,
    orders::{
        errors::into_api_error,
        handlers::{customer_party, provider_party},
    },
    state::State,
};

/// Order Status Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderStatusRequest {
    pub order_id: i64,

    /// 0 waiting for confirmation through 6 paid, 7 canceled
    pub status: i16,

    /// Reason, kept with the cancellation when status is 7
    #[serde(default)]
    pub message: Option<String>,
}

/// Journey Event Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct JourneyEventCreatedResponse {
    pub id: i64,
    pub order_id: i64,
    pub status: i16,
}

async fn append_event(
    depot: &Depot,
    party: Party,
    request: OrderStatusRequest,
) -> Result<JourneyEventCreatedResponse, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let span = tracing::Span::current();

    span.record("order_id", request.order_id);
    span.record("status", request.status);

    let status = OrderStatus::try_from(request.status)
        .or_400("rejected journey status", &state.errors().invalid_request)?;

    let event = NewJourneyEvent {
        order_id: OrderId::from_i64(request.order_id),
        status,
        message: request.message.filter(|message| !message.is_empty()),
    };

    let order_id = event.order_id;

    let id = state
        .app
        .orders
        .append_journey_event(party, event)
        .await
        .map_err(|error| into_api_error(error, state.errors()))?;

    Ok(JourneyEventCreatedResponse {
        id: id.into_i64(),
        order_id: order_id.into_i64(),
        status: status.code(),
    })
}

/// Customer Order Status Handler
///
/// The provider is only notified when the customer cancels.
#[endpoint(
    tags("orders"),
    summary = "Customer Order Status",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Journey event appended"),
    ),
)]
#[tracing::instrument(
    name = "orders.customer_status",
    skip(json, depot),
    fields(order_id = tracing::field::Empty, status = tracing::field::Empty),
    err(Debug)
)]
pub(crate) async fn customer(
    json: JsonBody<OrderStatusRequest>,
    depot: &mut Depot,
) -> Result<Json<JourneyEventCreatedResponse>, ApiError> {
    let party = customer_party(depot)?;

    Ok(Json(append_event(depot, party, json.into_inner()).await?))
}

/// Provider Order Status Handler
///
/// Moves the order along its journey and tells the customer.
#[endpoint(
    tags("orders"),
    summary = "Provider Order Status",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Journey event appended"),
    ),
)]
#[tracing::instrument(
    name = "orders.provider_status",
    skip(json, depot),
    fields(order_id = tracing::field::Empty, status = tracing::field::Empty),
    err(Debug)
)]
pub(crate) async fn provider(
    json: JsonBody<OrderStatusRequest>,
    depot: &mut Depot,
) -> Result<Json<JourneyEventCreatedResponse>, ApiError> {
    let party = provider_party(depot)?;

    Ok(Json(append_event(depot, party, json.into_inner()).await?))
}
