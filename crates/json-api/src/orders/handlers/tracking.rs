//! Order Tracking Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use panggilin_app::domain::orders::models::{OrderId, TrackingId, TrackingUpdate};

use crate::{
    errors::ApiError,
    extensions::*,
    orders::{errors::into_api_error, handlers::provider_party, responses::TrackingResponse},
    state::State,
};

/// Tracking Update Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct TrackingUpdateRequest {
    /// Tracking row id handed out with the order detail
    pub id: i64,
    pub order_id: i64,
    pub latitude: f64,
    pub longitude: f64,
}

impl From<TrackingUpdateRequest> for TrackingUpdate {
    fn from(request: TrackingUpdateRequest) -> Self {
        TrackingUpdate {
            order_id: OrderId::from_i64(request.order_id),
            tracking_id: TrackingId::from_i64(request.id),
            latitude: request.latitude,
            longitude: request.longitude,
        }
    }
}

/// Order Tracking Handler
///
/// Overwrites the provider's last known position for the order.
#[endpoint(
    tags("orders"),
    summary = "Update Order Tracking",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Position stored"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<TrackingUpdateRequest>,
    depot: &mut Depot,
) -> Result<Json<TrackingResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let party = provider_party(depot)?;

    let tracking = state
        .app
        .orders
        .update_tracking(party, json.into_inner().into())
        .await
        .map_err(|error| into_api_error(error, state.errors()))?;

    Ok(Json(tracking.into()))
}
