//! List Orders Handlers

use std::sync::Arc;

use salvo::{oapi::extract::QueryParam, prelude::*};

use panggilin_app::domain::orders::models::{Party, StatusFilter};

use crate::{
    errors::ApiError,
    extensions::*,
    orders::{
        errors::into_api_error,
        handlers::{customer_party, provider_party},
        responses::OrderListResponse,
    },
    state::State,
};

/// Raw `lt` / `gt` query values; blank means unbounded.
fn status_bound(raw: Option<&str>, message: &str) -> Result<Option<i16>, ApiError> {
    raw.map(str::trim)
        .filter(|raw| !raw.is_empty())
        .map(str::parse::<i16>)
        .transpose()
        .or_400("rejected status bound", message)
}

async fn list_orders(
    depot: &Depot,
    party: Party,
    lt: Option<&str>,
    gt: Option<&str>,
) -> Result<OrderListResponse, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let filter = StatusFilter {
        below: status_bound(lt, &state.errors().invalid_request)?,
        above: status_bound(gt, &state.errors().invalid_request)?,
    };

    let orders = state
        .app
        .orders
        .list_orders(party, filter)
        .await
        .map_err(|error| into_api_error(error, state.errors()))?;

    Ok(orders.into())
}

/// Customer Orders Handler
///
/// `lt` and `gt` bound the current status, exclusively.
#[endpoint(
    tags("orders"),
    summary = "List Customer Orders",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Orders of the caller"),
    ),
)]
pub(crate) async fn customer(
    lt: QueryParam<String, false>,
    gt: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<OrderListResponse>, ApiError> {
    let party = customer_party(depot)?;

    let (lt, gt) = (lt.into_inner(), gt.into_inner());

    Ok(Json(
        list_orders(depot, party, lt.as_deref(), gt.as_deref()).await?,
    ))
}

/// Provider Orders Handler
#[endpoint(
    tags("orders"),
    summary = "List Provider Orders",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Orders of the caller"),
    ),
)]
pub(crate) async fn provider(
    lt: QueryParam<String, false>,
    gt: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<OrderListResponse>, ApiError> {
    let party = provider_party(depot)?;

    let (lt, gt) = (lt.into_inner(), gt.into_inner());

    Ok(Json(
        list_orders(depot, party, lt.as_deref(), gt.as_deref()).await?,
    ))
}
