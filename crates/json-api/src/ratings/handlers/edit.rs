//! Edit Rating Handler

use std::sync::Arc;

use salvo::{oapi::extract::JsonBody, prelude::*};

use panggilin_app::auth::Customer;

use crate::{
    errors::ApiError,
    extensions::*,
    ratings::{errors::into_api_error, handlers::add::RatingRequest, responses::RatingResponse},
    state::State,
};

/// Edit Rating Handler
#[endpoint(
    tags("ratings"),
    summary = "Edit Rating",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Rating changed"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<RatingRequest>,
    depot: &mut Depot,
) -> Result<Json<RatingResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let customer = depot.principal::<Customer>()?;

    let rating = state
        .app
        .ratings
        .update_rating(customer, json.into_inner().into())
        .await
        .map_err(|error| into_api_error(error, state.errors()))?;

    Ok(Json(rating.into()))
}
