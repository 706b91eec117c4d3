//! Add Rating Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use panggilin_app::{
    auth::Customer,
    domain::{accounts::models::ProviderId, ratings::models::RatingInput},
};

use crate::{
    errors::ApiError,
    extensions::*,
    ratings::{errors::into_api_error, responses::RatingResponse},
    state::State,
};

/// Rating Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct RatingRequest {
    pub provider_id: i64,

    /// 1 to 5
    #[serde(alias = "user_rating")]
    pub score: i16,
}

impl From<RatingRequest> for RatingInput {
    fn from(request: RatingRequest) -> Self {
        RatingInput {
            provider_id: ProviderId::from_i64(request.provider_id),
            score: request.score,
        }
    }
}

/// Add Rating Handler
///
/// Each customer rates a provider once; later changes go through edit.
#[endpoint(
    tags("ratings"),
    summary = "Add Rating",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Rating stored"),
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
        .add_rating(customer, json.into_inner().into())
        .await
        .map_err(|error| into_api_error(error, state.errors()))?;

    Ok(Json(rating.into()))
}

#[cfg(test)]
mod tests {
    use panggilin_app::{
        domain::ratings::{MockRatingsService, RatingsServiceError},
        messages::ErrorMessages,
    };
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use crate::{
        errors::ErrorBody,
        ratings::handlers::tests::make_rating,
        test_helpers::{TEST_CUSTOMER_ID, TEST_PROVIDER_ID, TestApp, customer_service},
    };

    use super::*;

    fn make_service(ratings: MockRatingsService) -> Service {
        customer_service(
            TestApp::default().ratings(ratings),
            Router::with_path("provider/rating/add").post(handler),
        )
    }

    #[tokio::test]
    async fn test_add_rating_success() -> TestResult {
        let mut ratings = MockRatingsService::new();

        ratings
            .expect_add_rating()
            .once()
            .withf(|customer, input| {
                *customer == TEST_CUSTOMER_ID
                    && *input
                        == RatingInput {
                            provider_id: TEST_PROVIDER_ID,
                            score: 4,
                        }
            })
            .return_once(|_, _| Ok(make_rating(4)));

        ratings.expect_update_rating().never();

        let mut res = TestClient::post("http://example.com/provider/rating/add")
            .json(&json!({ "provider_id": 2, "user_rating": 4 }))
            .send(&make_service(ratings))
            .await;

        let body: RatingResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.score, 4);

        Ok(())
    }

    #[tokio::test]
    async fn test_second_rating_returns_400() -> TestResult {
        let mut ratings = MockRatingsService::new();

        ratings
            .expect_add_rating()
            .once()
            .return_once(|_, _| Err(RatingsServiceError::AlreadyExists));

        let mut res = TestClient::post("http://example.com/provider/rating/add")
            .json(&json!({ "provider_id": 2, "score": 5 }))
            .send(&make_service(ratings))
            .await;

        let body: ErrorBody = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(body.error, ErrorMessages::default().rating_exists);

        Ok(())
    }

    #[tokio::test]
    async fn test_out_of_range_score_returns_400() -> TestResult {
        let mut ratings = MockRatingsService::new();

        ratings
            .expect_add_rating()
            .once()
            .return_once(|_, _| Err(RatingsServiceError::InvalidScore));

        let res = TestClient::post("http://example.com/provider/rating/add")
            .json(&json!({ "provider_id": 2, "score": 9 }))
            .send(&make_service(ratings))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
