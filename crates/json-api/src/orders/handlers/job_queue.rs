//! Job Queue Handler

use std::{cmp::Reverse, sync::Arc};

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use panggilin_app::domain::{
    accounts::models::ProviderId,
    orders::{
        journey::OrderStatus,
        models::{OrderSummary, Party, StatusFilter},
    },
};

use crate::{errors::ApiError, extensions::*, orders::errors::into_api_error, state::State};

/// One open order waiting on a provider.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct QueuedOrderResponse {
    pub order_id: i64,
    pub customer_name: String,
    pub status: i16,

    /// Unix seconds
    pub order_date: i64,
}

impl From<OrderSummary> for QueuedOrderResponse {
    fn from(summary: OrderSummary) -> Self {
        Self {
            order_id: summary.id.into_i64(),
            customer_name: summary.customer_name,
            status: summary.status.code(),
            order_date: summary.created_at.as_second(),
        }
    }
}

/// Job Queue Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct JobQueueResponse {
    pub data: Vec<QueuedOrderResponse>,
}

/// Orders still in progress, furthest along first.
fn queue(mut orders: Vec<OrderSummary>) -> Vec<OrderSummary> {
    orders.retain(|order| !order.is_canceled);
    orders.sort_by_key(|order| Reverse(order.status));
    orders
}

/// Provider Job Queue Handler
///
/// Lets a customer see how busy a provider is before ordering.
#[endpoint(
    tags("orders"),
    summary = "Provider Job Queue",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Open orders of the provider"),
    ),
)]
pub(crate) async fn handler(
    provider_id: PathParam<i64>,
    depot: &mut Depot,
) -> Result<Json<JobQueueResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let provider = ProviderId::from_i64(provider_id.into_inner());

    let open = StatusFilter {
        below: Some(OrderStatus::Paid.code()),
        above: None,
    };

    let orders = state
        .app
        .orders
        .list_orders(Party::Provider(provider), open)
        .await
        .map_err(|error| into_api_error(error, state.errors()))?;

    Ok(Json(JobQueueResponse {
        data: queue(orders).into_iter().map(Into::into).collect(),
    }))
}

#[cfg(test)]
mod tests {
    use panggilin_app::domain::orders::{MockOrdersService, models::OrderId};
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use crate::{
        orders::handlers::tests::make_summary,
        test_helpers::{TEST_PROVIDER_ID, TestApp, customer_service},
    };

    use super::*;

    fn summary(id: i64, status: OrderStatus) -> OrderSummary {
        OrderSummary {
            id: OrderId::from_i64(id),
            ..make_summary(status)
        }
    }

    #[tokio::test]
    async fn test_queue_lists_open_orders_furthest_first() -> TestResult {
        let mut orders = MockOrdersService::new();

        orders
            .expect_list_orders()
            .once()
            .withf(|party, filter| {
                *party == Party::Provider(TEST_PROVIDER_ID)
                    && *filter
                        == StatusFilter {
                            below: Some(6),
                            above: None,
                        }
            })
            .return_once(|_, _| {
                let mut withdrawn = summary(14, OrderStatus::Confirmed);
                withdrawn.is_canceled = true;

                Ok(vec![
                    summary(11, OrderStatus::WaitingConfirmation),
                    summary(12, OrderStatus::Working),
                    withdrawn,
                    summary(13, OrderStatus::WaitingConfirmation),
                    summary(15, OrderStatus::OnTheWay),
                ])
            });

        let service = customer_service(
            TestApp::default().orders(orders),
            Router::with_path("jobque/get/{provider_id}").get(handler),
        );

        let mut res = TestClient::get("http://example.com/jobque/get/2")
            .send(&service)
            .await;

        let body: JobQueueResponse = res.take_json().await?;

        let queued: Vec<(i64, i16)> = body
            .data
            .iter()
            .map(|order| (order.order_id, order.status))
            .collect();

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(queued, vec![(12, 4), (15, 2), (11, 0), (13, 0)]);

        Ok(())
    }

    #[tokio::test]
    async fn test_non_numeric_provider_is_rejected() -> TestResult {
        let mut orders = MockOrdersService::new();

        orders.expect_list_orders().never();

        let service = customer_service(
            TestApp::default().orders(orders),
            Router::with_path("jobque/get/{provider_id}").get(handler),
        );

        let res = TestClient::get("http://example.com/jobque/get/bengkel")
            .send(&service)
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
