//! Create Order Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use panggilin_app::{
    auth::Customer,
    domain::{
        accounts::models::ProviderId,
        orders::models::{Destination, NewOrder, NewOrderItem},
    },
};

use crate::{errors::ApiError, extensions::*, orders::errors::into_api_error, state::State};

/// Order line as the customer app sends it.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateOrderItemRequest {
    pub service_name: String,
    pub service_price: i64,
    pub qty: i32,
}

impl From<CreateOrderItemRequest> for NewOrderItem {
    fn from(item: CreateOrderItemRequest) -> Self {
        NewOrderItem {
            service_name: item.service_name,
            unit_price: item.service_price,
            quantity: item.qty,
        }
    }
}

/// Create Order Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateOrderRequest {
    pub provider_id: i64,
    pub destination: String,
    pub destination_lat: f64,
    pub destination_long: f64,

    #[serde(default)]
    pub destination_desc: String,

    #[serde(default)]
    pub notes: String,

    #[serde(default)]
    pub payment_method: i32,

    /// Ordered services
    pub data: Vec<CreateOrderItemRequest>,
}

impl From<CreateOrderRequest> for NewOrder {
    fn from(request: CreateOrderRequest) -> Self {
        NewOrder {
            provider_id: ProviderId::from_i64(request.provider_id),
            destination: Destination {
                address: request.destination,
                latitude: request.destination_lat,
                longitude: request.destination_long,
                description: request.destination_desc,
            },
            notes: request.notes,
            payment_method: request.payment_method,
            items: request.data.into_iter().map(Into::into).collect(),
        }
    }
}

/// Order Created Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderCreatedResponse {
    pub status: String,
    pub order_id: i64,
}

/// Create Order Handler
///
/// Places an order with an active provider, who is notified once it is
/// stored.
#[endpoint(
    tags("orders"),
    summary = "Create Order",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Order placed"),
    ),
)]
#[tracing::instrument(
    name = "orders.create",
    skip(json, depot),
    fields(
        customer_id = tracing::field::Empty,
        provider_id = tracing::field::Empty,
        items = tracing::field::Empty
    ),
    err(Debug)
)]
pub(crate) async fn handler(
    json: JsonBody<CreateOrderRequest>,
    depot: &mut Depot,
) -> Result<Json<OrderCreatedResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let customer = depot.principal::<Customer>()?;
    let request = json.into_inner();

    let span = tracing::Span::current();

    span.record("customer_id", tracing::field::display(customer));
    span.record("provider_id", request.provider_id);
    span.record("items", request.data.len());

    let order_id = state
        .app
        .orders
        .create_order(customer, request.into())
        .await
        .map_err(|error| into_api_error(error, state.errors()))?;

    Ok(Json(OrderCreatedResponse {
        status: state.success().order_created.clone(),
        order_id: order_id.into_i64(),
    }))
}

#[cfg(test)]
mod tests {
    use panggilin_app::{
        domain::orders::{MockOrdersService, OrdersServiceError},
        messages::{ErrorMessages, SuccessMessages},
    };
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::{Value, json};
    use testresult::TestResult;

    use crate::{
        errors::ErrorBody,
        orders::handlers::tests::TEST_ORDER_ID,
        test_helpers::{TEST_CUSTOMER_ID, TEST_PROVIDER_ID, TestApp, customer_service},
    };

    use super::*;

    fn make_service(orders: MockOrdersService) -> Service {
        customer_service(
            TestApp::default().orders(orders),
            Router::with_path("order/new").post(handler),
        )
    }

    fn order_body(items: Value) -> Value {
        json!({
            "provider_id": 2,
            "destination": "Jl. Sudirman 5, Jakarta",
            "destination_lat": -6.2088,
            "destination_long": 106.8456,
            "destination_desc": "Pagar hijau",
            "notes": "Bawa tangga",
            "payment_method": 1,
            "data": items,
        })
    }

    #[tokio::test]
    async fn test_create_order_success() -> TestResult {
        let mut orders = MockOrdersService::new();

        orders
            .expect_create_order()
            .once()
            .withf(|customer, order| {
                *customer == TEST_CUSTOMER_ID
                    && order.provider_id == TEST_PROVIDER_ID
                    && order.payment_method == 1
                    && order.items
                        == vec![NewOrderItem {
                            service_name: "Cuci AC".to_string(),
                            unit_price: 10_000,
                            quantity: 2,
                        }]
            })
            .return_once(|_, _| Ok(TEST_ORDER_ID));

        let mut res = TestClient::post("http://example.com/order/new")
            .json(&order_body(json!([
                { "service_name": "Cuci AC", "service_price": 10000, "qty": 2 }
            ])))
            .send(&make_service(orders))
            .await;

        let body: OrderCreatedResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.order_id, TEST_ORDER_ID.into_i64());
        assert_eq!(body.status, SuccessMessages::default().order_created);

        Ok(())
    }

    #[tokio::test]
    async fn test_inactive_provider_returns_400() -> TestResult {
        let mut orders = MockOrdersService::new();

        orders
            .expect_create_order()
            .once()
            .return_once(|_, _| Err(OrdersServiceError::ProviderUnavailable));

        let mut res = TestClient::post("http://example.com/order/new")
            .json(&order_body(json!([
                { "service_name": "Cuci AC", "service_price": 10000, "qty": 1 }
            ])))
            .send(&make_service(orders))
            .await;

        let body: ErrorBody = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(body.error, ErrorMessages::default().provider_unavailable);

        Ok(())
    }

    #[tokio::test]
    async fn test_empty_order_returns_400() -> TestResult {
        let mut orders = MockOrdersService::new();

        orders
            .expect_create_order()
            .once()
            .withf(|_, order| order.items.is_empty())
            .return_once(|_, _| Err(OrdersServiceError::EmptyOrder));

        let mut res = TestClient::post("http://example.com/order/new")
            .json(&order_body(json!([])))
            .send(&make_service(orders))
            .await;

        let body: ErrorBody = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(body.error, ErrorMessages::default().empty_order);

        Ok(())
    }
}
