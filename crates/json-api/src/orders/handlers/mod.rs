//! Order Handlers
//!
//! Most routes exist once per side of the order. The customer and provider
//! variants differ only in which principal they act as.

use panggilin_app::{
    auth::{Customer, Provider},
    domain::orders::models::Party,
};
use salvo::Depot;

use crate::{errors::ApiError, extensions::*};

pub(crate) mod cancel;
pub(crate) mod create;
pub(crate) mod detail;
pub(crate) mod job_queue;
pub(crate) mod list;
pub(crate) mod quick_info;
pub(crate) mod status;
pub(crate) mod tracking;

fn customer_party(depot: &Depot) -> Result<Party, ApiError> {
    depot.principal::<Customer>().map(Party::Customer)
}

fn provider_party(depot: &Depot) -> Result<Party, ApiError> {
    depot.principal::<Provider>().map(Party::Provider)
}

#[cfg(test)]
mod tests {
    use jiff::{SignedDuration, Timestamp};
    use panggilin_app::domain::orders::{
        journey::OrderStatus,
        models::{
            Contact, Destination, JourneyEvent, JourneyEventId, Order, OrderDetail, OrderId,
            OrderItem, OrderItemId, OrderParties, OrderSummary, Tracking, TrackingId,
        },
    };

    use crate::test_helpers::{TEST_CUSTOMER_ID, TEST_PROVIDER_ID};

    pub(super) const TEST_ORDER_ID: OrderId = OrderId::from_i64(41);

    const ORDER_DATE: Timestamp = Timestamp::constant(1_750_000_000, 0);

    fn destination() -> Destination {
        Destination {
            address: "Jl. Sudirman 5, Jakarta".to_string(),
            latitude: -6.2088,
            longitude: 106.8456,
            description: "Pagar hijau".to_string(),
        }
    }

    fn event(id: i64, status: OrderStatus, minutes: i64) -> JourneyEvent {
        JourneyEvent {
            id: JourneyEventId::from_i64(id),
            status,
            message: None,
            cancellation: None,
            created_at: ORDER_DATE + SignedDuration::from_mins(minutes),
        }
    }

    /// A paid order for 2 x 10000 + 1 x 5000.
    pub(super) fn make_order_detail() -> OrderDetail {
        OrderDetail {
            order: Order {
                id: TEST_ORDER_ID,
                customer_id: TEST_CUSTOMER_ID,
                provider_id: TEST_PROVIDER_ID,
                destination: destination(),
                notes: "Bawa tangga".to_string(),
                payment_method: 1,
                created_at: ORDER_DATE,
            },
            items: vec![
                OrderItem {
                    id: OrderItemId::from_i64(1),
                    service_name: "Cuci AC".to_string(),
                    unit_price: 10_000,
                    quantity: 2,
                    created_at: ORDER_DATE,
                },
                OrderItem {
                    id: OrderItemId::from_i64(2),
                    service_name: "Isi freon".to_string(),
                    unit_price: 5_000,
                    quantity: 1,
                    created_at: ORDER_DATE,
                },
            ],
            journey: vec![
                event(1, OrderStatus::WaitingConfirmation, 0),
                event(2, OrderStatus::Working, 30),
                event(3, OrderStatus::Paid, 90),
            ],
            tracking: Some(Tracking {
                id: TrackingId::from_i64(7),
                latitude: -6.2,
                longitude: 106.8,
                updated_at: ORDER_DATE,
            }),
            cancellation: None,
            parties: OrderParties {
                customer: Contact {
                    id: TEST_CUSTOMER_ID.into_i64(),
                    full_name: "Siti Rahma".to_string(),
                    phone_number: Some("081234567890".to_string()),
                    address: None,
                    device_token: Some("fcm-customer".to_string()),
                },
                provider: Contact {
                    id: TEST_PROVIDER_ID.into_i64(),
                    full_name: "Bengkel Jaya".to_string(),
                    phone_number: None,
                    address: Some("Jl. Merdeka 1, Bandung".to_string()),
                    device_token: None,
                },
            },
        }
    }

    pub(super) fn completed_at() -> i64 {
        (ORDER_DATE + SignedDuration::from_mins(90)).as_second()
    }

    pub(super) fn make_summary(status: OrderStatus) -> OrderSummary {
        OrderSummary {
            id: TEST_ORDER_ID,
            customer_id: TEST_CUSTOMER_ID,
            customer_name: "Siti Rahma".to_string(),
            provider_id: TEST_PROVIDER_ID,
            provider_name: "Bengkel Jaya".to_string(),
            destination: destination(),
            total_price: 25_000,
            status,
            is_canceled: status == OrderStatus::Canceled,
            created_at: ORDER_DATE,
            completed_at: None,
        }
    }
}
