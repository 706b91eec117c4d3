//! Order Models

use jiff::Timestamp;

use crate::{
    domain::{
        accounts::models::{CustomerId, ProviderId},
        orders::journey::{self, Actor, OrderStatus},
    },
    ids::TypedId,
};

/// Order ID
pub type OrderId = TypedId<Order>;

/// Order Item ID
pub type OrderItemId = TypedId<OrderItem>;

/// Journey Event ID
pub type JourneyEventId = TypedId<JourneyEvent>;

/// Tracking ID
pub type TrackingId = TypedId<Tracking>;

/// Where the provider should go.
#[derive(Debug, Clone, PartialEq)]
pub struct Destination {
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    pub description: String,
}

/// Order header. Nothing here changes after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: OrderId,
    pub customer_id: CustomerId,
    pub provider_id: ProviderId,
    pub destination: Destination,
    pub notes: String,
    pub payment_method: i32,
    pub created_at: Timestamp,
}

/// A priced service line, copied onto the order as submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderItem {
    pub id: OrderItemId,
    pub service_name: String,
    pub unit_price: i64,
    pub quantity: i32,
    pub created_at: Timestamp,
}

impl OrderItem {
    #[must_use]
    pub fn subtotal(&self) -> i64 {
        self.unit_price.saturating_mul(i64::from(self.quantity))
    }
}

/// Who canceled and why, attached to status 7 journey events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CancellationNote {
    pub canceled_by: Actor,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JourneyEvent {
    pub id: JourneyEventId,
    pub status: OrderStatus,
    pub message: Option<String>,
    pub cancellation: Option<CancellationNote>,
    pub created_at: Timestamp,
}

/// Cancellation record. At most one exists per order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cancellation {
    pub order_id: OrderId,
    pub journey_event_id: Option<JourneyEventId>,
    pub canceled_by: Actor,
    pub message: String,
    pub created_at: Timestamp,
}

/// The provider's last reported position for an order.
#[derive(Debug, Clone, PartialEq)]
pub struct Tracking {
    pub id: TrackingId,
    pub latitude: f64,
    pub longitude: f64,
    pub updated_at: Timestamp,
}

/// Contact details for one side of an order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub id: i64,
    pub full_name: String,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub device_token: Option<String>,
}

/// Both sides of an order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderParties {
    pub customer: Contact,
    pub provider: Contact,
}

/// Full view of one order, derived on every read.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderDetail {
    pub order: Order,
    pub items: Vec<OrderItem>,
    pub journey: Vec<JourneyEvent>,
    pub tracking: Option<Tracking>,
    pub cancellation: Option<Cancellation>,
    pub parties: OrderParties,
}

impl OrderDetail {
    #[must_use]
    pub fn total_price(&self) -> i64 {
        self.items.iter().map(OrderItem::subtotal).sum()
    }

    #[must_use]
    pub fn current_status(&self) -> Option<OrderStatus> {
        journey::current_status(&self.journey)
    }

    #[must_use]
    pub fn completion_date(&self) -> Option<Timestamp> {
        journey::completion_date(&self.journey)
    }

    #[must_use]
    pub fn is_canceled(&self) -> bool {
        self.cancellation.is_some()
    }
}

/// One row of an order list.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderSummary {
    pub id: OrderId,
    pub customer_id: CustomerId,
    pub customer_name: String,
    pub provider_id: ProviderId,
    pub provider_name: String,
    pub destination: Destination,
    pub total_price: i64,
    pub status: OrderStatus,
    pub is_canceled: bool,
    pub created_at: Timestamp,
    pub completed_at: Option<Timestamp>,
}

/// Status bounds for order lists. Both bounds are exclusive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusFilter {
    pub below: Option<i16>,
    pub above: Option<i16>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrderItem {
    pub service_name: String,
    pub unit_price: i64,
    pub quantity: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    pub provider_id: ProviderId,
    pub destination: Destination,
    pub notes: String,
    pub payment_method: i32,
    pub items: Vec<NewOrderItem>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewJourneyEvent {
    pub order_id: OrderId,
    pub status: OrderStatus,
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrackingUpdate {
    pub order_id: OrderId,
    pub tracking_id: TrackingId,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CancelOrder {
    pub order_id: OrderId,
    pub message: String,
    pub journey_event_id: Option<JourneyEventId>,
}

/// The principal acting on an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Party {
    Customer(CustomerId),
    Provider(ProviderId),
}

impl Party {
    #[must_use]
    pub const fn actor(self) -> Actor {
        match self {
            Self::Customer(_) => Actor::Customer,
            Self::Provider(_) => Actor::Provider,
        }
    }

    /// Whether this principal is one of the two sides of the order.
    #[must_use]
    pub fn owns(self, order: &Order) -> bool {
        match self {
            Self::Customer(customer) => order.customer_id == customer,
            Self::Provider(provider) => order.provider_id == provider,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(unit_price: i64, quantity: i32) -> OrderItem {
        OrderItem {
            id: OrderItemId::from_i64(1),
            service_name: "Cuci AC".to_string(),
            unit_price,
            quantity,
            created_at: Timestamp::UNIX_EPOCH,
        }
    }

    #[test]
    fn subtotal_multiplies_price_by_quantity() {
        assert_eq!(item(10_000, 2).subtotal(), 20_000);
        assert_eq!(item(i64::MAX, 2).subtotal(), i64::MAX);
    }

    #[test]
    fn party_owns_only_its_side() {
        let order = Order {
            id: OrderId::from_i64(10),
            customer_id: CustomerId::from_i64(5),
            provider_id: ProviderId::from_i64(9),
            destination: Destination {
                address: "Jl. Merdeka 1".to_string(),
                latitude: -6.2,
                longitude: 106.8,
                description: String::new(),
            },
            notes: String::new(),
            payment_method: 0,
            created_at: Timestamp::UNIX_EPOCH,
        };

        assert!(Party::Customer(CustomerId::from_i64(5)).owns(&order));
        assert!(Party::Provider(ProviderId::from_i64(9)).owns(&order));
        assert!(!Party::Customer(CustomerId::from_i64(9)).owns(&order));
        assert!(!Party::Provider(ProviderId::from_i64(5)).owns(&order));
    }
}
