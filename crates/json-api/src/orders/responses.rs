//! Order response bodies.
//!
//! Dates are unix seconds. `complete_date` is 0 while the order is open.

use jiff::Timestamp;
use panggilin_app::domain::orders::{
    journey::OrderStatus,
    models::{
        Cancellation, Contact, JourneyEvent, OrderDetail, OrderItem, OrderSummary, Tracking,
    },
};
use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

fn unix_or_zero(timestamp: Option<Timestamp>) -> i64 {
    timestamp.map_or(0, Timestamp::as_second)
}

fn status_code(status: Option<OrderStatus>) -> i16 {
    status.map_or(0, OrderStatus::code)
}

/// One side of an order.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ContactResponse {
    pub id: i64,
    pub full_name: String,
    pub phone_number: String,
    pub address: String,
}

impl From<Contact> for ContactResponse {
    fn from(contact: Contact) -> Self {
        Self {
            id: contact.id,
            full_name: contact.full_name,
            phone_number: contact.phone_number.unwrap_or_default(),
            address: contact.address.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderItemResponse {
    pub id: i64,
    pub service_name: String,
    pub service_price: i64,
    pub qty: i32,
    pub subtotal: i64,
}

impl From<OrderItem> for OrderItemResponse {
    fn from(item: OrderItem) -> Self {
        Self {
            id: item.id.into_i64(),
            subtotal: item.subtotal(),
            service_name: item.service_name,
            service_price: item.unit_price,
            qty: item.quantity,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct JourneyEventResponse {
    pub id: i64,
    pub status: i16,
    pub date: i64,
    pub message: String,
    pub is_canceled: bool,

    /// 1 customer, 2 provider, 3 system; 0 unless canceled
    pub canceled_by: i16,
}

impl From<JourneyEvent> for JourneyEventResponse {
    fn from(event: JourneyEvent) -> Self {
        let canceled_by = event
            .cancellation
            .as_ref()
            .map_or(0, |note| note.canceled_by.code());

        let message = event
            .cancellation
            .map(|note| note.message)
            .or(event.message)
            .unwrap_or_default();

        Self {
            id: event.id.into_i64(),
            status: event.status.code(),
            date: event.created_at.as_second(),
            message,
            is_canceled: event.status == OrderStatus::Canceled,
            canceled_by,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct TrackingResponse {
    pub id: i64,
    pub latitude: f64,
    pub longitude: f64,
    pub updated_at: i64,
}

impl From<Tracking> for TrackingResponse {
    fn from(tracking: Tracking) -> Self {
        Self {
            id: tracking.id.into_i64(),
            latitude: tracking.latitude,
            longitude: tracking.longitude,
            updated_at: tracking.updated_at.as_second(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CancellationResponse {
    pub canceled_by: i16,
    pub message: String,
    pub date: i64,
}

impl From<Cancellation> for CancellationResponse {
    fn from(cancellation: Cancellation) -> Self {
        Self {
            canceled_by: cancellation.canceled_by.code(),
            message: cancellation.message,
            date: cancellation.created_at.as_second(),
        }
    }
}

/// Order Detail Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderDetailResponse {
    pub id: i64,
    pub customer: ContactResponse,
    pub provider: ContactResponse,
    pub destination: String,
    pub destination_lat: f64,
    pub destination_long: f64,
    pub destination_desc: String,
    pub notes: String,
    pub payment_method: i32,
    pub order_date: i64,
    pub status: i16,
    pub complete_date: i64,
    pub total_price: i64,
    pub is_canceled: bool,
    pub cancellation: Option<CancellationResponse>,
    pub items: Vec<OrderItemResponse>,
    pub journey: Vec<JourneyEventResponse>,
    pub tracking: Option<TrackingResponse>,
}

impl From<OrderDetail> for OrderDetailResponse {
    fn from(detail: OrderDetail) -> Self {
        let status = status_code(detail.current_status());
        let complete_date = unix_or_zero(detail.completion_date());
        let total_price = detail.total_price();
        let is_canceled = detail.is_canceled();

        let OrderDetail {
            order,
            items,
            journey,
            tracking,
            cancellation,
            parties,
        } = detail;

        Self {
            id: order.id.into_i64(),
            customer: parties.customer.into(),
            provider: parties.provider.into(),
            destination: order.destination.address,
            destination_lat: order.destination.latitude,
            destination_long: order.destination.longitude,
            destination_desc: order.destination.description,
            notes: order.notes,
            payment_method: order.payment_method,
            order_date: order.created_at.as_second(),
            status,
            complete_date,
            total_price,
            is_canceled,
            cancellation: cancellation.map(Into::into),
            items: items.into_iter().map(Into::into).collect(),
            journey: journey.into_iter().map(Into::into).collect(),
            tracking: tracking.map(Into::into),
        }
    }
}

/// One order in a list.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderSummaryResponse {
    pub id: i64,
    pub customer_id: i64,
    pub customer_name: String,
    pub provider_id: i64,
    pub provider_name: String,
    pub destination: String,
    pub latitude: f64,
    pub longitude: f64,
    pub destination_desc: String,
    pub price: i64,
    pub status: i16,
    pub order_date: i64,
    pub complete_date: i64,
    pub is_canceled: bool,
}

impl From<OrderSummary> for OrderSummaryResponse {
    fn from(summary: OrderSummary) -> Self {
        Self {
            id: summary.id.into_i64(),
            customer_id: summary.customer_id.into_i64(),
            customer_name: summary.customer_name,
            provider_id: summary.provider_id.into_i64(),
            provider_name: summary.provider_name,
            destination: summary.destination.address,
            latitude: summary.destination.latitude,
            longitude: summary.destination.longitude,
            destination_desc: summary.destination.description,
            price: summary.total_price,
            status: summary.status.code(),
            order_date: summary.created_at.as_second(),
            complete_date: unix_or_zero(summary.completed_at),
            is_canceled: summary.is_canceled,
        }
    }
}

/// Order List Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderListResponse {
    pub data: Vec<OrderSummaryResponse>,
}

impl From<Vec<OrderSummary>> for OrderListResponse {
    fn from(orders: Vec<OrderSummary>) -> Self {
        Self {
            data: orders.into_iter().map(Into::into).collect(),
        }
    }
}
