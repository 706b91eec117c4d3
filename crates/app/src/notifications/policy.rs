//! Who hears about what.

use crate::{
    domain::orders::journey::{Actor, OrderStatus},
    messages::NotificationMessages,
};

/// Something that happened to an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderEvent {
    Created,
    StatusChanged { actor: Actor, status: OrderStatus },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recipient {
    Customer,
    Provider,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub recipient: Recipient,
    pub message: String,
}

/// Decide which side of the order to notify and with which text.
///
/// Providers move the order along and the customer hears about every step.
/// Customers only reach the provider by creating or canceling.
#[must_use]
pub fn notification_for(event: OrderEvent, messages: &NotificationMessages) -> Option<Notification> {
    let (recipient, message) = match event {
        OrderEvent::Created => (Recipient::Provider, messages.new_order.as_str()),
        OrderEvent::StatusChanged {
            actor: Actor::Provider,
            status,
        } => (
            Recipient::Customer,
            messages.customer_status.for_status(status),
        ),
        OrderEvent::StatusChanged {
            actor: Actor::Customer,
            status: OrderStatus::Canceled,
        } => (Recipient::Provider, messages.order_canceled.as_str()),
        OrderEvent::StatusChanged { .. } => return None,
    };

    Some(Notification {
        recipient,
        message: message.to_string(),
    })
}
