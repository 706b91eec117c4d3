//! Notification dispatcher.

use std::{fmt, sync::Arc};

use tracing::{debug, warn};

use crate::{
    domain::{
        accounts::models::usable_device_token,
        orders::models::{OrderId, OrderParties},
    },
    messages::Messages,
    notifications::{
        LogNotifier, NotificationPayload, Notifier, OrderEvent, Recipient, notification_for,
    },
};

/// Routes order events to the right app's notifier.
#[derive(Clone)]
pub struct NotificationDispatcher {
    customer_app: Arc<dyn Notifier>,
    provider_app: Arc<dyn Notifier>,
    messages: Arc<Messages>,
}

impl fmt::Debug for NotificationDispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotificationDispatcher").finish_non_exhaustive()
    }
}

impl NotificationDispatcher {
    #[must_use]
    pub fn new(
        customer_app: Arc<dyn Notifier>,
        provider_app: Arc<dyn Notifier>,
        messages: Arc<Messages>,
    ) -> Self {
        Self {
            customer_app,
            provider_app,
            messages,
        }
    }

    /// A dispatcher that only logs what it would have sent.
    #[must_use]
    pub fn disabled(messages: Arc<Messages>) -> Self {
        Self::new(Arc::new(LogNotifier), Arc::new(LogNotifier), messages)
    }

    /// Deliver the notification for `event` in the background.
    ///
    /// Call this only once the change behind `event` is committed.
    pub fn dispatch(&self, event: OrderEvent, order: OrderId, parties: OrderParties) {
        let dispatcher = self.clone();

        tokio::spawn(async move {
            dispatcher.deliver(event, order, &parties).await;
        });
    }

    /// Deliver the notification for `event` and wait for the attempt to end.
    ///
    /// Failures are logged and otherwise ignored.
    pub async fn deliver(&self, event: OrderEvent, order: OrderId, parties: &OrderParties) {
        let Some(notification) = notification_for(event, &self.messages.notifications) else {
            return;
        };

        let (notifier, contact) = match notification.recipient {
            Recipient::Customer => (&self.customer_app, &parties.customer),
            Recipient::Provider => (&self.provider_app, &parties.provider),
        };

        let Some(device_token) = usable_device_token(contact.device_token.as_deref()) else {
            debug!(
                order_id = %order,
                recipient = ?notification.recipient,
                "recipient has no device token, skipping notification"
            );

            return;
        };

        let payload = NotificationPayload::new(notification.message, order.into_i64());

        if let Err(error) = notifier.send(device_token, &payload).await {
            warn!(
                order_id = %order,
                recipient = ?notification.recipient,
                "failed to send notification: {error}"
            );
        }
    }
}
