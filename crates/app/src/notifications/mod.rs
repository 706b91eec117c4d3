//! Push notifications
//!
//! Order changes notify the other side of the order. Delivery happens after
//! the change is committed and its outcome is only ever logged.

mod dispatcher;
mod fcm;
mod notifier;
mod policy;

pub use dispatcher::NotificationDispatcher;
pub use fcm::{FCM_DEFAULT_TIMEOUT, FCM_LEGACY_ENDPOINT, FcmConfig, FcmNotifier};
pub use notifier::*;
pub use policy::{Notification, OrderEvent, Recipient, notification_for};
