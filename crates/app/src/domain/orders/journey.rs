//! Order journey.
//!
//! A journey is an append-only log of status events. Nothing checks that a
//! new status follows the previous one; the current status is simply the
//! highest status the log has seen, whatever order the events arrived in.

use std::fmt;

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::domain::orders::models::JourneyEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i16", into = "i16")]
pub enum OrderStatus {
    WaitingConfirmation = 0,
    Confirmed = 1,
    OnTheWay = 2,
    ReachedDestination = 3,
    Working = 4,
    Complete = 5,
    /// Completed and paid.
    Paid = 6,
    Canceled = 7,
}

impl OrderStatus {
    #[must_use]
    pub const fn code(self) -> i16 {
        self as i16
    }

    /// Whether an event with this status closes the order.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Paid | Self::Canceled)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownStatus(pub i16);

impl fmt::Display for UnknownStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown order status {}", self.0)
    }
}

impl std::error::Error for UnknownStatus {}

impl TryFrom<i16> for OrderStatus {
    type Error = UnknownStatus;

    fn try_from(code: i16) -> Result<Self, Self::Error> {
        Ok(match code {
            0 => Self::WaitingConfirmation,
            1 => Self::Confirmed,
            2 => Self::OnTheWay,
            3 => Self::ReachedDestination,
            4 => Self::Working,
            5 => Self::Complete,
            6 => Self::Paid,
            7 => Self::Canceled,
            _ => return Err(UnknownStatus(code)),
        })
    }
}

impl From<OrderStatus> for i16 {
    fn from(status: OrderStatus) -> Self {
        status.code()
    }
}

/// Who caused a journey event or cancellation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i16", into = "i16")]
pub enum Actor {
    Customer = 1,
    Provider = 2,
    System = 3,
}

impl Actor {
    #[must_use]
    pub const fn code(self) -> i16 {
        self as i16
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownActor(pub i16);

impl fmt::Display for UnknownActor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown actor {}", self.0)
    }
}

impl std::error::Error for UnknownActor {}

impl TryFrom<i16> for Actor {
    type Error = UnknownActor;

    fn try_from(code: i16) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Self::Customer),
            2 => Ok(Self::Provider),
            3 => Ok(Self::System),
            _ => Err(UnknownActor(code)),
        }
    }
}

impl From<Actor> for i16 {
    fn from(actor: Actor) -> Self {
        actor.code()
    }
}

/// The highest status any event in the journey carries.
#[must_use]
pub fn current_status(events: &[JourneyEvent]) -> Option<OrderStatus> {
    events.iter().map(|event| event.status).max()
}

/// When the order was closed, by payment or cancellation.
///
/// If several closing events exist the earliest one wins.
#[must_use]
pub fn completion_date(events: &[JourneyEvent]) -> Option<Timestamp> {
    events
        .iter()
        .filter(|event| event.status.is_terminal())
        .map(|event| event.created_at)
        .min()
}

#[cfg(test)]
mod tests {
    use jiff::SignedDuration;

    use crate::domain::orders::models::JourneyEventId;

    use super::*;

    fn event(id: i64, status: OrderStatus, created_at: Timestamp) -> JourneyEvent {
        JourneyEvent {
            id: JourneyEventId::from_i64(id),
            status,
            message: None,
            cancellation: None,
            created_at,
        }
    }

    #[test]
    fn current_status_is_the_maximum_not_the_latest() {
        let now = Timestamp::now();

        let events = [
            event(1, OrderStatus::WaitingConfirmation, now),
            event(2, OrderStatus::OnTheWay, now + SignedDuration::from_secs(1)),
            event(3, OrderStatus::Confirmed, now + SignedDuration::from_secs(2)),
        ];

        assert_eq!(current_status(&events), Some(OrderStatus::OnTheWay));
    }

    #[test]
    fn empty_journey_has_no_status() {
        assert_eq!(current_status(&[]), None);
        assert_eq!(completion_date(&[]), None);
    }

    #[test]
    fn completion_date_comes_from_paid_or_canceled_events() {
        let start = Timestamp::now();
        let paid_at = start + SignedDuration::from_mins(90);

        let events = [
            event(1, OrderStatus::WaitingConfirmation, start),
            event(2, OrderStatus::Complete, start + SignedDuration::from_mins(60)),
            event(3, OrderStatus::Paid, paid_at),
        ];

        assert_eq!(completion_date(&events), Some(paid_at));
        assert_eq!(completion_date(&events[..2]), None);
    }

    #[test]
    fn status_codes_round_trip_through_i16() {
        for code in 0..=7 {
            let status = OrderStatus::try_from(code).map(i16::from);

            assert_eq!(status, Ok(code));
        }

        assert_eq!(OrderStatus::try_from(8), Err(UnknownStatus(8)));
        assert_eq!(Actor::try_from(0), Err(UnknownActor(0)));
    }

    #[test]
    fn status_serializes_as_its_code() -> Result<(), serde_json::Error> {
        assert_eq!(serde_json::to_string(&OrderStatus::Canceled)?, "7");
        assert_eq!(
            serde_json::from_str::<OrderStatus>("2")?,
            OrderStatus::OnTheWay
        );
        assert!(serde_json::from_str::<OrderStatus>("9").is_err());

        Ok(())
    }
}
