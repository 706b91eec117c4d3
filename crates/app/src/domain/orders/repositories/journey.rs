//! Journey Events Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};

use crate::domain::orders::{
    journey::OrderStatus,
    models::{CancellationNote, JourneyEvent, JourneyEventId, OrderId},
    repositories::{try_get_actor, try_get_status},
};

const APPEND_JOURNEY_EVENT_SQL: &str = include_str!("../sql/append_journey_event.sql");
const GET_JOURNEY_EVENTS_SQL: &str = include_str!("../sql/get_journey_events.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgJourneyRepository;

impl PgJourneyRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn append_event(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderId,
        status: OrderStatus,
        message: Option<&str>,
    ) -> Result<JourneyEvent, sqlx::Error> {
        query_as::<Postgres, JourneyEvent>(APPEND_JOURNEY_EVENT_SQL)
            .bind(order.into_i64())
            .bind(status.code())
            .bind(message)
            .fetch_one(&mut **tx)
            .await
    }

    /// All events for the order, oldest first, with cancellation details
    /// joined onto status 7 events.
    pub(crate) async fn get_events(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderId,
    ) -> Result<Vec<JourneyEvent>, sqlx::Error> {
        query_as::<Postgres, JourneyEvent>(GET_JOURNEY_EVENTS_SQL)
            .bind(order.into_i64())
            .fetch_all(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for JourneyEvent {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let cancellation = match try_get_actor(row, "canceled_by")? {
            Some(canceled_by) => Some(CancellationNote {
                canceled_by,
                message: row
                    .try_get::<Option<String>, _>("cancellation_message")?
                    .unwrap_or_default(),
            }),
            None => None,
        };

        Ok(Self {
            id: JourneyEventId::from_i64(row.try_get("id")?),
            status: try_get_status(row, "status")?,
            message: row.try_get("message")?,
            cancellation,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
        })
    }
}
