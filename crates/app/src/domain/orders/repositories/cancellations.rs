//! Cancellations Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};

use crate::domain::orders::{
    journey::Actor,
    models::{Cancellation, JourneyEventId, OrderId},
    repositories::try_get_actor,
};

const CREATE_CANCELLATION_SQL: &str = include_str!("../sql/create_cancellation.sql");
const GET_CANCELLATION_SQL: &str = include_str!("../sql/get_cancellation.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgCancellationsRepository;

impl PgCancellationsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    /// Record a cancellation. Returns `None` when the order already has one.
    pub(crate) async fn create_cancellation(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderId,
        journey_event: Option<JourneyEventId>,
        canceled_by: Actor,
        message: &str,
    ) -> Result<Option<Cancellation>, sqlx::Error> {
        query_as::<Postgres, Cancellation>(CREATE_CANCELLATION_SQL)
            .bind(order.into_i64())
            .bind(journey_event.map(JourneyEventId::into_i64))
            .bind(canceled_by.code())
            .bind(message)
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn get_cancellation(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderId,
    ) -> Result<Option<Cancellation>, sqlx::Error> {
        query_as::<Postgres, Cancellation>(GET_CANCELLATION_SQL)
            .bind(order.into_i64())
            .fetch_optional(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for Cancellation {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let canceled_by = try_get_actor(row, "canceled_by")?.ok_or_else(|| {
            sqlx::Error::ColumnDecode {
                index: "canceled_by".to_string(),
                source: "canceled_by is null".into(),
            }
        })?;

        Ok(Self {
            order_id: OrderId::from_i64(row.try_get("order_id")?),
            journey_event_id: row
                .try_get::<Option<i64>, _>("journey_event_id")?
                .map(JourneyEventId::from_i64),
            canceled_by,
            message: row.try_get("message")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
        })
    }
}
