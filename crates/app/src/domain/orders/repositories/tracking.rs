//! Tracking Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};

use crate::domain::orders::models::{OrderId, Tracking, TrackingId, TrackingUpdate};

const CREATE_TRACKING_SQL: &str = include_str!("../sql/create_tracking.sql");
const GET_TRACKING_SQL: &str = include_str!("../sql/get_tracking.sql");
const UPDATE_TRACKING_SQL: &str = include_str!("../sql/update_tracking.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgTrackingRepository;

impl PgTrackingRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn create_tracking(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderId,
    ) -> Result<Tracking, sqlx::Error> {
        query_as::<Postgres, Tracking>(CREATE_TRACKING_SQL)
            .bind(order.into_i64())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn get_tracking(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderId,
    ) -> Result<Option<Tracking>, sqlx::Error> {
        query_as::<Postgres, Tracking>(GET_TRACKING_SQL)
            .bind(order.into_i64())
            .fetch_optional(&mut **tx)
            .await
    }

    /// Overwrite the position, only if the tracking row belongs to the order.
    pub(crate) async fn update_tracking(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        update: &TrackingUpdate,
    ) -> Result<Option<Tracking>, sqlx::Error> {
        query_as::<Postgres, Tracking>(UPDATE_TRACKING_SQL)
            .bind(update.tracking_id.into_i64())
            .bind(update.order_id.into_i64())
            .bind(update.latitude)
            .bind(update.longitude)
            .fetch_optional(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for Tracking {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: TrackingId::from_i64(row.try_get("id")?),
            latitude: row.try_get("latitude")?,
            longitude: row.try_get("longitude")?,
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
