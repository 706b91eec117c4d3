//! Order Repositories

mod cancellations;
mod items;
mod journey;
mod orders;
mod tracking;

pub(crate) use cancellations::PgCancellationsRepository;
pub(crate) use items::PgOrderItemsRepository;
pub(crate) use journey::PgJourneyRepository;
pub(crate) use orders::PgOrdersRepository;
pub(crate) use tracking::PgTrackingRepository;

use sqlx::{Row, postgres::PgRow};

use crate::domain::orders::journey::{Actor, OrderStatus};

pub(super) fn try_get_status(row: &PgRow, col: &str) -> Result<OrderStatus, sqlx::Error> {
    let code: i16 = row.try_get(col)?;

    OrderStatus::try_from(code).map_err(|e| sqlx::Error::ColumnDecode {
        index: col.to_string(),
        source: Box::new(e),
    })
}

pub(super) fn try_get_actor(row: &PgRow, col: &str) -> Result<Option<Actor>, sqlx::Error> {
    let code: Option<i16> = row.try_get(col)?;

    code.map(Actor::try_from)
        .transpose()
        .map_err(|e| sqlx::Error::ColumnDecode {
            index: col.to_string(),
            source: Box::new(e),
        })
}
