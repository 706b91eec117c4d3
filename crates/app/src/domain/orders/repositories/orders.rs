//! Orders Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as, query_scalar};

use crate::domain::{
    accounts::models::{CustomerId, ProviderId},
    orders::{
        models::{
            Contact, Destination, NewOrder, Order, OrderId, OrderParties, OrderSummary,
            StatusFilter,
        },
        repositories::try_get_status,
    },
};

const CREATE_ORDER_SQL: &str = include_str!("../sql/create_order.sql");
const FIND_ORDER_SQL: &str = include_str!("../sql/find_order.sql");
const LOCK_PROVIDER_SQL: &str = include_str!("../sql/lock_provider.sql");
const CUSTOMER_EXISTS_SQL: &str = include_str!("../sql/customer_exists.sql");
const GET_ORDER_PARTIES_SQL: &str = include_str!("../sql/get_order_parties.sql");
const LIST_CUSTOMER_ORDERS_SQL: &str = include_str!("../sql/list_customer_orders.sql");
const LIST_PROVIDER_ORDERS_SQL: &str = include_str!("../sql/list_provider_orders.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgOrdersRepository;

impl PgOrdersRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    /// Whether the provider takes orders, holding a share lock on its row
    /// until the transaction ends. `None` when no such provider exists.
    pub(crate) async fn lock_provider(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        provider: ProviderId,
    ) -> Result<Option<bool>, sqlx::Error> {
        query_scalar::<Postgres, bool>(LOCK_PROVIDER_SQL)
            .bind(provider.into_i64())
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn customer_exists(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        customer: CustomerId,
    ) -> Result<bool, sqlx::Error> {
        query_scalar::<Postgres, bool>(CUSTOMER_EXISTS_SQL)
            .bind(customer.into_i64())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn create_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        customer: CustomerId,
        order: &NewOrder,
    ) -> Result<Order, sqlx::Error> {
        query_as::<Postgres, Order>(CREATE_ORDER_SQL)
            .bind(customer.into_i64())
            .bind(order.provider_id.into_i64())
            .bind(&order.destination.address)
            .bind(order.destination.latitude)
            .bind(order.destination.longitude)
            .bind(&order.destination.description)
            .bind(&order.notes)
            .bind(order.payment_method)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn find_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderId,
    ) -> Result<Option<Order>, sqlx::Error> {
        query_as::<Postgres, Order>(FIND_ORDER_SQL)
            .bind(order.into_i64())
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn get_parties(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderId,
    ) -> Result<OrderParties, sqlx::Error> {
        query_as::<Postgres, OrderParties>(GET_ORDER_PARTIES_SQL)
            .bind(order.into_i64())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn list_customer_orders(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        customer: CustomerId,
        filter: StatusFilter,
    ) -> Result<Vec<OrderSummary>, sqlx::Error> {
        query_as::<Postgres, OrderSummary>(LIST_CUSTOMER_ORDERS_SQL)
            .bind(customer.into_i64())
            .bind(filter.below)
            .bind(filter.above)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn list_provider_orders(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        provider: ProviderId,
        filter: StatusFilter,
    ) -> Result<Vec<OrderSummary>, sqlx::Error> {
        query_as::<Postgres, OrderSummary>(LIST_PROVIDER_ORDERS_SQL)
            .bind(provider.into_i64())
            .bind(filter.below)
            .bind(filter.above)
            .fetch_all(&mut **tx)
            .await
    }
}

fn try_get_destination(row: &PgRow) -> Result<Destination, sqlx::Error> {
    Ok(Destination {
        address: row.try_get("destination")?,
        latitude: row.try_get("destination_latitude")?,
        longitude: row.try_get("destination_longitude")?,
        description: row.try_get("destination_description")?,
    })
}

impl<'r> FromRow<'r, PgRow> for Order {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: OrderId::from_i64(row.try_get("id")?),
            customer_id: CustomerId::from_i64(row.try_get("customer_id")?),
            provider_id: ProviderId::from_i64(row.try_get("provider_id")?),
            destination: try_get_destination(row)?,
            notes: row.try_get("notes")?,
            payment_method: row.try_get("payment_method")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
        })
    }
}

impl<'r> FromRow<'r, PgRow> for OrderParties {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            customer: Contact {
                id: row.try_get("customer_id")?,
                full_name: row.try_get("customer_name")?,
                phone_number: row.try_get("customer_phone_number")?,
                address: row.try_get("customer_address")?,
                device_token: row.try_get("customer_device_token")?,
            },
            provider: Contact {
                id: row.try_get("provider_id")?,
                full_name: row.try_get("provider_name")?,
                phone_number: row.try_get("provider_phone_number")?,
                address: row.try_get("provider_address")?,
                device_token: row.try_get("provider_device_token")?,
            },
        })
    }
}

impl<'r> FromRow<'r, PgRow> for OrderSummary {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: OrderId::from_i64(row.try_get("id")?),
            customer_id: CustomerId::from_i64(row.try_get("customer_id")?),
            customer_name: row.try_get("customer_name")?,
            provider_id: ProviderId::from_i64(row.try_get("provider_id")?),
            provider_name: row.try_get("provider_name")?,
            destination: try_get_destination(row)?,
            total_price: row.try_get("total_price")?,
            status: try_get_status(row, "status")?,
            is_canceled: row.try_get("is_canceled")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            completed_at: row
                .try_get::<Option<SqlxTimestamp>, _>("completed_at")?
                .map(SqlxTimestamp::to_jiff),
        })
    }
}
