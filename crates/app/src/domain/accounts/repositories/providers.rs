//! Providers Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};

use crate::domain::accounts::models::{NewProvider, ProviderAccount, ProviderId};

const FIND_PROVIDER_BY_EMAIL_SQL: &str = include_str!("../sql/find_provider_by_email.sql");
const GET_PROVIDER_SQL: &str = include_str!("../sql/get_provider.sql");
const CREATE_PROVIDER_SQL: &str = include_str!("../sql/create_provider.sql");
const UPDATE_PROVIDER_DEVICE_TOKEN_SQL: &str =
    include_str!("../sql/update_provider_device_token.sql");
const SET_PROVIDER_ACTIVE_SQL: &str = include_str!("../sql/set_provider_active.sql");
const SET_PROVIDER_MAX_DISTANCE_SQL: &str = include_str!("../sql/set_provider_max_distance.sql");

#[derive(Debug, Clone)]
pub(crate) struct ProviderLoginRecord {
    pub(crate) account: ProviderAccount,
    pub(crate) password_hash: String,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct PgProvidersRepository;

impl PgProvidersRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn find_by_email(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        email: &str,
    ) -> Result<Option<ProviderLoginRecord>, sqlx::Error> {
        query_as::<Postgres, ProviderLoginRecord>(FIND_PROVIDER_BY_EMAIL_SQL)
            .bind(email)
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn get_provider(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        provider: ProviderId,
    ) -> Result<ProviderAccount, sqlx::Error> {
        query_as::<Postgres, ProviderAccount>(GET_PROVIDER_SQL)
            .bind(provider.into_i64())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn create_provider(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        provider: &NewProvider,
        password_hash: &str,
    ) -> Result<ProviderAccount, sqlx::Error> {
        query_as::<Postgres, ProviderAccount>(CREATE_PROVIDER_SQL)
            .bind(&provider.email)
            .bind(password_hash)
            .bind(&provider.full_name)
            .bind(provider.phone_number.as_deref())
            .bind(provider.address.as_deref())
            .bind(provider.max_distance_km)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn update_device_token(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        provider: ProviderId,
        device_token: &str,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(UPDATE_PROVIDER_DEVICE_TOKEN_SQL)
            .bind(provider.into_i64())
            .bind(device_token)
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    pub(crate) async fn set_active(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        provider: ProviderId,
        active: bool,
    ) -> Result<ProviderAccount, sqlx::Error> {
        query_as::<Postgres, ProviderAccount>(SET_PROVIDER_ACTIVE_SQL)
            .bind(provider.into_i64())
            .bind(active)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn set_max_distance(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        provider: ProviderId,
        max_distance_km: i64,
    ) -> Result<ProviderAccount, sqlx::Error> {
        query_as::<Postgres, ProviderAccount>(SET_PROVIDER_MAX_DISTANCE_SQL)
            .bind(provider.into_i64())
            .bind(max_distance_km)
            .fetch_one(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for ProviderAccount {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: ProviderId::from_i64(row.try_get("id")?),
            email: row.try_get("email")?,
            full_name: row.try_get("full_name")?,
            phone_number: row.try_get("phone_number")?,
            address: row.try_get("address")?,
            is_active: row.try_get("is_active")?,
            max_distance_km: row.try_get("max_distance_km")?,
            device_token: row.try_get("device_token")?,
            joined_at: row.try_get::<SqlxTimestamp, _>("joined_at")?.to_jiff(),
        })
    }
}

impl<'r> FromRow<'r, PgRow> for ProviderLoginRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            account: ProviderAccount::from_row(row)?,
            password_hash: row.try_get("password_hash")?,
        })
    }
}
