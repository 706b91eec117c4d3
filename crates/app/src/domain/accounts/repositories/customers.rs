//! Customers Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};

use crate::domain::accounts::models::{
    AuthMode, CustomerAccount, CustomerId, CustomerProfileUpdate, NewCustomer,
};

const FIND_CUSTOMER_BY_EMAIL_SQL: &str = include_str!("../sql/find_customer_by_email.sql");
const GET_CUSTOMER_SQL: &str = include_str!("../sql/get_customer.sql");
const CREATE_CUSTOMER_SQL: &str = include_str!("../sql/create_customer.sql");
const CREATE_CUSTOMER_IF_ABSENT_SQL: &str = include_str!("../sql/create_customer_if_absent.sql");
const UPDATE_CUSTOMER_DEVICE_TOKEN_SQL: &str =
    include_str!("../sql/update_customer_device_token.sql");
const UPDATE_CUSTOMER_PROFILE_SQL: &str = include_str!("../sql/update_customer_profile.sql");

/// A customer together with what they log in with.
#[derive(Debug, Clone)]
pub(crate) struct CustomerLoginRecord {
    pub(crate) account: CustomerAccount,
    pub(crate) password_hash: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct PgCustomersRepository;

impl PgCustomersRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn find_by_email(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        email: &str,
    ) -> Result<Option<CustomerLoginRecord>, sqlx::Error> {
        query_as::<Postgres, CustomerLoginRecord>(FIND_CUSTOMER_BY_EMAIL_SQL)
            .bind(email)
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn get_customer(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        customer: CustomerId,
    ) -> Result<CustomerAccount, sqlx::Error> {
        query_as::<Postgres, CustomerAccount>(GET_CUSTOMER_SQL)
            .bind(customer.into_i64())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn create_customer(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        customer: &NewCustomer,
        password_hash: &str,
        device_token: Option<&str>,
    ) -> Result<CustomerAccount, sqlx::Error> {
        query_as::<Postgres, CustomerAccount>(CREATE_CUSTOMER_SQL)
            .bind(&customer.email)
            .bind(password_hash)
            .bind(AuthMode::Email.as_str())
            .bind(&customer.full_name)
            .bind(customer.phone_number.as_deref())
            .bind(device_token)
            .fetch_one(&mut **tx)
            .await
    }

    /// Insert a social customer unless one already uses the email.
    pub(crate) async fn create_social_if_absent(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        email: &str,
        full_name: &str,
        device_token: Option<&str>,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(CREATE_CUSTOMER_IF_ABSENT_SQL)
            .bind(email)
            .bind(full_name)
            .bind(device_token)
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    pub(crate) async fn update_device_token(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        customer: CustomerId,
        device_token: &str,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(UPDATE_CUSTOMER_DEVICE_TOKEN_SQL)
            .bind(customer.into_i64())
            .bind(device_token)
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    pub(crate) async fn update_profile(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        customer: CustomerId,
        profile: &CustomerProfileUpdate,
    ) -> Result<CustomerAccount, sqlx::Error> {
        query_as::<Postgres, CustomerAccount>(UPDATE_CUSTOMER_PROFILE_SQL)
            .bind(customer.into_i64())
            .bind(&profile.full_name)
            .bind(profile.phone_number.as_deref())
            .bind(profile.address.as_deref())
            .fetch_one(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for CustomerAccount {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let auth_mode: String = row.try_get("auth_mode")?;

        Ok(Self {
            id: CustomerId::from_i64(row.try_get("id")?),
            email: row.try_get("email")?,
            auth_mode: auth_mode
                .parse::<AuthMode>()
                .map_err(|e| sqlx::Error::ColumnDecode {
                    index: "auth_mode".to_string(),
                    source: Box::new(e),
                })?,
            full_name: row.try_get("full_name")?,
            phone_number: row.try_get("phone_number")?,
            address: row.try_get("address")?,
            device_token: row.try_get("device_token")?,
            joined_at: row.try_get::<SqlxTimestamp, _>("joined_at")?.to_jiff(),
        })
    }
}

impl<'r> FromRow<'r, PgRow> for CustomerLoginRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            account: CustomerAccount::from_row(row)?,
            password_hash: row.try_get("password_hash")?,
        })
    }
}
