//! Session token repository.

use std::marker::PhantomData;

use jiff::Timestamp;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, PgPool, Postgres, Row, postgres::PgRow, query, query_as};

use crate::auth::{IssuedToken, Principal, PrincipalId, models::StoredToken};

#[derive(Debug, Clone)]
pub(crate) struct PgSessionRepository<P: Principal> {
    pool: PgPool,
    principal: PhantomData<P>,
}

impl<P: Principal> PgSessionRepository<P> {
    #[must_use]
    pub(crate) fn new(pool: PgPool) -> Self {
        Self {
            pool,
            principal: PhantomData,
        }
    }

    /// Store `candidate` for the principal unless a token that is still live
    /// at `now` already exists, in which case that one is returned.
    pub(crate) async fn upsert_token(
        &self,
        principal: PrincipalId<P>,
        candidate: &str,
        expires_at: Timestamp,
        now: Timestamp,
    ) -> Result<IssuedToken, sqlx::Error> {
        query_as::<Postgres, IssuedToken>(P::UPSERT_TOKEN_SQL)
            .bind(principal.into_i64())
            .bind(candidate)
            .bind(SqlxTimestamp::from(expires_at))
            .bind(SqlxTimestamp::from(now))
            .fetch_one(&self.pool)
            .await
    }

    pub(crate) async fn find_token(
        &self,
        token: &str,
    ) -> Result<Option<StoredToken<P>>, sqlx::Error> {
        query_as::<Postgres, StoredToken<P>>(P::FIND_TOKEN_SQL)
            .bind(token)
            .fetch_optional(&self.pool)
            .await
    }

    pub(crate) async fn delete_token(&self, token: &str) -> Result<u64, sqlx::Error> {
        let rows_affected = query(P::DELETE_TOKEN_SQL)
            .bind(token)
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for IssuedToken {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            token: row.try_get("token")?,
            expires_at: row.try_get::<SqlxTimestamp, _>("expires_at")?.to_jiff(),
        })
    }
}

impl<'r, P: Principal> FromRow<'r, PgRow> for StoredToken<P> {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            principal_id: PrincipalId::from_i64(row.try_get("principal_id")?),
            expires_at: row.try_get::<SqlxTimestamp, _>("expires_at")?.to_jiff(),
        })
    }
}
