//! Ratings Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as, query_scalar};

use crate::domain::{
    accounts::models::{CustomerId, ProviderId},
    ratings::models::{Rating, RatingId, RatingInput},
};

const PROVIDER_EXISTS_SQL: &str = include_str!("sql/provider_exists.sql");
const CREATE_RATING_SQL: &str = include_str!("sql/create_rating.sql");
const UPDATE_RATING_SQL: &str = include_str!("sql/update_rating.sql");
const GET_PROVIDER_RATINGS_SQL: &str = include_str!("sql/get_provider_ratings.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgRatingsRepository;

impl PgRatingsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn provider_exists(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        provider: ProviderId,
    ) -> Result<bool, sqlx::Error> {
        query_scalar::<Postgres, bool>(PROVIDER_EXISTS_SQL)
            .bind(provider.into_i64())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn create_rating(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        customer: CustomerId,
        rating: RatingInput,
    ) -> Result<Rating, sqlx::Error> {
        query_as::<Postgres, Rating>(CREATE_RATING_SQL)
            .bind(rating.provider_id.into_i64())
            .bind(customer.into_i64())
            .bind(rating.score)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn update_rating(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        customer: CustomerId,
        rating: RatingInput,
    ) -> Result<Option<Rating>, sqlx::Error> {
        query_as::<Postgres, Rating>(UPDATE_RATING_SQL)
            .bind(rating.provider_id.into_i64())
            .bind(customer.into_i64())
            .bind(rating.score)
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn get_provider_ratings(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        provider: ProviderId,
    ) -> Result<Vec<Rating>, sqlx::Error> {
        query_as::<Postgres, Rating>(GET_PROVIDER_RATINGS_SQL)
            .bind(provider.into_i64())
            .fetch_all(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for Rating {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: RatingId::from_i64(row.try_get("id")?),
            provider_id: ProviderId::from_i64(row.try_get("provider_id")?),
            customer_id: CustomerId::from_i64(row.try_get("customer_id")?),
            score: row.try_get("score")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
