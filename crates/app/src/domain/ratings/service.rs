//! Ratings service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::{
        accounts::models::{CustomerId, ProviderId},
        ratings::{
            errors::RatingsServiceError,
            models::{ProviderRatings, Rating, RatingInput},
            repository::PgRatingsRepository,
        },
    },
};

#[derive(Debug, Clone)]
pub struct PgRatingsService {
    db: Db,
    repository: PgRatingsRepository,
}

impl PgRatingsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgRatingsRepository::new(),
        }
    }
}

#[async_trait]
impl RatingsService for PgRatingsService {
    async fn add_rating(
        &self,
        customer: CustomerId,
        rating: RatingInput,
    ) -> Result<Rating, RatingsServiceError> {
        if !rating.has_valid_score() {
            return Err(RatingsServiceError::InvalidScore);
        }

        let mut tx = self.db.begin().await?;

        if !self
            .repository
            .provider_exists(&mut tx, rating.provider_id)
            .await?
        {
            return Err(RatingsServiceError::NotFound);
        }

        let created = self
            .repository
            .create_rating(&mut tx, customer, rating)
            .await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn update_rating(
        &self,
        customer: CustomerId,
        rating: RatingInput,
    ) -> Result<Rating, RatingsServiceError> {
        if !rating.has_valid_score() {
            return Err(RatingsServiceError::InvalidScore);
        }

        let mut tx = self.db.begin().await?;

        let updated = self
            .repository
            .update_rating(&mut tx, customer, rating)
            .await?
            .ok_or(RatingsServiceError::NotFound)?;

        tx.commit().await?;

        Ok(updated)
    }

    async fn list_ratings(
        &self,
        provider: ProviderId,
    ) -> Result<ProviderRatings, RatingsServiceError> {
        let mut tx = self.db.begin().await?;

        let ratings = self
            .repository
            .get_provider_ratings(&mut tx, provider)
            .await?;

        tx.commit().await?;

        Ok(ProviderRatings {
            provider_id: provider,
            ratings,
        })
    }
}

#[automock]
#[async_trait]
pub trait RatingsService: Send + Sync {
    /// Rate a provider. Each customer rates each provider once.
    async fn add_rating(
        &self,
        customer: CustomerId,
        rating: RatingInput,
    ) -> Result<Rating, RatingsServiceError>;

    /// Change an existing rating.
    async fn update_rating(
        &self,
        customer: CustomerId,
        rating: RatingInput,
    ) -> Result<Rating, RatingsServiceError>;

    async fn list_ratings(
        &self,
        provider: ProviderId,
    ) -> Result<ProviderRatings, RatingsServiceError>;
}
