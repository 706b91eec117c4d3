//! Rating response bodies.

use panggilin_app::domain::ratings::models::{ProviderRatings, Rating};
use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct RatingResponse {
    pub id: i64,
    pub provider_id: i64,
    pub customer_id: i64,
    pub score: i16,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<Rating> for RatingResponse {
    fn from(rating: Rating) -> Self {
        Self {
            id: rating.id.into_i64(),
            provider_id: rating.provider_id.into_i64(),
            customer_id: rating.customer_id.into_i64(),
            score: rating.score,
            created_at: rating.created_at.as_second(),
            updated_at: rating.updated_at.as_second(),
        }
    }
}

/// Provider Ratings Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProviderRatingsResponse {
    pub provider_id: i64,
    pub count: usize,

    /// Mean score, 0 before the first rating
    pub average: f64,
    pub ratings: Vec<RatingResponse>,
}

impl From<ProviderRatings> for ProviderRatingsResponse {
    fn from(ratings: ProviderRatings) -> Self {
        Self {
            provider_id: ratings.provider_id.into_i64(),
            count: ratings.count(),
            average: ratings.average().unwrap_or_default(),
            ratings: ratings.ratings.into_iter().map(Into::into).collect(),
        }
    }
}
