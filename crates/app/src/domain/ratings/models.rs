//! Rating Models

use jiff::Timestamp;

use crate::{
    domain::accounts::models::{CustomerId, ProviderId},
    ids::TypedId,
};

/// Rating ID
pub type RatingId = TypedId<Rating>;

pub const MIN_SCORE: i16 = 1;
pub const MAX_SCORE: i16 = 5;

/// One customer's score for one provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rating {
    pub id: RatingId,
    pub provider_id: ProviderId,
    pub customer_id: CustomerId,
    pub score: i16,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RatingInput {
    pub provider_id: ProviderId,
    pub score: i16,
}

impl RatingInput {
    #[must_use]
    pub fn has_valid_score(&self) -> bool {
        (MIN_SCORE..=MAX_SCORE).contains(&self.score)
    }
}

/// All ratings for a provider with their aggregate.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderRatings {
    pub provider_id: ProviderId,
    pub ratings: Vec<Rating>,
}

impl ProviderRatings {
    #[must_use]
    pub fn count(&self) -> usize {
        self.ratings.len()
    }

    /// Mean score, or `None` before the first rating.
    #[must_use]
    pub fn average(&self) -> Option<f64> {
        if self.ratings.is_empty() {
            return None;
        }

        let total: i64 = self.ratings.iter().map(|r| i64::from(r.score)).sum();

        #[expect(clippy::cast_precision_loss, reason = "rating sums are small")]
        let average = total as f64 / self.ratings.len() as f64;

        Some(average)
    }
}
