//! Rating Errors

use panggilin_app::{domain::ratings::RatingsServiceError, messages::ErrorMessages};
use tracing::error;

use crate::errors::ApiError;

pub(crate) fn into_api_error(error: RatingsServiceError, messages: &ErrorMessages) -> ApiError {
    let message = match error {
        RatingsServiceError::AlreadyExists => &messages.rating_exists,
        RatingsServiceError::NotFound => &messages.rating_not_found,
        RatingsServiceError::InvalidScore
        | RatingsServiceError::InvalidReference
        | RatingsServiceError::MissingRequiredData
        | RatingsServiceError::InvalidData => &messages.invalid_request,
        RatingsServiceError::Sql(source) => {
            error!("rating storage failed: {source}");

            &messages.request_failed
        }
    };

    ApiError::bad_request(message)
}
