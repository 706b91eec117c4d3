//! Session Errors

use panggilin_app::{auth::SessionError, messages::ErrorMessages};
use tracing::error;

use crate::errors::ApiError;

/// Token problems are 401s; anything else went wrong while checking it.
pub(crate) fn into_api_error(error: SessionError, messages: &ErrorMessages) -> ApiError {
    match error {
        SessionError::Unauthorized | SessionError::UnknownPrincipal => {
            ApiError::unauthorized(&messages.invalid_token)
        }
        SessionError::Expired => ApiError::unauthorized(&messages.expired_token),
        SessionError::Expiry(source) => {
            error!("failed to compute token expiry: {source}");

            ApiError::bad_request(&messages.request_failed)
        }
        SessionError::Token(source) => {
            error!("failed to sign session token: {source}");

            ApiError::bad_request(&messages.request_failed)
        }
        SessionError::Sql(source) => {
            error!("session storage failed: {source}");

            ApiError::bad_request(&messages.request_failed)
        }
    }
}
