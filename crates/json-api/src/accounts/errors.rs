//! Account Errors

use panggilin_app::{domain::accounts::AccountsServiceError, messages::ErrorMessages};
use tracing::error;

use crate::errors::ApiError;

pub(crate) fn into_api_error(error: AccountsServiceError, messages: &ErrorMessages) -> ApiError {
    match error {
        AccountsServiceError::AlreadyExists => ApiError::bad_request(&messages.account_exists),
        AccountsServiceError::NotFound | AccountsServiceError::InvalidCredentials => {
            ApiError::bad_request(&messages.account_not_found)
        }
        AccountsServiceError::InvalidReference
        | AccountsServiceError::MissingRequiredData
        | AccountsServiceError::InvalidData => ApiError::bad_request(&messages.invalid_request),
        AccountsServiceError::Password(source) => {
            error!("failed to hash password: {source}");

            ApiError::bad_request(&messages.request_failed)
        }
        AccountsServiceError::Sql(source) => {
            error!("account storage failed: {source}");

            ApiError::bad_request(&messages.request_failed)
        }
    }
}
