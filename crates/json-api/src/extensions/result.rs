//! Result helper extensions for HTTP handlers.

use std::fmt::Display;

use tracing::debug;

use crate::errors::ApiError;

/// Reject malformed client input with a 400 carrying a catalog message.
pub(crate) trait ResultExt<T> {
    fn or_400(self, context: &str, message: &str) -> Result<T, ApiError>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Display,
{
    fn or_400(self, context: &str, message: &str) -> Result<T, ApiError> {
        self.map_err(|error| {
            debug!("{context}: {error}");

            ApiError::bad_request(message)
        })
    }
}

#[cfg(test)]
mod tests {
    use salvo::http::StatusCode;

    use super::*;

    #[test]
    fn errors_become_bad_requests_with_the_given_message() {
        let result: Result<(), &str> = Err("boom");

        let error = result.or_400("parsing", "Invalid request").err();

        assert_eq!(
            error.map(|error| (error.status, error.message)),
            Some((StatusCode::BAD_REQUEST, "Invalid request".to_string()))
        );
    }
}
