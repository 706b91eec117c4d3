//! Session errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

use crate::auth::TokenError;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("token not recognised")]
    Unauthorized,

    #[error("token expired")]
    Expired,

    #[error("principal does not exist")]
    UnknownPrincipal,

    #[error("token expiry is out of range")]
    Expiry(#[source] jiff::Error),

    #[error("storage error")]
    Sql(#[source] Error),

    #[error("token processing error")]
    Token(#[source] TokenError),
}

impl From<Error> for SessionError {
    fn from(error: Error) -> Self {
        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::ForeignKeyViolation) => Self::UnknownPrincipal,
            Some(ErrorKind::Other | _) | None => Self::Sql(error),
        }
    }
}

impl From<TokenError> for SessionError {
    fn from(error: TokenError) -> Self {
        Self::Token(error)
    }
}
