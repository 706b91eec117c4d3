//! Session models.

use jiff::Timestamp;

use crate::auth::{Principal, PrincipalId};

/// A bearer token handed to a client after login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    pub token: String,
    pub expires_at: Timestamp,
}

/// A token row as stored for principal kind `P`.
#[derive(Debug, Clone)]
pub(crate) struct StoredToken<P: Principal> {
    pub principal_id: PrincipalId<P>,
    pub expires_at: Timestamp,
}
