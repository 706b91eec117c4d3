//! Depot helper extensions.

use std::any::Any;

use panggilin_app::auth::{Principal, PrincipalId};
use salvo::prelude::Depot;

use crate::errors::ApiError;

/// Typed access to what middleware left in the depot.
pub(crate) trait DepotExt {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, ApiError>;

    fn insert_principal<P: Principal>(&mut self, principal: PrincipalId<P>);

    /// The principal the auth middleware admitted.
    fn principal<P: Principal>(&self) -> Result<PrincipalId<P>, ApiError>;
}

impl DepotExt for Depot {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, ApiError> {
        self.obtain::<T>().map_err(|_ignored| ApiError::internal())
    }

    fn insert_principal<P: Principal>(&mut self, principal: PrincipalId<P>) {
        self.inject(principal);
    }

    fn principal<P: Principal>(&self) -> Result<PrincipalId<P>, ApiError> {
        self.obtain_or_500::<PrincipalId<P>>().copied()
    }
}
