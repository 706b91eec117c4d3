//! Session lookup per principal kind.

use panggilin_app::{
    auth::{Customer, Principal, Provider, SessionService},
    context::AppContext,
};

/// Picks the session store of principal kind `P` out of the app context.
pub(crate) trait SessionsFor<P: Principal> {
    fn sessions(&self) -> &dyn SessionService<P>;
}

impl SessionsFor<Customer> for AppContext {
    fn sessions(&self) -> &dyn SessionService<Customer> {
        self.customer_sessions.as_ref()
    }
}

impl SessionsFor<Provider> for AppContext {
    fn sessions(&self) -> &dyn SessionService<Provider> {
        self.provider_sessions.as_ref()
    }
}
