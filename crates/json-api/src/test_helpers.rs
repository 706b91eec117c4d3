//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use panggilin_app::{
    auth::{Customer, MockSessionService, Provider},
    context::AppContext,
    domain::{
        accounts::{
            MockAccountsService,
            models::{AuthMode, CustomerAccount, CustomerId, ProviderAccount, ProviderId},
        },
        orders::MockOrdersService,
        ratings::MockRatingsService,
    },
    messages::Messages,
};
use salvo::{affix_state::inject, prelude::*};

use crate::{extensions::*, state::State};

pub(crate) const TEST_CUSTOMER_ID: CustomerId = CustomerId::from_i64(1);
pub(crate) const TEST_PROVIDER_ID: ProviderId = ProviderId::from_i64(2);

/// App context made of mocks; any service left unset rejects every call.
#[derive(Default)]
pub(crate) struct TestApp {
    customer_sessions: Option<MockSessionService<Customer>>,
    provider_sessions: Option<MockSessionService<Provider>>,
    accounts: Option<MockAccountsService>,
    orders: Option<MockOrdersService>,
    ratings: Option<MockRatingsService>,
    messages: Option<Messages>,
}

impl TestApp {
    pub(crate) fn customer_sessions(mut self, sessions: MockSessionService<Customer>) -> Self {
        self.customer_sessions = Some(sessions);
        self
    }

    pub(crate) fn provider_sessions(mut self, sessions: MockSessionService<Provider>) -> Self {
        self.provider_sessions = Some(sessions);
        self
    }

    pub(crate) fn accounts(mut self, accounts: MockAccountsService) -> Self {
        self.accounts = Some(accounts);
        self
    }

    pub(crate) fn orders(mut self, orders: MockOrdersService) -> Self {
        self.orders = Some(orders);
        self
    }

    pub(crate) fn ratings(mut self, ratings: MockRatingsService) -> Self {
        self.ratings = Some(ratings);
        self
    }

    pub(crate) fn messages(mut self, messages: Messages) -> Self {
        self.messages = Some(messages);
        self
    }

    pub(crate) fn into_state(self) -> Arc<State> {
        State::from_app_context(AppContext {
            customer_sessions: Arc::new(self.customer_sessions.unwrap_or_default()),
            provider_sessions: Arc::new(self.provider_sessions.unwrap_or_default()),
            accounts: Arc::new(self.accounts.unwrap_or_default()),
            orders: Arc::new(self.orders.unwrap_or_default()),
            ratings: Arc::new(self.ratings.unwrap_or_default()),
            messages: Arc::new(self.messages.unwrap_or_default()),
        })
    }
}

#[salvo::handler]
pub(crate) async fn as_customer(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    depot.insert_principal(TEST_CUSTOMER_ID);
    ctrl.call_next(req, depot, res).await;
}

#[salvo::handler]
pub(crate) async fn as_provider(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    depot.insert_principal(TEST_PROVIDER_ID);
    ctrl.call_next(req, depot, res).await;
}

/// Route reachable without a token.
pub(crate) fn public_service(app: TestApp, route: Router) -> Service {
    Service::new(Router::new().hoop(inject(app.into_state())).push(route))
}

/// Route called by [`TEST_CUSTOMER_ID`].
pub(crate) fn customer_service(app: TestApp, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(app.into_state()))
            .hoop(as_customer)
            .push(route),
    )
}

/// Route called by [`TEST_PROVIDER_ID`].
pub(crate) fn provider_service(app: TestApp, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(app.into_state()))
            .hoop(as_provider)
            .push(route),
    )
}

pub(crate) fn make_customer() -> CustomerAccount {
    CustomerAccount {
        id: TEST_CUSTOMER_ID,
        email: "siti@example.com".to_string(),
        auth_mode: AuthMode::Email,
        full_name: "Siti Rahma".to_string(),
        phone_number: Some("081234567890".to_string()),
        address: None,
        device_token: None,
        joined_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_provider(is_active: bool) -> ProviderAccount {
    ProviderAccount {
        id: TEST_PROVIDER_ID,
        email: "bengkel@example.com".to_string(),
        full_name: "Bengkel Jaya".to_string(),
        phone_number: Some("082111222333".to_string()),
        address: Some("Jl. Merdeka 1, Bandung".to_string()),
        is_active,
        max_distance_km: 10,
        device_token: None,
        joined_at: Timestamp::UNIX_EPOCH,
    }
}
