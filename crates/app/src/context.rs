//! App Context

use std::sync::Arc;

use jiff::SignedDuration;
use sqlx::PgPool;
use thiserror::Error;

use crate::{
    auth::{Customer, PgSessionService, Principal, Provider, SessionService, SigningKey},
    database::{self, Db, PoolSettings},
    domain::{
        accounts::{AccountsService, PgAccountsService},
        orders::{OrdersService, PgOrdersService},
        ratings::{PgRatingsService, RatingsService},
    },
    messages::Messages,
    notifications::{
        FcmConfig, FcmNotifier, LogNotifier, NotificationDispatcher, Notifier, NotifierError,
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    #[error("failed to build push client")]
    Push(#[source] NotifierError),
}

/// Signing key and token lifetimes shared by both session stores.
#[derive(Debug, Clone)]
pub struct SessionSettings {
    pub key: Arc<SigningKey>,
    pub customer_ttl: SignedDuration,
    pub provider_ttl: SignedDuration,
}

impl SessionSettings {
    /// Settings with each principal kind's default lifetime.
    #[must_use]
    pub fn with_default_ttls(key: SigningKey) -> Self {
        Self {
            key: Arc::new(key),
            customer_ttl: Customer::DEFAULT_TTL,
            provider_ttl: Provider::DEFAULT_TTL,
        }
    }
}

/// Push credentials per mobile app. A missing app only logs its pushes.
#[derive(Debug, Clone, Default)]
pub struct PushSettings {
    pub customer_app: Option<FcmConfig>,
    pub provider_app: Option<FcmConfig>,
}

impl PushSettings {
    fn notifier(config: Option<FcmConfig>) -> Result<Arc<dyn Notifier>, NotifierError> {
        let notifier: Arc<dyn Notifier> = match config {
            Some(config) => Arc::new(FcmNotifier::new(config)?),
            None => Arc::new(LogNotifier),
        };

        Ok(notifier)
    }

    /// # Errors
    ///
    /// Returns an error when a push client cannot be built.
    pub fn into_dispatcher(
        self,
        messages: Arc<Messages>,
    ) -> Result<NotificationDispatcher, NotifierError> {
        Ok(NotificationDispatcher::new(
            Self::notifier(self.customer_app)?,
            Self::notifier(self.provider_app)?,
            messages,
        ))
    }
}

#[derive(Clone)]
pub struct AppContext {
    pub customer_sessions: Arc<dyn SessionService<Customer>>,
    pub provider_sessions: Arc<dyn SessionService<Provider>>,
    pub accounts: Arc<dyn AccountsService>,
    pub orders: Arc<dyn OrdersService>,
    pub ratings: Arc<dyn RatingsService>,
    pub messages: Arc<Messages>,
}

impl AppContext {
    /// Build application context from a database URL.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection or building
    /// a push client fails.
    pub async fn from_database_url(
        url: &str,
        pool: PoolSettings,
        sessions: SessionSettings,
        push: PushSettings,
        messages: Messages,
    ) -> Result<Self, AppInitError> {
        let pool = database::connect_with(url, pool)
            .await
            .map_err(AppInitError::Database)?;

        Self::from_pool(pool, sessions, push, messages)
    }

    /// Wire the Postgres-backed services onto an existing pool.
    ///
    /// # Errors
    ///
    /// Returns an error when a push client cannot be built.
    pub fn from_pool(
        pool: PgPool,
        sessions: SessionSettings,
        push: PushSettings,
        messages: Messages,
    ) -> Result<Self, AppInitError> {
        let messages = Arc::new(messages);
        let notifications = push
            .into_dispatcher(messages.clone())
            .map_err(AppInitError::Push)?;
        let db = Db::new(pool.clone());

        let customer_sessions = PgSessionService::<Customer>::new(pool.clone(), sessions.key.clone())
            .with_ttl(sessions.customer_ttl);

        let provider_sessions = PgSessionService::<Provider>::new(pool, sessions.key)
            .with_ttl(sessions.provider_ttl);

        Ok(Self {
            customer_sessions: Arc::new(customer_sessions),
            provider_sessions: Arc::new(provider_sessions),
            accounts: Arc::new(PgAccountsService::new(db.clone())),
            orders: Arc::new(PgOrdersService::new(db.clone(), notifications)),
            ratings: Arc::new(PgRatingsService::new(db)),
            messages,
        })
    }
}
