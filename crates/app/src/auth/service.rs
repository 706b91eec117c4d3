//! Session service.

use std::sync::Arc;

use async_trait::async_trait;
use jiff::{SignedDuration, Timestamp};
use mockall::automock;
use sqlx::PgPool;
use tracing::debug;

use crate::auth::{
    IssuedToken, Principal, PrincipalId, SessionClaims, SessionError, SigningKey,
    repository::PgSessionRepository, sign_token, verify_token,
};

#[derive(Debug, Clone)]
pub struct PgSessionService<P: Principal> {
    repository: PgSessionRepository<P>,
    key: Arc<SigningKey>,
    ttl: SignedDuration,
}

impl<P: Principal> PgSessionService<P> {
    #[must_use]
    pub fn new(pool: PgPool, key: Arc<SigningKey>) -> Self {
        Self {
            repository: PgSessionRepository::new(pool),
            key,
            ttl: P::DEFAULT_TTL,
        }
    }

    /// Override how long freshly minted tokens stay valid.
    #[must_use]
    pub fn with_ttl(mut self, ttl: SignedDuration) -> Self {
        self.ttl = ttl;
        self
    }
}

#[async_trait]
impl<P: Principal> SessionService<P> for PgSessionService<P> {
    async fn issue_token(
        &self,
        principal: PrincipalId<P>,
        email: &str,
    ) -> Result<IssuedToken, SessionError> {
        let now = Timestamp::now();
        let expires_at = now.checked_add(self.ttl).map_err(SessionError::Expiry)?;

        let claims = SessionClaims::new(P::KIND, principal.into_i64(), email, expires_at);
        let candidate = sign_token(&self.key, &claims)?;

        let issued = self
            .repository
            .upsert_token(principal, &candidate, expires_at, now)
            .await?;

        debug!(
            kind = P::KIND.as_str(),
            principal_id = %principal,
            reused = issued.token != candidate,
            "issued session token"
        );

        Ok(issued)
    }

    async fn validate_token(&self, token: &str) -> Result<PrincipalId<P>, SessionError> {
        let claims = verify_token(&self.key, token).map_err(|error| {
            debug!(kind = P::KIND.as_str(), "rejected session token: {error}");

            SessionError::Unauthorized
        })?;

        if claims.kind != P::KIND {
            return Err(SessionError::Unauthorized);
        }

        let stored = self
            .repository
            .find_token(token)
            .await?
            .ok_or(SessionError::Unauthorized)?;

        if stored.principal_id.into_i64() != claims.sub {
            return Err(SessionError::Unauthorized);
        }

        if stored.expires_at <= Timestamp::now() {
            self.repository.delete_token(token).await?;

            debug!(
                kind = P::KIND.as_str(),
                principal_id = %stored.principal_id,
                "removed expired session token"
            );

            return Err(SessionError::Expired);
        }

        Ok(stored.principal_id)
    }
}

/// Bearer sessions for one principal kind.
#[automock]
#[async_trait]
pub trait SessionService<P: Principal>: Send + Sync {
    /// Mint a token for the principal, or hand back the one it already holds
    /// if that is still live.
    async fn issue_token(
        &self,
        principal: PrincipalId<P>,
        email: &str,
    ) -> Result<IssuedToken, SessionError>;

    /// Resolve a bearer token to its principal.
    ///
    /// An expired token is deleted before `Expired` is returned, so a second
    /// attempt with the same string yields `Unauthorized`.
    async fn validate_token(&self, token: &str) -> Result<PrincipalId<P>, SessionError>;
}
