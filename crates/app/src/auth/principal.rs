//! Principal kinds.

use std::fmt::Debug;

use jiff::SignedDuration;
use serde::{Deserialize, Serialize};

use crate::ids::TypedId;

/// Identifier of an authenticated principal of kind `P`.
pub type PrincipalId<P> = TypedId<P>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrincipalKind {
    Customer,
    Provider,
}

impl PrincipalKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Customer => "customer",
            Self::Provider => "provider",
        }
    }
}

/// A kind of account that can hold a session.
///
/// Each kind keeps its tokens in its own table and has its own default
/// lifetime; everything else about sessions is shared.
pub trait Principal: Debug + Copy + Send + Sync + Unpin + 'static {
    const KIND: PrincipalKind;

    const DEFAULT_TTL: SignedDuration;

    const UPSERT_TOKEN_SQL: &'static str;

    const FIND_TOKEN_SQL: &'static str;

    const DELETE_TOKEN_SQL: &'static str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Customer;

impl Principal for Customer {
    const KIND: PrincipalKind = PrincipalKind::Customer;
    const DEFAULT_TTL: SignedDuration = SignedDuration::from_hours(48);
    const UPSERT_TOKEN_SQL: &'static str = include_str!("sql/customer_upsert_token.sql");
    const FIND_TOKEN_SQL: &'static str = include_str!("sql/customer_find_token.sql");
    const DELETE_TOKEN_SQL: &'static str = include_str!("sql/customer_delete_token.sql");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Provider;

impl Principal for Provider {
    const KIND: PrincipalKind = PrincipalKind::Provider;
    const DEFAULT_TTL: SignedDuration = SignedDuration::from_hours(24);
    const UPSERT_TOKEN_SQL: &'static str = include_str!("sql/provider_upsert_token.sql");
    const FIND_TOKEN_SQL: &'static str = include_str!("sql/provider_find_token.sql");
    const DELETE_TOKEN_SQL: &'static str = include_str!("sql/provider_delete_token.sql");
}
