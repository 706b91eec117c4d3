//! Account Repositories

mod customers;
mod providers;

pub(crate) use customers::{CustomerLoginRecord, PgCustomersRepository};
pub(crate) use providers::{PgProvidersRepository, ProviderLoginRecord};
