//! Panggilin domain services, persistence and push notifications.

pub mod auth;
pub mod context;
pub mod database;
pub mod domain;
pub mod ids;
pub mod messages;
pub mod notifications;

#[cfg(test)]
mod test;
