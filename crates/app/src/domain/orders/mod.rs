//! Orders

pub mod errors;
pub mod journey;
pub mod models;
mod repositories;
pub mod service;

pub use errors::OrdersServiceError;
pub use service::*;
