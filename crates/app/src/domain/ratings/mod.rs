//! Provider Ratings

pub mod errors;
pub mod models;
mod repository;
pub mod service;

pub use errors::RatingsServiceError;
pub use service::*;
