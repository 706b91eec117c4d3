//! Panggilin Domain Concerns

pub mod accounts;
pub mod orders;
pub mod ratings;
