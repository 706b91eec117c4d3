//! Authentication
//!
//! Passwords, signed bearer tokens and the per-kind session stores.

mod errors;
mod models;
pub mod passwords;
mod principal;
mod repository;
mod service;
mod token;

pub use errors::*;
pub use models::IssuedToken;
pub use principal::*;
pub use service::*;
pub use token::*;
