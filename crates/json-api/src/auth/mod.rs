//! Authentication

mod errors;
pub(crate) mod middleware;
mod sessions;

pub(crate) use errors::*;
pub(crate) use sessions::*;
