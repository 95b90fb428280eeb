//! Bodegas

mod errors;
mod handlers;
mod models;

pub(crate) use errors::into_status_error;
pub(crate) use handlers::*;
