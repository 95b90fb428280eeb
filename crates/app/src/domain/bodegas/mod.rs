//! Bodegas

pub mod data;
pub mod errors;
pub mod records;
pub mod repository;
pub mod seed;
pub mod service;
mod validation;

pub use errors::{BodegasRepositoryError, BodegasServiceError, ValidationError};
pub use repository::{BodegasRepository, MemoryBodegasRepository};
pub use service::{BodegasService, DefaultBodegasService, MockBodegasService};
