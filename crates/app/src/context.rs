//! App Context

use std::{path::Path, sync::Arc};

use thiserror::Error;
use tracing::info;

use crate::domain::bodegas::{
    BodegasService, DefaultBodegasService, MemoryBodegasRepository,
    records::BodegaRecord,
    seed::{self, SeedError},
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("invalid seed data: {0}")]
    Seed(#[from] SeedError),
}

#[derive(Clone)]
pub struct AppContext {
    pub bodegas: Arc<dyn BodegasService>,
}

impl AppContext {
    /// Build application context over the given records.
    #[must_use]
    pub fn new(bodegas: Vec<BodegaRecord>) -> Self {
        let repository = Arc::new(MemoryBodegasRepository::new(bodegas));

        Self {
            bodegas: Arc::new(DefaultBodegasService::new(repository)),
        }
    }

    /// Build application context from a seed file, or the built-in layout
    /// when no file is given.
    ///
    /// # Errors
    ///
    /// Returns an error when the seed cannot be read or fails validation.
    pub fn seeded(seed_file: Option<&Path>) -> Result<Self, AppInitError> {
        let bodegas = match seed_file {
            Some(path) => seed::load_seed_file(path)?,
            None => seed::default_bodegas()?,
        };

        info!(count = bodegas.len(), "bodegas seeded");

        Ok(Self::new(bodegas))
    }
}
