//! Seed data for the record store.

use std::{fs, io, path::Path};

use rustc_hash::FxHashSet;
use thiserror::Error;

use crate::domain::bodegas::{
    data::BodegaPatch,
    errors::ValidationError,
    records::BodegaRecord,
    validation::check_date_range,
};

const DEFAULT_SEED: &str = include_str!("seed/bodegas.json");

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read seed file: {0}")]
    Read(#[source] io::Error),

    #[error("malformed seed data: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("duplicate bodega id `{0}`")]
    DuplicateId(String),

    #[error("duplicate bodega codigo `{0}`")]
    DuplicateCodigo(String),

    #[error("bodega `{id}` is invalid: {source}")]
    Invalid {
        id: String,
        source: ValidationError,
    },

    #[error("bodega `{id}` ends before it starts")]
    EndBeforeStart { id: String },
}

/// Built-in warehouse layout, A1 through E2.
///
/// # Errors
///
/// Returns an error if the embedded seed fails to parse or validate.
pub fn default_bodegas() -> Result<Vec<BodegaRecord>, SeedError> {
    parse_seed(DEFAULT_SEED)
}

/// Read and check a JSON seed file: an array of bodega records.
///
/// # Errors
///
/// Returns an error if the file cannot be read, does not parse, or holds a
/// record that breaks a record invariant.
pub fn load_seed_file(path: &Path) -> Result<Vec<BodegaRecord>, SeedError> {
    let contents = fs::read_to_string(path).map_err(SeedError::Read)?;

    parse_seed(&contents)
}

fn parse_seed(contents: &str) -> Result<Vec<BodegaRecord>, SeedError> {
    let bodegas: Vec<BodegaRecord> = serde_json::from_str(contents).map_err(SeedError::Parse)?;

    check_seed(&bodegas)?;

    Ok(bodegas)
}

/// Check identifiers are unique and every record passes update validation.
///
/// # Errors
///
/// Returns the first offending record.
pub fn check_seed(bodegas: &[BodegaRecord]) -> Result<(), SeedError> {
    let mut ids = FxHashSet::default();
    let mut codigos = FxHashSet::default();

    for bodega in bodegas {
        if !ids.insert(bodega.id.as_str()) {
            return Err(SeedError::DuplicateId(bodega.id.clone()));
        }

        if !codigos.insert(bodega.codigo.as_str()) {
            return Err(SeedError::DuplicateCodigo(bodega.codigo.clone()));
        }

        let payload = serde_json::to_value(bodega).map_err(SeedError::Parse)?;

        BodegaPatch::from(payload)
            .sanitize()
            .map_err(|source| SeedError::Invalid {
                id: bodega.id.clone(),
                source,
            })?;

        if check_date_range(bodega).is_err() {
            return Err(SeedError::EndBeforeStart {
                id: bodega.id.clone(),
            });
        }
    }

    Ok(())
}
