//! Store Config

use std::path::PathBuf;

use clap::Args;

/// Record store settings.
#[derive(Debug, Args)]
pub struct StoreConfig {
    /// JSON seed file; the built-in warehouse layout is used when omitted
    #[arg(long, env = "BODEGAS_SEED_FILE")]
    pub seed_file: Option<PathBuf>,

    /// Supervisor shown on the floor plan
    #[arg(long, env = "WAREHOUSE_SUPERVISOR", default_value = "María Gómez")]
    pub supervisor: String,
}
