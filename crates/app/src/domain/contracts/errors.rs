//! Contract errors.

use thiserror::Error;

use crate::domain::bodegas::records::EstadoBodega;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContractsError {
    #[error("bodega in state {0} has no contract to generate")]
    NotContractable(EstadoBodega),
}
