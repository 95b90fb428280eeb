//! Bodegas service errors.

use thiserror::Error;

use crate::domain::contracts::ContractsError;

/// A field of an update payload that failed validation.
///
/// The display text is the message shown to the dashboard user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("El nombre debe ser un texto no vacío.")]
    Nombre,

    #[error("El nombre del contratante debe ser un texto válido.")]
    ContratanteNombre,

    #[error("El RUT del contratante no es válido.")]
    ContratanteRut,

    #[error("El teléfono del contratante no es válido.")]
    ContratanteTelefono,

    #[error("El correo electrónico del contratante no es válido.")]
    ContratanteEmail,

    #[error("Los metros cuadrados deben ser un número mayor a cero.")]
    MetrosCuadrados,

    #[error("El piso debe ser un número entero.")]
    Piso,

    #[error("El estado proporcionado no es válido.")]
    Estado,

    #[error("La tarifa en UF debe ser un número mayor a cero.")]
    TarifaUf,

    #[error("La fecha de contratación no es válida.")]
    FechaContratacion,

    #[error("La fecha de término no es válida.")]
    FechaTermino,

    #[error("Las observaciones deben ser texto.")]
    Observaciones,
}

#[derive(Debug, Error)]
pub enum BodegasRepositoryError {
    #[error("bodega not found")]
    NotFound,
}

#[derive(Debug, Error)]
pub enum BodegasServiceError {
    #[error("bodega not found")]
    NotFound,

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("La fecha de término no puede ser anterior a la fecha de contratación.")]
    EndBeforeStart,

    #[error(transparent)]
    Contract(#[from] ContractsError),
}

impl From<BodegasRepositoryError> for BodegasServiceError {
    fn from(error: BodegasRepositoryError) -> Self {
        match error {
            BodegasRepositoryError::NotFound => Self::NotFound,
        }
    }
}
