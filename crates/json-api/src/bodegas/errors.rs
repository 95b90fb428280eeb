//! Bodega Errors

use salvo::http::StatusError;
use tracing::debug;

use bodegas_app::domain::bodegas::BodegasServiceError;

const NOT_FOUND: &str = "Bodega no encontrada";

pub(crate) fn into_status_error(error: BodegasServiceError) -> StatusError {
    match error {
        BodegasServiceError::NotFound => StatusError::not_found().brief(NOT_FOUND),
        BodegasServiceError::Validation(source) => {
            debug!(%source, "rejected bodega update");

            StatusError::bad_request().brief(source.to_string())
        }
        BodegasServiceError::EndBeforeStart => {
            StatusError::bad_request().brief(BodegasServiceError::EndBeforeStart.to_string())
        }
        BodegasServiceError::Contract(source) => StatusError::conflict().brief(source.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use salvo::http::StatusCode;

    use bodegas_app::domain::{
        bodegas::{ValidationError, records::EstadoBodega},
        contracts::ContractsError,
    };

    use super::*;

    #[test]
    fn service_errors_map_to_statuses() {
        let cases = [
            (BodegasServiceError::NotFound, StatusCode::NOT_FOUND),
            (
                BodegasServiceError::Validation(ValidationError::Piso),
                StatusCode::BAD_REQUEST,
            ),
            (BodegasServiceError::EndBeforeStart, StatusCode::BAD_REQUEST),
            (
                BodegasServiceError::Contract(ContractsError::NotContractable(
                    EstadoBodega::Disponible,
                )),
                StatusCode::CONFLICT,
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(into_status_error(error).code, expected);
        }
    }

    #[test]
    fn validation_brief_is_the_user_message() {
        let status = into_status_error(BodegasServiceError::Validation(ValidationError::Estado));

        assert_eq!(status.brief, "El estado proporcionado no es válido.");
    }
}
