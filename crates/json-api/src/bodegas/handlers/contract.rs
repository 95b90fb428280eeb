//! Bodega Contract Handler

use std::sync::Arc;

use salvo::{
    oapi::extract::{PathParam, QueryParam},
    prelude::*,
};

use crate::{bodegas::errors::into_status_error, extensions::*, state::State};

/// Bodega Contract Handler
///
/// Returns the contract text of a reserved or occupied bodega, dated `fecha`
/// (`YYYY-MM-DD`, today when omitted).
#[endpoint(
    tags("bodegas"),
    summary = "Render Bodega Contract",
    responses(
        (status_code = StatusCode::OK, description = "Contract text"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid fecha"),
        (status_code = StatusCode::NOT_FOUND, description = "Bodega not found"),
        (status_code = StatusCode::CONFLICT, description = "Bodega has no contract"),
    ),
)]
#[tracing::instrument(name = "bodegas.contract", skip(id, fecha, depot), err)]
pub(crate) async fn handler(
    id: PathParam<String>,
    fecha: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<String, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let generated_on = fecha.into_contract_date()?;

    let document = state
        .app
        .bodegas
        .contract_document(&id.into_inner(), generated_on)
        .await
        .map_err(into_status_error)?;

    tracing::info!(bodega_id = %document.bodega_id, %generated_on, "rendered contract");

    Ok(document.text)
}
