//! Get Bodega Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    bodegas::{errors::into_status_error, models::BodegaResponse},
    extensions::*,
    state::State,
};

/// Get Bodega Handler
///
/// Returns the bodega with exactly this internal id.
#[endpoint(
    tags("bodegas"),
    summary = "Get Bodega",
    responses(
        (status_code = StatusCode::OK, description = "Bodega found"),
        (status_code = StatusCode::NOT_FOUND, description = "Bodega not found"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<BodegaResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let bodega = state
        .app
        .bodegas
        .get_bodega(&id.into_inner())
        .await
        .map_err(into_status_error)?;

    Ok(Json(bodega.into()))
}
