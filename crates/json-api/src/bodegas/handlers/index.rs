//! Bodega Index Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    bodegas::{errors::into_status_error, models::BodegaResponse},
    extensions::*,
    state::State,
};

/// Bodega Index Handler
///
/// Returns every bodega in seed order.
#[endpoint(tags("bodegas"), summary = "List Bodegas")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<BodegaResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let bodegas = state
        .app
        .bodegas
        .list_bodegas()
        .await
        .map_err(into_status_error)?;

    Ok(Json(bodegas.into_iter().map(Into::into).collect()))
}
