//! Update Bodega Handler

use std::sync::Arc;

use salvo::{http::header::LOCATION, oapi::extract::PathParam, prelude::*};
use serde_json::Value;

use bodegas_app::domain::bodegas::data::BodegaPatch;

use crate::{
    bodegas::{errors::into_status_error, models::BodegaResponse},
    extensions::*,
    state::State,
};

/// Parse the request body leniently: an empty body is an empty patch.
async fn read_patch(req: &mut Request) -> Result<BodegaPatch, StatusError> {
    let payload = req.payload().await.or_400("could not read request body")?;

    if payload.iter().all(u8::is_ascii_whitespace) {
        return Ok(BodegaPatch::default());
    }

    let body: Value = serde_json::from_slice(payload).or_400("request body is not valid JSON")?;

    Ok(BodegaPatch::from(body))
}

/// Update Bodega Handler
///
/// Validates a partial update and merges it into the bodega matching the
/// identifier (id or codigo). Unknown keys are ignored.
#[endpoint(
    tags("bodegas"),
    summary = "Update Bodega",
    responses(
        (status_code = StatusCode::OK, description = "Bodega updated"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid field or date range"),
        (status_code = StatusCode::NOT_FOUND, description = "Bodega not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "bodegas.update",
    skip(id, req, depot, res),
    fields(identifier = tracing::field::Empty, bodega_id = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    id: PathParam<String>,
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<BodegaResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let identifier = id.into_inner();
    let patch = read_patch(req).await?;

    let span = tracing::Span::current();

    span.record("identifier", tracing::field::display(&identifier));

    let bodega = state
        .app
        .bodegas
        .update_bodega(&identifier, patch)
        .await
        .map_err(into_status_error)?;

    span.record("bodega_id", tracing::field::display(&bodega.id));

    res.add_header(LOCATION, state.bodega_url(&bodega.id), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::OK);

    Ok(Json(bodega.into()))
}
