//! Floor Plan Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use bodegas_app::domain::floor_plan::FloorPlanUnit;

use crate::{bodegas, extensions::*, state::State};

/// One unit as drawn on the warehouse plan.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct FloorPlanUnitResponse {
    /// Internal bodega id
    pub id: String,

    /// Display code, or the id when the bodega has none
    pub identifier: String,

    pub status: String,

    /// Spanish status label
    pub status_label: String,

    /// Color key: `available`, `reserved`, `occupied` or `expiring`
    pub status_color: String,

    /// Surface, e.g. `120 m²`
    pub size: String,

    /// Grid span class, e.g. `span-2x2`
    pub span: String,
}

impl From<FloorPlanUnit> for FloorPlanUnitResponse {
    fn from(unit: FloorPlanUnit) -> Self {
        FloorPlanUnitResponse {
            id: unit.id,
            identifier: unit.identifier,
            status: unit.status.as_str().to_string(),
            status_label: unit.status_label.to_string(),
            status_color: unit.status_color.to_string(),
            size: unit.size,
            span: unit.span.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct FloorPlanResponse {
    pub units: Vec<FloorPlanUnitResponse>,

    /// RFC 3339 time of the last committed bodega change
    pub last_update: String,

    /// Warehouse supervisor on duty
    pub supervisor: String,
}

/// Floor Plan Handler
///
/// Returns every bodega laid out for the dashboard plan.
#[endpoint(tags("floor-plan"), summary = "Warehouse Floor Plan")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<FloorPlanResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let plan = state
        .app
        .bodegas
        .floor_plan()
        .await
        .map_err(bodegas::into_status_error)?;

    Ok(Json(FloorPlanResponse {
        units: plan.units.into_iter().map(Into::into).collect(),
        last_update: plan.last_updated_at.to_string(),
        supervisor: state.supervisor.clone(),
    }))
}
