//! Floor Plan

use jiff::Timestamp;
use serde::Serialize;

use crate::domain::bodegas::records::{BodegaRecord, EstadoBodega};

impl EstadoBodega {
    /// Dashboard label of the state.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Disponible => "Disponible",
            Self::Reservada => "Reservada",
            Self::Ocupada => "Ocupada",
            Self::PorVencer => "Próxima a vencer",
        }
    }

    /// Dashboard color key of the state.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Disponible => "available",
            Self::Reservada => "reserved",
            Self::Ocupada => "occupied",
            Self::PorVencer => "expiring",
        }
    }
}

/// Grid span of a unit on the warehouse plan.
fn span(identifier: &str) -> &'static str {
    match identifier {
        "A1" | "C1" | "E1" | "E2" => "span-2x2",
        "A2" | "A3" | "D1" | "D2" => "span-1x2",
        "B1" => "span-2x3",
        _ => "span-1x1",
    }
}

/// One unit as drawn on the dashboard floor plan.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FloorPlanUnit {
    pub id: String,
    pub identifier: String,
    pub status: EstadoBodega,
    pub status_label: &'static str,
    pub status_color: &'static str,
    pub size: String,
    pub span: &'static str,
}

impl From<&BodegaRecord> for FloorPlanUnit {
    fn from(bodega: &BodegaRecord) -> Self {
        let identifier = if bodega.codigo.is_empty() {
            bodega.id.clone()
        } else {
            bodega.codigo.clone()
        };

        Self {
            id: bodega.id.clone(),
            span: span(&identifier),
            identifier,
            status: bodega.estado,
            status_label: bodega.estado.label(),
            status_color: bodega.estado.color(),
            size: format!("{} m²", bodega.metros_cuadrados),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FloorPlan {
    pub units: Vec<FloorPlanUnit>,
    pub last_updated_at: Timestamp,
}

impl FloorPlan {
    #[must_use]
    pub fn new(bodegas: &[BodegaRecord], last_updated_at: Timestamp) -> Self {
        Self {
            units: bodegas.iter().map(FloorPlanUnit::from).collect(),
            last_updated_at,
        }
    }
}
