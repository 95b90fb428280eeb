//! Bodega Records

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

/// Operational status of a bodega.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EstadoBodega {
    /// Free to be rented.
    Disponible,

    /// Held for a client, contract pending.
    Reservada,

    /// Rented under a running contract.
    Ocupada,

    /// Contract close to its end date.
    PorVencer,
}

impl EstadoBodega {
    /// Every state, in display order.
    pub const ALL: [Self; 4] = [
        Self::Disponible,
        Self::Reservada,
        Self::Ocupada,
        Self::PorVencer,
    ];

    /// Wire representation of the state.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Disponible => "DISPONIBLE",
            Self::Reservada => "RESERVADA",
            Self::Ocupada => "OCUPADA",
            Self::PorVencer => "POR_VENCER",
        }
    }

    /// Parse the wire representation. Matching is exact and case sensitive.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|estado| estado.as_str() == value)
    }
}

impl Display for EstadoBodega {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// Bodega Record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodegaRecord {
    /// Internal identifier, immutable.
    pub id: String,

    /// Display code, e.g. `B1`.
    pub codigo: String,

    /// Descriptive name.
    pub nombre: String,

    /// Name of the contracting party.
    pub contratante_nombre: String,

    /// RUT of the contracting party.
    pub contratante_rut: String,

    /// Contact phone of the contracting party.
    pub contratante_telefono: String,

    /// Contact email of the contracting party.
    pub contratante_email: String,

    /// Surface in square meters.
    pub metros_cuadrados: f64,

    /// Floor, negative for basement levels.
    pub piso: i64,

    /// Operational status.
    pub estado: EstadoBodega,

    /// Monthly tariff in UF.
    pub tarifa_uf: f64,

    /// Contract start date (ISO), empty when unset.
    pub fecha_contratacion: String,

    /// Contract end date (ISO), empty when unset.
    pub fecha_termino: String,

    /// Operational notes.
    pub observaciones: String,
}

impl BodegaRecord {
    /// Whether `identifier` names this bodega by internal id or display code.
    #[must_use]
    pub fn is_identified_by(&self, identifier: &str) -> bool {
        self.id == identifier || self.codigo == identifier
    }
}
