//! Bodega Models

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use bodegas_app::domain::bodegas::records::BodegaRecord;

/// Bodega as served to the dashboard.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct BodegaResponse {
    /// Internal identifier
    pub id: String,

    /// Display code, e.g. `B1`
    pub codigo: String,

    /// Descriptive name
    pub nombre: String,

    pub contratante_nombre: String,
    pub contratante_rut: String,
    pub contratante_telefono: String,
    pub contratante_email: String,

    /// Surface in square meters
    pub metros_cuadrados: f64,

    /// Floor, negative for basement levels
    pub piso: i64,

    /// One of `DISPONIBLE`, `RESERVADA`, `OCUPADA`, `POR_VENCER`
    pub estado: String,

    /// Monthly tariff in UF
    pub tarifa_uf: f64,

    /// ISO date, empty when unset
    pub fecha_contratacion: String,

    /// ISO date, empty when unset
    pub fecha_termino: String,

    pub observaciones: String,
}

impl From<BodegaRecord> for BodegaResponse {
    fn from(bodega: BodegaRecord) -> Self {
        BodegaResponse {
            id: bodega.id,
            codigo: bodega.codigo,
            nombre: bodega.nombre,
            contratante_nombre: bodega.contratante_nombre,
            contratante_rut: bodega.contratante_rut,
            contratante_telefono: bodega.contratante_telefono,
            contratante_email: bodega.contratante_email,
            metros_cuadrados: bodega.metros_cuadrados,
            piso: bodega.piso,
            estado: bodega.estado.as_str().to_string(),
            tarifa_uf: bodega.tarifa_uf,
            fecha_contratacion: bodega.fecha_contratacion,
            fecha_termino: bodega.fecha_termino,
            observaciones: bodega.observaciones,
        }
    }
}
