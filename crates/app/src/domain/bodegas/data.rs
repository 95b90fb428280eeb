//! Bodegas Data

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::domain::bodegas::records::EstadoBodega;

/// Untrusted partial update, as received from a client.
///
/// `None` means the key was absent. A key sent as `null` is kept as
/// `Some(Value::Null)` so validation can reject it. Unknown keys are dropped.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodegaPatch {
    #[serde(default, deserialize_with = "present")]
    pub nombre: Option<Value>,

    #[serde(default, deserialize_with = "present")]
    pub contratante_nombre: Option<Value>,

    #[serde(default, deserialize_with = "present")]
    pub contratante_rut: Option<Value>,

    #[serde(default, deserialize_with = "present")]
    pub contratante_telefono: Option<Value>,

    #[serde(default, deserialize_with = "present")]
    pub contratante_email: Option<Value>,

    #[serde(default, deserialize_with = "present")]
    pub metros_cuadrados: Option<Value>,

    #[serde(default, deserialize_with = "present")]
    pub piso: Option<Value>,

    #[serde(default, deserialize_with = "present")]
    pub estado: Option<Value>,

    #[serde(default, deserialize_with = "present")]
    pub tarifa_uf: Option<Value>,

    #[serde(default, deserialize_with = "present")]
    pub fecha_contratacion: Option<Value>,

    #[serde(default, deserialize_with = "present")]
    pub fecha_termino: Option<Value>,

    #[serde(default, deserialize_with = "present")]
    pub observaciones: Option<Value>,
}

fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl From<Value> for BodegaPatch {
    /// Anything other than a JSON object carries no fields.
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => {
                serde_json::from_value(Value::Object(map)).unwrap_or_default()
            }
            _ => Self::default(),
        }
    }
}

/// Sanitized partial update: only fields that were present and valid.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BodegaUpdate {
    pub nombre: Option<String>,
    pub contratante_nombre: Option<String>,
    pub contratante_rut: Option<String>,
    pub contratante_telefono: Option<String>,
    pub contratante_email: Option<String>,
    pub metros_cuadrados: Option<f64>,
    pub piso: Option<i64>,
    pub estado: Option<EstadoBodega>,
    pub tarifa_uf: Option<f64>,
    pub fecha_contratacion: Option<String>,
    pub fecha_termino: Option<String>,
    pub observaciones: Option<String>,
}

impl BodegaUpdate {
    /// Number of fields carried by the update.
    #[must_use]
    pub fn len(&self) -> usize {
        [
            self.nombre.is_some(),
            self.contratante_nombre.is_some(),
            self.contratante_rut.is_some(),
            self.contratante_telefono.is_some(),
            self.contratante_email.is_some(),
            self.metros_cuadrados.is_some(),
            self.piso.is_some(),
            self.estado.is_some(),
            self.tarifa_uf.is_some(),
            self.fecha_contratacion.is_some(),
            self.fecha_termino.is_some(),
            self.observaciones.is_some(),
        ]
        .into_iter()
        .filter(|present| *present)
        .count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
