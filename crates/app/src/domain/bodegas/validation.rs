//! Update validation and merge.
//!
//! A [`BodegaPatch`] is checked field by field, in declaration order, into a
//! [`BodegaUpdate`]. The first invalid field stops validation. The update is
//! then merged into a copy of the current record and the contract dates are
//! checked against each other. Nothing here touches the store.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::{
    dates,
    domain::bodegas::{
        data::{BodegaPatch, BodegaUpdate},
        errors::{BodegasServiceError, ValidationError},
        records::{BodegaRecord, EstadoBodega},
    },
};

type Pattern = LazyLock<Result<Regex, regex::Error>>;

static RUT_PATTERN: Pattern =
    LazyLock::new(|| Regex::new(r"^([0-9]{1,2})\.?([0-9]{3})\.?([0-9]{3})-([0-9kK])$"));

static PHONE_PATTERN: Pattern = LazyLock::new(|| Regex::new(r"^\+?[0-9\s()-]{6,20}$"));

static EMAIL_PATTERN: Pattern = LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$"));

fn matches(pattern: &Pattern, value: &str) -> bool {
    pattern
        .as_ref()
        .is_ok_and(|pattern| pattern.is_match(value))
}

impl BodegaPatch {
    /// Validate and normalize every present field.
    ///
    /// # Errors
    ///
    /// Returns the [`ValidationError`] of the first invalid field.
    pub fn sanitize(self) -> Result<BodegaUpdate, ValidationError> {
        Ok(BodegaUpdate {
            nombre: self.nombre.map(non_empty_text).transpose()?,
            contratante_nombre: self
                .contratante_nombre
                .map(|value| text(value, ValidationError::ContratanteNombre))
                .transpose()?,
            contratante_rut: self
                .contratante_rut
                .map(|value| patterned(value, &RUT_PATTERN, ValidationError::ContratanteRut))
                .transpose()?,
            contratante_telefono: self
                .contratante_telefono
                .map(|value| {
                    patterned(value, &PHONE_PATTERN, ValidationError::ContratanteTelefono)
                })
                .transpose()?,
            contratante_email: self
                .contratante_email
                .map(|value| patterned(value, &EMAIL_PATTERN, ValidationError::ContratanteEmail))
                .transpose()?,
            metros_cuadrados: self
                .metros_cuadrados
                .map(|value| positive_number(&value, ValidationError::MetrosCuadrados))
                .transpose()?,
            piso: self.piso.map(|value| integer(&value)).transpose()?,
            estado: self.estado.map(|value| estado(&value)).transpose()?,
            tarifa_uf: self
                .tarifa_uf
                .map(|value| positive_number(&value, ValidationError::TarifaUf))
                .transpose()?,
            fecha_contratacion: self
                .fecha_contratacion
                .map(|value| date(value, ValidationError::FechaContratacion))
                .transpose()?,
            fecha_termino: self
                .fecha_termino
                .map(|value| date(value, ValidationError::FechaTermino))
                .transpose()?,
            observaciones: self
                .observaciones
                .map(|value| text(value, ValidationError::Observaciones))
                .transpose()?,
        })
    }
}

fn text(value: Value, error: ValidationError) -> Result<String, ValidationError> {
    match value {
        Value::String(text) => Ok(text.trim().to_string()),
        _ => Err(error),
    }
}

fn non_empty_text(value: Value) -> Result<String, ValidationError> {
    let nombre = text(value, ValidationError::Nombre)?;

    if nombre.is_empty() {
        return Err(ValidationError::Nombre);
    }

    Ok(nombre)
}

fn patterned(
    value: Value,
    pattern: &Pattern,
    error: ValidationError,
) -> Result<String, ValidationError> {
    let text = text(value, error)?;

    if !text.is_empty() && !matches(pattern, &text) {
        return Err(error);
    }

    Ok(text)
}

fn positive_number(value: &Value, error: ValidationError) -> Result<f64, ValidationError> {
    value
        .as_f64()
        .filter(|number| number.is_finite() && *number > 0.0)
        .ok_or(error)
}

fn integer(value: &Value) -> Result<i64, ValidationError> {
    if let Some(piso) = value.as_i64() {
        return Ok(piso);
    }

    value
        .as_f64()
        .filter(|number| {
            number.is_finite()
                && number.fract() == 0.0
                && *number >= i64::MIN as f64
                && *number < i64::MAX as f64
        })
        // whole and in range, so the cast is exact
        .map(|number| number as i64)
        .ok_or(ValidationError::Piso)
}

fn estado(value: &Value) -> Result<EstadoBodega, ValidationError> {
    value
        .as_str()
        .and_then(EstadoBodega::parse)
        .ok_or(ValidationError::Estado)
}

fn date(value: Value, error: ValidationError) -> Result<String, ValidationError> {
    let date = text(value, error)?;

    if !date.is_empty() && dates::parse_instant(&date).is_none() {
        return Err(error);
    }

    Ok(date)
}

impl BodegaUpdate {
    /// Merge into a copy of `current` and check the contract date range.
    ///
    /// An empty update returns `current` unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`BodegasServiceError::EndBeforeStart`] when the merged record
    /// would end before it starts.
    pub fn apply_to(self, current: &BodegaRecord) -> Result<BodegaRecord, BodegasServiceError> {
        if self.is_empty() {
            return Ok(current.clone());
        }

        let mut merged = current.clone();

        if let Some(nombre) = self.nombre {
            merged.nombre = nombre;
        }
        if let Some(contratante_nombre) = self.contratante_nombre {
            merged.contratante_nombre = contratante_nombre;
        }
        if let Some(contratante_rut) = self.contratante_rut {
            merged.contratante_rut = contratante_rut;
        }
        if let Some(contratante_telefono) = self.contratante_telefono {
            merged.contratante_telefono = contratante_telefono;
        }
        if let Some(contratante_email) = self.contratante_email {
            merged.contratante_email = contratante_email;
        }
        if let Some(metros_cuadrados) = self.metros_cuadrados {
            merged.metros_cuadrados = metros_cuadrados;
        }
        if let Some(piso) = self.piso {
            merged.piso = piso;
        }
        if let Some(estado) = self.estado {
            merged.estado = estado;
        }
        if let Some(tarifa_uf) = self.tarifa_uf {
            merged.tarifa_uf = tarifa_uf;
        }
        if let Some(fecha_contratacion) = self.fecha_contratacion {
            merged.fecha_contratacion = fecha_contratacion;
        }
        if let Some(fecha_termino) = self.fecha_termino {
            merged.fecha_termino = fecha_termino;
        }
        if let Some(observaciones) = self.observaciones {
            merged.observaciones = observaciones;
        }

        check_date_range(&merged)?;

        Ok(merged)
    }
}

/// Unset or unparseable dates never fail the range check.
pub(crate) fn check_date_range(record: &BodegaRecord) -> Result<(), BodegasServiceError> {
    let start = dates::parse_instant(&record.fecha_contratacion);
    let end = dates::parse_instant(&record.fecha_termino);

    if let (Some(start), Some(end)) = (start, end)
        && end < start
    {
        return Err(BodegasServiceError::EndBeforeStart);
    }

    Ok(())
}
