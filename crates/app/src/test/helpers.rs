//! Test Helpers

use crate::domain::bodegas::records::{BodegaRecord, EstadoBodega};

/// Available bodega with no contract data; `codigo` equals `id`.
pub(crate) fn make_bodega(id: &str) -> BodegaRecord {
    BodegaRecord {
        id: id.to_string(),
        codigo: id.to_string(),
        nombre: format!("Bodega {id}"),
        contratante_nombre: String::new(),
        contratante_rut: String::new(),
        contratante_telefono: String::new(),
        contratante_email: String::new(),
        metros_cuadrados: 120.0,
        piso: 1,
        estado: EstadoBodega::Disponible,
        tarifa_uf: 3.5,
        fecha_contratacion: String::new(),
        fecha_termino: String::new(),
        observaciones: String::new(),
    }
}

/// Bodega with a full contract running from 2024-01-10 to 2025-01-09.
pub(crate) fn make_contracted_bodega(id: &str, estado: EstadoBodega) -> BodegaRecord {
    BodegaRecord {
        contratante_nombre: "Comercial Andes Ltda.".to_string(),
        contratante_rut: "76.123.456-7".to_string(),
        contratante_telefono: "+56 9 8765 4321".to_string(),
        contratante_email: "operaciones@andes.cl".to_string(),
        metros_cuadrados: 140.0,
        estado,
        tarifa_uf: 4.25,
        fecha_contratacion: "2024-01-10".to_string(),
        fecha_termino: "2025-01-09".to_string(),
        observaciones: "Acceso por andén 2".to_string(),
        ..make_bodega(id)
    }
}
