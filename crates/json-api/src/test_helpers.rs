//! Test helpers.

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*};

use bodegas_app::{
    context::AppContext,
    domain::bodegas::{
        MockBodegasService,
        records::{BodegaRecord, EstadoBodega},
    },
};

use crate::state::State;

pub(crate) const TEST_BASE_URL: &str = "https://bodegas.example.com/api";
pub(crate) const TEST_SUPERVISOR: &str = "Supervisora de Turno";

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

pub(crate) fn state_with_bodegas(bodegas: MockBodegasService) -> Arc<State> {
    State::new(
        AppContext {
            bodegas: Arc::new(bodegas),
        },
        TEST_BASE_URL,
        TEST_SUPERVISOR,
    )
    .shared()
}

pub(crate) fn bodegas_service(bodegas: MockBodegasService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_bodegas(bodegas)))
            .push(route),
    )
}
