//! Contract Document

use jiff::civil::Date;

use crate::domain::{
    bodegas::records::{BodegaRecord, EstadoBodega},
    contracts::{errors::ContractsError, format},
};

pub const ADMINISTRADOR_NOMBRE: &str = "Administración de Bodegas Integrales SpA";
pub const ADMINISTRADOR_RUT: &str = "76.543.210-9";
pub const ADMINISTRADOR_DOMICILIO: &str = "Avenida Nueva Las Condes 1234, Las Condes, Santiago";
const ADMINISTRADOR_REPRESENTANTE: &str =
    "Representada para estos efectos por su Gerencia de Operaciones";

const SIN_OBSERVACIONES: &str = "Sin observaciones adicionales.";

/// Rendered reservation/usage contract for one bodega.
#[derive(Debug, Clone, PartialEq)]
pub struct ContractDocument {
    pub bodega_id: String,
    pub codigo: String,
    pub estado: EstadoBodega,
    pub generated_on: Date,
    pub text: String,
}

/// Render the contract text of a reserved or occupied bodega.
///
/// # Errors
///
/// Returns [`ContractsError::NotContractable`] for any other state.
pub fn render_contract(
    bodega: &BodegaRecord,
    generated_on: Date,
) -> Result<ContractDocument, ContractsError> {
    let estado_texto = match bodega.estado {
        EstadoBodega::Ocupada => "ocupada con contrato vigente en favor del CLIENTE",
        EstadoBodega::Reservada => "reservada exclusivamente a favor del CLIENTE",
        estado @ (EstadoBodega::Disponible | EstadoBodega::PorVencer) => {
            return Err(ContractsError::NotContractable(estado));
        }
    };

    let observaciones = match bodega.observaciones.trim() {
        "" => SIN_OBSERVACIONES,
        observaciones => observaciones,
    };

    let lines = [
        "CONTRATO DE RESERVA Y USO DE BODEGA".to_string(),
        String::new(),
        format!(
            "En {fecha}, {ADMINISTRADOR_NOMBRE}, RUT {ADMINISTRADOR_RUT}, con domicilio en {ADMINISTRADOR_DOMICILIO}, {ADMINISTRADOR_REPRESENTANTE} (en adelante, \"EL ADMINISTRADOR\"), y {nombre}, RUT {rut}, domiciliado para estos efectos en los datos señalados al pie de firma (en adelante, \"EL CLIENTE\"), convienen las siguientes cláusulas:",
            fecha = format::long_date(generated_on),
            nombre = bodega.contratante_nombre,
            rut = bodega.contratante_rut,
        ),
        String::new(),
        "PRIMERO: ANTECEDENTES Y OBJETO".to_string(),
        format!(
            "  1.1. EL ADMINISTRADOR entrega en {estado_texto} la bodega denominada \"{nombre}\" (código interno {codigo}), de una superficie aproximada de {superficie}, ubicada en el piso {piso} del complejo administrado por EL ADMINISTRADOR.",
            nombre = bodega.nombre,
            codigo = bodega.codigo,
            superficie = format::meters(bodega.metros_cuadrados),
            piso = bodega.piso,
        ),
        "  1.2. El objeto del presente instrumento es regular la reserva, uso y explotación temporal de la bodega para fines de almacenamiento de bienes lícitos pertenecientes al CLIENTE.".to_string(),
        String::new(),
        "SEGUNDO: VIGENCIA".to_string(),
        format!(
            "  2.1. El presente contrato tiene una vigencia inicial desde el {inicio} y hasta el {termino}, ambas fechas inclusive.",
            inicio = format::contract_date(&bodega.fecha_contratacion),
            termino = format::contract_date(&bodega.fecha_termino),
        ),
        "  2.2. La renovación automática será evaluada por EL ADMINISTRADOR con una antelación mínima de 30 días, debiendo EL CLIENTE manifestar su interés en continuar antes de dicho plazo.".to_string(),
        String::new(),
        "TERCERO: PRECIO Y CONDICIONES DE PAGO".to_string(),
        format!(
            "  3.1. EL CLIENTE pagará a EL ADMINISTRADOR una renta mensual equivalente a {tarifa}, reajustable en la misma proporción que la variación de la UF.",
            tarifa = format::uf(bodega.tarifa_uf),
        ),
        "  3.2. El pago deberá efectuarse dentro de los primeros cinco (5) días hábiles de cada mes, mediante transferencia electrónica a la cuenta informada por EL ADMINISTRADOR o a través de los medios habilitados en la intranet corporativa.".to_string(),
        String::new(),
        "CUARTO: OBLIGACIONES DEL CLIENTE".to_string(),
        format!(
            "  4.1. Mantener actualizado un contacto telefónico ({telefono}) y un correo electrónico válido ({email}) para efectos de notificaciones.",
            telefono = bodega.contratante_telefono,
            email = bodega.contratante_email,
        ),
        "  4.2. Utilizar la bodega únicamente para almacenar bienes de origen lícito, respetando las normas de seguridad, horarios de acceso y protocolos internos vigentes.".to_string(),
        "  4.3. Contratar y mantener vigentes los seguros necesarios para la protección de sus bienes, liberando a EL ADMINISTRADOR de responsabilidad por pérdidas o daños que no sean consecuencia directa de su dolo o culpa grave.".to_string(),
        String::new(),
        "QUINTO: TERMINACIÓN ANTICIPADA".to_string(),
        "  5.1. Cualquiera de las partes podrá poner término anticipado al presente contrato dando aviso por escrito con al menos quince (15) días corridos de anticipación.".to_string(),
        "  5.2. EL ADMINISTRADOR podrá poner término inmediato en caso de incumplimiento grave de las obligaciones establecidas en este documento o de las políticas internas informadas al CLIENTE.".to_string(),
        String::new(),
        "SEXTO: OBSERVACIONES Y ANEXOS".to_string(),
        format!("  6.1. Observaciones registradas: {observaciones}"),
        "  6.2. Forman parte integrante de esta minuta todos los anexos, reglamentos y actas de entrega que se generen electrónicamente en la intranet.".to_string(),
        String::new(),
        "SÉPTIMO: ACEPTACIÓN".to_string(),
        "  7.1. Las partes declaran haber leído y aceptado íntegramente el contenido de este contrato electrónico, comprometiéndose a firmar la versión física o digital definitiva que sea emitida por EL ADMINISTRADOR.".to_string(),
        String::new(),
        "La presente minuta ha sido generada automáticamente a partir de los registros disponibles y debe revisarse antes de su firma definitiva. Para constancia se firma electrónicamente por las partes.".to_string(),
    ];

    Ok(ContractDocument {
        bodega_id: bodega.id.clone(),
        codigo: bodega.codigo.clone(),
        estado: bodega.estado,
        generated_on,
        text: lines.join("\n"),
    })
}
