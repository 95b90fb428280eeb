//! Bodega Handlers

pub(crate) mod contract;
pub(crate) mod get;
pub(crate) mod index;
pub(crate) mod update;
