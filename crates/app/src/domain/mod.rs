//! Bodegas Domain Concerns

pub mod bodegas;
pub mod contracts;
pub mod floor_plan;
