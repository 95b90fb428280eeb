//! Contracts

pub mod document;
pub mod errors;
mod format;

pub use document::{ContractDocument, render_contract};
pub use errors::ContractsError;
