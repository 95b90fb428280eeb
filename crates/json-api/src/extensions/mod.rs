//! Extension traits

mod contract_date;
mod depot;
mod result;

pub(crate) use contract_date::ContractDateExt as _;
pub(crate) use depot::DepotExt as _;
pub(crate) use result::ResultExt as _;
