//! Contract date query parsing helpers.

use jiff::{Zoned, civil::Date};
use salvo::{oapi::extract::QueryParam, prelude::StatusError};

use crate::extensions::*;

pub(crate) trait ContractDateExt {
    fn into_contract_date(self) -> Result<Date, StatusError>;
}

impl ContractDateExt for QueryParam<String, false> {
    fn into_contract_date(self) -> Result<Date, StatusError> {
        self.into_inner()
            .map(|value| value.parse::<Date>())
            .transpose()
            .or_400("could not parse \"fecha\" query parameter")
            .map(|date| date.unwrap_or_else(|| Zoned::now().date()))
    }
}
