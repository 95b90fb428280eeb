//! Chilean Spanish formatting for contract values.

use jiff::civil::Date;
use rust_decimal::{
    Decimal, RoundingStrategy,
    prelude::{FromPrimitive, ToPrimitive},
};

use crate::dates;

fn month_name(month: i8) -> &'static str {
    match month {
        1 => "enero",
        2 => "febrero",
        3 => "marzo",
        4 => "abril",
        5 => "mayo",
        6 => "junio",
        7 => "julio",
        8 => "agosto",
        9 => "septiembre",
        10 => "octubre",
        11 => "noviembre",
        _ => "diciembre",
    }
}

/// `10 de enero de 2024`
pub(super) fn long_date(date: Date) -> String {
    format!(
        "{} de {} de {}",
        date.day(),
        month_name(date.month()),
        date.year()
    )
}

/// Long date of an ISO string, or the string itself when it does not parse.
pub(super) fn contract_date(value: &str) -> String {
    dates::parse_calendar_date(value).map_or_else(|| value.to_string(), long_date)
}

pub(super) fn meters(value: f64) -> String {
    grouped(value, 0).map_or_else(|| format!("{value}"), |amount| format!("{amount} m²"))
}

pub(super) fn uf(value: f64) -> String {
    grouped(value, 2).map_or_else(|| format!("{value} UF"), |amount| format!("{amount} UF"))
}

/// Positive `value` rounded half away from zero to `decimals` places, written
/// with `.` thousand groups and `,` decimals. `None` for non-positive values
/// and values outside the decimal range.
fn grouped(value: f64, decimals: u32) -> Option<String> {
    if !value.is_finite() || value <= 0.0 {
        return None;
    }

    let scale = 10_u64.checked_pow(decimals)?;

    let units = Decimal::from_f64(value)?
        .round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero)
        .checked_mul(Decimal::from(scale))?
        .to_u64()?;

    let whole = (units / scale).to_string();
    let mut out = String::with_capacity(whole.len() + whole.len() / 3 + 4);

    for (index, digit) in whole.chars().enumerate() {
        if index > 0 && (whole.len() - index) % 3 == 0 {
            out.push('.');
        }
        out.push(digit);
    }

    if decimals > 0 {
        let width = usize::try_from(decimals).ok()?;

        out.push_str(&format!(",{:0width$}", units % scale));
    }

    Some(out)
}
