//! ISO date parsing shared by validation and contract rendering.

use jiff::{
    Timestamp,
    civil::{Date, DateTime, Time},
    tz::TimeZone,
};

/// Parse an ISO date, civil datetime or RFC 3339 timestamp into an instant.
///
/// Values without an offset are read as UTC.
pub(crate) fn parse_instant(value: &str) -> Option<Timestamp> {
    let value = value.trim();

    if value.is_empty() {
        return None;
    }

    if let Ok(timestamp) = value.parse::<Timestamp>() {
        return Some(timestamp);
    }

    let datetime = value.parse::<DateTime>().ok().or_else(|| {
        value
            .parse::<Date>()
            .ok()
            .map(|date| date.to_datetime(Time::midnight()))
    })?;

    datetime
        .to_zoned(TimeZone::UTC)
        .ok()
        .map(|zoned| zoned.timestamp())
}

/// Calendar date (UTC) of a parseable date string.
pub(crate) fn parse_calendar_date(value: &str) -> Option<Date> {
    parse_instant(value).map(|timestamp| timestamp.to_zoned(TimeZone::UTC).date())
}
