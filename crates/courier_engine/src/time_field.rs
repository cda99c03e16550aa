//! Normalization of the optional timestamp fields found on upstream records.
//!
//! Every other module goes through [`resolve`]; a field that is missing and a
//! field that cannot be parsed are indistinguishable past this point.

use jiff::{
    Timestamp,
    civil::{Date, DateTime, Time},
    tz::TimeZone,
};
use tracing::debug;

/// Rendered in place of a time that is absent or could not be parsed.
pub const TIME_PLACEHOLDER: &str = "----";

/// Parses an ISO-8601 string into an absolute instant.
///
/// Strings carrying an offset (`Z`, `+02:00`) are taken as is. Date-times
/// without an offset and bare dates are interpreted in UTC.
pub fn resolve(raw: Option<&str>) -> Option<Timestamp> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(timestamp) = raw.parse::<Timestamp>() {
        return Some(timestamp);
    }

    let civil = raw.parse::<DateTime>().or_else(|_| {
        raw.parse::<Date>()
            .map(|date| date.to_datetime(Time::midnight()))
    });

    match civil.and_then(|datetime| datetime.to_zoned(TimeZone::UTC)) {
        Ok(zoned) => Some(zoned.timestamp()),
        Err(err) => {
            debug!(raw, %err, "Discarding unparseable timestamp");
            None
        }
    }
}

/// Renders an hour/minute pair as `h:mm AM`/`h:mm PM`.
pub fn twelve_hour_clock(hour: u8, minute: u8) -> String {
    let meridiem = if hour < 12 { "AM" } else { "PM" };
    let hour = match hour % 12 {
        0 => 12,
        h => h,
    };

    format!("{hour}:{minute:02} {meridiem}")
}

pub fn format_clock(timestamp: Timestamp, tz: &TimeZone) -> String {
    let zoned = timestamp.to_zoned(tz.clone());
    twelve_hour_clock(zoned.hour() as u8, zoned.minute() as u8)
}

/// Display time for an optional instant, falling back to [`TIME_PLACEHOLDER`].
pub fn display_time(timestamp: Option<Timestamp>, tz: &TimeZone) -> String {
    timestamp
        .map(|timestamp| format_clock(timestamp, tz))
        .unwrap_or_else(|| TIME_PLACEHOLDER.to_owned())
}

/// Display time straight from a raw upstream field.
pub fn display_raw_time(raw: Option<&str>, tz: &TimeZone) -> String {
    display_time(resolve(raw), tz)
}
