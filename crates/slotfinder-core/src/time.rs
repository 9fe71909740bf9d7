//! Wall-clock parsing and formatting.
//!
//! Times are naive `chrono::NaiveTime` values at minute resolution. There is no
//! date or timezone component anywhere in the crate.

use chrono::{NaiveTime, Timelike, Weekday};

use crate::error::{Result, SlotError};

/// Time of day with minute resolution.
pub type TimeOfDay = NaiveTime;

/// Parse a strict 24-hour `HH:MM` value.
///
/// Hour and minute may each be one or two digits (`9:5` is 09:05).
/// Surrounding whitespace is ignored. Seconds, `24:00`, and 12-hour forms are
/// rejected with [`SlotError::InvalidTime`] carrying the raw value.
pub fn parse_time(raw: &str) -> Result<TimeOfDay> {
    let value = raw.trim();
    let invalid = || SlotError::InvalidTime(raw.to_string());

    let (hh, mm) = value.split_once(':').ok_or_else(invalid)?;
    if hh.is_empty() || hh.len() > 2 || mm.is_empty() || mm.len() > 2 {
        return Err(invalid());
    }
    if !hh.bytes().chain(mm.bytes()).all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    let hour: u32 = hh.parse().map_err(|_| invalid())?;
    let minute: u32 = mm.parse().map_err(|_| invalid())?;
    NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(invalid)
}

/// Format a time as zero-padded `HH:MM`.
pub fn format_time(time: TimeOfDay) -> String {
    format!("{:02}:{:02}", time.hour(), time.minute())
}

/// Minutes elapsed since midnight.
pub fn minutes_of_day(time: TimeOfDay) -> u32 {
    time.hour() * 60 + time.minute()
}

/// Parse a weekday name, ignoring case and surrounding whitespace.
///
/// Full English names are the canonical form; the three-letter abbreviations
/// ("mon", "Tue") are accepted as well.
pub fn parse_weekday(raw: &str) -> Result<Weekday> {
    let value = raw.trim();
    if value.len() != 3 && !WEEKDAYS.iter().any(|d| weekday_name(*d).eq_ignore_ascii_case(value)) {
        return Err(SlotError::InvalidWeekday(raw.to_string()));
    }
    value
        .parse::<Weekday>()
        .map_err(|_| SlotError::InvalidWeekday(raw.to_string()))
}

/// Canonical capitalized name, e.g. `"Monday"`.
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// The seven weekdays in Monday-first order.
pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// `serde` helpers that write times as `HH:MM` and weekdays by full name.
pub(crate) mod serde_hhmm {
    use chrono::{NaiveTime, Weekday};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(time: &NaiveTime, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&super::format_time(*time))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(d)?;
        super::parse_time(&raw).map_err(serde::de::Error::custom)
    }

    pub fn serialize_weekday<S: Serializer>(day: &Weekday, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(super::weekday_name(*day))
    }

    pub fn deserialize_weekday<'de, D: Deserializer<'de>>(d: D) -> Result<Weekday, D::Error> {
        let raw = String::deserialize(d)?;
        super::parse_weekday(&raw).map_err(serde::de::Error::custom)
    }
}
