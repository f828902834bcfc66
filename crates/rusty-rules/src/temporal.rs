//! Timezone identifiers and MySQL-style date/timestamp strings
//!
//! Dates are checked by round trip: the numeric segments are rebuilt into a calendar
//! value with overflow carried into the next unit (month 13 is January of the next
//! year, day 0 is the last day of the previous month), formatted back, and compared
//! byte for byte with the input. Overflowed or unpadded input never survives that.

use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use chrono_tz::Tz;

use crate::config::TimezoneConfig;
use crate::string::trim;
use crate::value::Value;

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// IANA timezone identifier such as `Europe/Istanbul` or `UTC`, matched
/// case-insensitively after trimming.
pub fn is_valid_timezone(value: &Value) -> bool {
    is_valid_timezone_with(value, &TimezoneConfig::default())
}

/// [`is_valid_timezone`] with an explicit matching mode
pub fn is_valid_timezone_with(value: &Value, config: &TimezoneConfig) -> bool {
    let Some(raw) = value.coerce_to_string() else {
        return false;
    };
    let name = trim(&raw);

    let parsed = if config.case_insensitive {
        Tz::from_str_insensitive(name).map_err(|e| e.to_string())
    } else {
        name.parse::<Tz>().map_err(|e| e.to_string())
    };

    match parsed {
        Ok(_) => true,
        Err(e) => {
            tracing::trace!("Unknown timezone {:?}: {}", name, e);
            false
        }
    }
}

/// `YYYY-MM-DD` naming a real calendar day
pub fn is_valid_mysql_date(value: &Value) -> bool {
    let Some(input) = value.coerce_to_string() else {
        return false;
    };

    let Some([year, month, day]) = numeric_segments::<3>(&input, '-') else {
        return false;
    };

    match normalize(year, month, day, 0, 0, 0) {
        Some(date) => date.format(DATE_FORMAT).to_string() == input,
        None => {
            tracing::trace!("Date {:?} cannot be rebuilt", input);
            false
        }
    }
}

/// `YYYY-MM-DD HH:MM:SS` naming a real calendar instant
pub fn is_valid_mysql_timestamp(value: &Value) -> bool {
    let Some(input) = value.coerce_to_string() else {
        return false;
    };

    let parts: Vec<&str> = input.split(' ').collect();
    let [date_part, time_part] = parts.as_slice() else {
        return false;
    };

    let Some([year, month, day]) = numeric_segments::<3>(date_part, '-') else {
        return false;
    };
    let Some([hour, minute, second]) = numeric_segments::<3>(time_part, ':') else {
        return false;
    };

    match normalize(year, month, day, hour, minute, second) {
        Some(timestamp) => timestamp.format(TIMESTAMP_FORMAT).to_string() == input,
        None => {
            tracing::trace!("Timestamp {:?} cannot be rebuilt", input);
            false
        }
    }
}

/// Split into exactly `N` segments, each a signed decimal integer
fn numeric_segments<const N: usize>(s: &str, separator: char) -> Option<[i64; N]> {
    let segments: Vec<i64> = s
        .split(separator)
        .map(|segment| segment.parse::<i64>().ok())
        .collect::<Option<_>>()?;
    segments.try_into().ok()
}

/// Build a date-time from possibly out-of-range components, carrying overflow
/// into larger units. `None` when the result leaves chrono's representable range.
fn normalize(
    year: i64,
    month: i64,
    day: i64,
    hour: i64,
    minute: i64,
    second: i64,
) -> Option<NaiveDateTime> {
    let months = year.checked_mul(12)?.checked_add(month.checked_sub(1)?)?;
    let year = i32::try_from(months.div_euclid(12)).ok()?;
    let month = u32::try_from(months.rem_euclid(12) + 1).ok()?;

    let first_of_month = NaiveDate::from_ymd_opt(year, month, 1)?;
    let date = first_of_month.checked_add_signed(TimeDelta::try_days(day.checked_sub(1)?)?)?;

    let seconds = hour
        .checked_mul(3600)?
        .checked_add(minute.checked_mul(60)?)?
        .checked_add(second)?;

    date.and_hms_opt(0, 0, 0)?
        .checked_add_signed(TimeDelta::try_seconds(seconds)?)
}
