//! Local civil date/time resolution against the IANA zone database.

use chrono::offset::LocalResult;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;

use crate::error::TimeError;

/// Resolve a birth date, time-of-day, and IANA zone name to a UTC instant.
///
/// Accepts `YYYY-MM-DD` dates and `HH:MM` or `HH:MM:SS` times.
///
/// DST policy: a local time that occurs twice (clocks fall back) resolves
/// to the earlier offset; a local time that never occurs (clocks spring
/// forward) is rejected with [`TimeError::NonexistentLocalTime`].
pub fn birth_instant(date: &str, time: &str, zone: &str) -> Result<DateTime<Utc>, TimeError> {
    let d = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| TimeError::ParseDate(date.to_string()))?;
    let t = parse_time(time)?;
    let tz: Tz = zone
        .parse()
        .map_err(|_| TimeError::UnknownTimeZone(zone.to_string()))?;

    let local = NaiveDateTime::new(d, t);
    let resolved = match tz.from_local_datetime(&local) {
        LocalResult::Single(dt) => dt,
        LocalResult::Ambiguous(earlier, _later) => earlier,
        LocalResult::None => return Err(TimeError::NonexistentLocalTime),
    };
    Ok(resolved.with_timezone(&Utc))
}

fn parse_time(time: &str) -> Result<NaiveTime, TimeError> {
    NaiveTime::parse_from_str(time, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(time, "%H:%M"))
        .map_err(|_| TimeError::ParseTime(time.to_string()))
}
