//! Julian Date conversion and year arithmetic.
//!
//! Calendar → JD uses the Meeus formula with a fractional day, matching
//! the `julday` convention of common ephemeris backends: the provider's
//! continuous time value is built from UTC calendar fields with
//! fractional hour = hour + minute/60 + second/3600.

use chrono::{DateTime, Datelike, Timelike, Utc};

/// Julian Date of the J2000.0 epoch (2000-01-01 12:00 UT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Seconds per day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Year length used for dasha period arithmetic.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Convert a Gregorian calendar date with fractional day to Julian Date.
pub fn calendar_to_jd(year: i32, month: u32, day_frac: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year - 1, month + 12)
    } else {
        (year, month)
    };
    let a = (y as f64 / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    (365.25 * (y as f64 + 4716.0)).floor() + (30.6001 * (m as f64 + 1.0)).floor() + day_frac + b
        - 1524.5
}

/// Julian Date (UT) of a UTC instant.
pub fn jd_from_utc(t: DateTime<Utc>) -> f64 {
    let hour = t.hour() as f64 + t.minute() as f64 / 60.0 + t.second() as f64 / 3600.0;
    calendar_to_jd(t.year(), t.month(), t.day() as f64 + hour / 24.0)
}

/// Elapsed time from `birth` to `now` in 365.25-day years.
///
/// Negative when `now` precedes `birth`.
pub fn elapsed_years(birth: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    (now - birth).num_seconds() as f64 / SECONDS_PER_DAY / DAYS_PER_YEAR
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn j2000_noon() {
        assert!((calendar_to_jd(2000, 1, 1.5) - J2000_JD).abs() < 1e-9);
    }

    #[test]
    fn jan_1999_midnight() {
        assert!((calendar_to_jd(1999, 1, 1.0) - 2_451_179.5).abs() < 1e-9);
    }

    #[test]
    fn meeus_sputnik_epoch() {
        // Meeus, Astronomical Algorithms, example 7.a
        assert!((calendar_to_jd(1957, 10, 4.81) - 2_436_116.31).abs() < 1e-6);
    }

    #[test]
    fn jd_from_utc_fields() {
        let t = Utc.with_ymd_and_hms(1990, 5, 15, 5, 0, 0).unwrap();
        assert!((jd_from_utc(t) - 2_448_026.708_333_333).abs() < 1e-6);
    }

    #[test]
    fn jd_from_utc_january_rollover() {
        // month <= 2 branch
        let t = Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap();
        assert!((jd_from_utc(t) - J2000_JD).abs() < 1e-9);
    }

    #[test]
    fn elapsed_one_julian_year() {
        let birth = Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap();
        let now = birth + chrono::Duration::seconds((365.25 * 86_400.0) as i64);
        assert!((elapsed_years(birth, now) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn elapsed_zero_at_birth() {
        let birth = Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap();
        assert!(elapsed_years(birth, birth).abs() < 1e-15);
    }

    #[test]
    fn elapsed_negative_before_birth() {
        let birth = Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap();
        let earlier = Utc.with_ymd_and_hms(1999, 1, 1, 0, 0, 0).unwrap();
        assert!(elapsed_years(birth, earlier) < 0.0);
    }
}
