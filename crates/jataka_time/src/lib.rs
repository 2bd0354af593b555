//! Civil time normalization for natal chart computation.
//!
//! This crate provides:
//! - Local civil date/time + IANA zone → unambiguous UTC instant
//! - Julian Date (UT) from UTC calendar fields
//! - Elapsed time between instants in 365.25-day years

pub mod error;
pub mod julian;
pub mod local;

pub use error::TimeError;
pub use julian::{
    DAYS_PER_YEAR, J2000_JD, SECONDS_PER_DAY, calendar_to_jd, elapsed_years, jd_from_utc,
};
pub use local::birth_instant;
