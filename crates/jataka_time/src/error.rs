//! Error types for civil time normalization.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from parsing or resolving a local civil time.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// Date string did not match `YYYY-MM-DD`.
    ParseDate(String),
    /// Time string did not match `HH:MM` or `HH:MM:SS`.
    ParseTime(String),
    /// Zone name is not in the IANA database.
    UnknownTimeZone(String),
    /// Local time falls inside a DST gap and does not exist.
    NonexistentLocalTime,
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ParseDate(s) => write!(f, "unparseable date: {s}"),
            Self::ParseTime(s) => write!(f, "unparseable time: {s}"),
            Self::UnknownTimeZone(s) => write!(f, "unknown timezone: {s}"),
            Self::NonexistentLocalTime => write!(f, "local time does not exist (DST gap)"),
        }
    }
}

impl Error for TimeError {}
