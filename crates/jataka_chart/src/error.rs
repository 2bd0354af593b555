//! Error taxonomy for chart assembly.

use std::error::Error;
use std::fmt::{Display, Formatter};

use jataka_ephem::EphemError;
use jataka_time::TimeError;

/// Errors from a chart request. Both variants are terminal: no retry,
/// no partial chart.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ChartError {
    /// Unparseable date/time, unknown timezone, or nonexistent local time.
    InvalidTimeInput(TimeError),
    /// Ephemeris provider failure, bad coordinates, or non-finite output.
    Ephemeris(EphemError),
}

impl Display for ChartError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidTimeInput(e) => write!(f, "invalid time input: {e}"),
            Self::Ephemeris(e) => write!(f, "ephemeris error: {e}"),
        }
    }
}

impl Error for ChartError {}

impl From<TimeError> for ChartError {
    fn from(e: TimeError) -> Self {
        Self::InvalidTimeInput(e)
    }
}

impl From<EphemError> for ChartError {
    fn from(e: EphemError) -> Self {
        Self::Ephemeris(e)
    }
}
