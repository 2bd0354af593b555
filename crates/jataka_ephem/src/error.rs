//! Error types for ephemeris access and normalization.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from the ephemeris provider or from normalizing its output.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum EphemError {
    /// The provider itself failed.
    Provider(String),
    /// A longitude arrived wrapped in an empty sequence.
    EmptyLongitude,
    /// A returned value was NaN or infinite.
    NonFinite(&'static str),
    /// Cusp array length was neither 12 nor 13.
    CuspCount(usize),
    /// The ascendant slot of the `ascmc` array was missing.
    MissingAscendant,
    /// Invalid geographic coordinate input.
    InvalidLocation(&'static str),
}

impl Display for EphemError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Provider(msg) => write!(f, "provider error: {msg}"),
            Self::EmptyLongitude => write!(f, "provider returned an empty longitude sequence"),
            Self::NonFinite(what) => write!(f, "non-finite {what} from provider"),
            Self::CuspCount(n) => write!(f, "expected 12 or 13 cusps, got {n}"),
            Self::MissingAscendant => write!(f, "provider returned no ascendant"),
            Self::InvalidLocation(msg) => write!(f, "invalid location: {msg}"),
        }
    }
}

impl Error for EphemError {}
