//! Normalizing adapter over an [`EphemerisProvider`].
//!
//! Downstream code never sees the provider's raw shapes: longitudes come
//! out as plain finite degrees in [0, 360), houses as a validated
//! [`HouseCusps`] plus ascendant.

use crate::cusps::HouseCusps;
use crate::error::EphemError;
use crate::provider::{EphemerisProvider, RawLongitude};

/// Check geographic coordinates before an ephemeris call.
pub fn validate_location(latitude_deg: f64, longitude_deg: f64) -> Result<(), EphemError> {
    if !latitude_deg.is_finite() || latitude_deg.abs() > 90.0 {
        return Err(EphemError::InvalidLocation("latitude outside [-90, 90]"));
    }
    if !longitude_deg.is_finite() || longitude_deg.abs() > 180.0 {
        return Err(EphemError::InvalidLocation("longitude outside [-180, 180]"));
    }
    Ok(())
}

/// Ecliptic longitude of a body, degrees in [0, 360).
///
/// Unwraps the one-element-sequence provider quirk and rejects empty or
/// non-finite results.
pub fn body_longitude(
    provider: &dyn EphemerisProvider,
    jd_ut: f64,
    body_id: i32,
) -> Result<f64, EphemError> {
    let raw = provider.position(jd_ut, body_id)?;
    let deg = match raw {
        RawLongitude::Scalar(deg) => deg,
        RawLongitude::Wrapped(seq) => *seq.first().ok_or(EphemError::EmptyLongitude)?,
    };
    if !deg.is_finite() {
        return Err(EphemError::NonFinite("body longitude"));
    }
    Ok(normalize_360(deg))
}

/// Ascendant and house cusps for an observer location.
pub fn houses(
    provider: &dyn EphemerisProvider,
    jd_ut: f64,
    latitude_deg: f64,
    longitude_deg: f64,
) -> Result<(f64, HouseCusps), EphemError> {
    validate_location(latitude_deg, longitude_deg)?;
    let raw = provider.houses(jd_ut, latitude_deg, longitude_deg)?;

    let asc = *raw.ascmc.first().ok_or(EphemError::MissingAscendant)?;
    if !asc.is_finite() {
        return Err(EphemError::NonFinite("ascendant"));
    }

    let cusps = HouseCusps::from_raw(&raw.cusps)?;
    Ok((normalize_360(asc), cusps))
}

/// Normalize longitude to [0, 360).
fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    if r < 0.0 { r + 360.0 } else { r }
}
