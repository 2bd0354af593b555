//! The external ephemeris backend contract.

use crate::error::EphemError;

/// A body longitude as returned by a provider, before normalization.
///
/// Some backends wrap the scalar in a one-element sequence. The wrapped
/// form must not leak past [`crate::adapter::body_longitude`].
#[derive(Debug, Clone, PartialEq)]
pub enum RawLongitude {
    /// Plain degrees.
    Scalar(f64),
    /// Degrees wrapped in a sequence; only the first element is meaningful.
    Wrapped(Vec<f64>),
}

/// A house computation as returned by a provider, before normalization.
#[derive(Debug, Clone, PartialEq)]
pub struct RawHouses {
    /// 12 cusp longitudes (0-indexed) or 13 with slot 0 unused (1-indexed).
    pub cusps: Vec<f64>,
    /// Angle array; slot 0 is the ascendant.
    pub ascmc: Vec<f64>,
}

/// External ephemeris backend.
///
/// `jd_ut` is a Julian Date built from UTC calendar fields; `body_id` is
/// the provider's own body numbering (see `Graha::provider_id` in
/// `jataka_vedic`). Implementations must be reentrant or externally
/// serialized; the core issues one synchronous call at a time.
pub trait EphemerisProvider {
    /// Ecliptic longitude of a body, degrees, raw shape.
    fn position(&self, jd_ut: f64, body_id: i32) -> Result<RawLongitude, EphemError>;

    /// House cusps and angles for an observer location, degrees, raw shape.
    fn houses(&self, jd_ut: f64, latitude_deg: f64, longitude_deg: f64)
    -> Result<RawHouses, EphemError>;
}
