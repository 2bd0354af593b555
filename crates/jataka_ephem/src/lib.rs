//! Ephemeris provider seam and response normalization.
//!
//! The actual ephemeris (planetary positions, house cusps) is an external
//! backend consumed through the [`EphemerisProvider`] trait. Providers are
//! allowed two known inconsistencies, both absorbed here so downstream
//! code only ever sees plain degree values in [0, 360):
//! - a body longitude may arrive as a bare scalar or wrapped in a
//!   one-element sequence;
//! - the cusp array may be 12 elements (0-indexed) or 13 elements
//!   (1-indexed with slot 0 unused).

pub mod adapter;
pub mod cusps;
pub mod error;
pub mod provider;

pub use adapter::{body_longitude, houses, validate_location};
pub use cusps::HouseCusps;
pub use error::EphemError;
pub use provider::{EphemerisProvider, RawHouses, RawLongitude};
