//! Pure chart math for natal (jataka) analysis.
//!
//! This crate provides:
//! - Rashi (zodiac sign) classification from ecliptic longitude
//! - Graha (planet) identities and provider body ids
//! - Nakshatra segment lookup
//! - Wrap-aware bhava (house) membership
//! - Mangal dosha (Manglik) evaluation
//! - The Vimshottari dasha engine
//!
//! Everything here is a total function over already-normalized inputs;
//! ephemeris access lives in `jataka_ephem`.

pub mod bhava;
pub mod dasha;
pub mod dosha;
pub mod graha;
pub mod nakshatra;
pub mod rashi;
pub mod util;

pub use bhava::house_of;
pub use dasha::{
    DashaPeriod, VIMSHOTTARI_GRAHAS, VIMSHOTTARI_TOTAL_YEARS, VIMSHOTTARI_YEARS, birth_balance,
    current_period,
};
pub use dosha::{MANGLIK_HOUSES, MangalDosha, mangal_dosha};
pub use graha::{ALL_GRAHAS, Graha, SAPTA_GRAHAS};
pub use nakshatra::{NAKSHATRA_NAMES, NAKSHATRA_SPAN, nakshatra_index, nakshatra_name};
pub use rashi::{ALL_RASHIS, Rashi, rashi_from_longitude};
pub use util::{in_arc, normalize_360};
