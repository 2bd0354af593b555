//! Vimshottari dasha engine.
//!
//! A fixed cycle of 9 graha periods with unequal lengths summing to 120
//! years. The Moon's nakshatra at birth selects the starting period; the
//! 27 nakshatras map onto the 9 periods by modular reduction (segments
//! 0, 9 and 18 share a lord, and so on). The Moon's progress through its
//! nakshatra fixes how much of that first period remains at birth.

use crate::graha::Graha;
use crate::nakshatra::{NAKSHATRA_SPAN, nakshatra_index};
use crate::util::normalize_360;

/// Vimshottari graha sequence: Ketu, Shukra, Surya, Chandra, Mangal,
/// Rahu, Guru, Shani, Buddh.
pub const VIMSHOTTARI_GRAHAS: [Graha; 9] = [
    Graha::Ketu,
    Graha::Shukra,
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Rahu,
    Graha::Guru,
    Graha::Shani,
    Graha::Buddh,
];

/// Vimshottari period lengths in years, matching [`VIMSHOTTARI_GRAHAS`].
pub const VIMSHOTTARI_YEARS: [f64; 9] = [7.0, 20.0, 6.0, 10.0, 7.0, 18.0, 16.0, 19.0, 17.0];

/// Full cycle length in years.
pub const VIMSHOTTARI_TOTAL_YEARS: f64 = 120.0;

/// The active dasha period at some moment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashaPeriod {
    /// The graha ruling the period.
    pub graha: Graha,
    /// Years left in the period at the queried moment.
    pub remaining_years: f64,
}

/// Birth balance from the Moon's longitude.
///
/// Returns `(nakshatra_index, balance_years, elapsed_fraction)`:
/// - `nakshatra_index`: 0-based index (0=Ashwini..26=Revati)
/// - `balance_years`: years left in the starting graha's period at birth
/// - `elapsed_fraction`: fraction of the nakshatra already traversed [0, 1)
pub fn birth_balance(moon_lon_deg: f64) -> (u8, f64, f64) {
    let lon = normalize_360(moon_lon_deg);
    let nak_idx = nakshatra_index(lon);
    let position_in_nak = lon - (nak_idx as f64) * NAKSHATRA_SPAN;
    let elapsed_fraction = position_in_nak / NAKSHATRA_SPAN;
    let start = (nak_idx as usize) % 9;
    let balance_years = (1.0 - elapsed_fraction) * VIMSHOTTARI_YEARS[start];
    (nak_idx, balance_years, elapsed_fraction)
}

/// The active dasha period after `elapsed_years` of life.
///
/// Consumes the birth balance first, reduces the remainder modulo the
/// 120-year cycle, then walks the fixed sequence until the remainder
/// falls inside one period. Terminates for every input, finite or not:
/// the walk is bounded at 9 steps, and non-finite input surfaces as a
/// NaN `remaining_years` rather than looping.
pub fn current_period(moon_lon_deg: f64, elapsed_years: f64) -> DashaPeriod {
    let (nak_idx, balance_years, _) = birth_balance(moon_lon_deg);
    let start = (nak_idx as usize) % 9;

    if elapsed_years < balance_years {
        return DashaPeriod {
            graha: VIMSHOTTARI_GRAHAS[start],
            remaining_years: balance_years - elapsed_years,
        };
    }

    let mut left = (elapsed_years - balance_years) % VIMSHOTTARI_TOTAL_YEARS;
    let mut idx = (start + 1) % 9;
    for _ in 0..9 {
        let span = VIMSHOTTARI_YEARS[idx];
        if left < span {
            return DashaPeriod {
                graha: VIMSHOTTARI_GRAHAS[idx],
                remaining_years: span - left,
            };
        }
        left -= span;
        idx = (idx + 1) % 9;
    }

    // Only reachable when left is NaN (non-finite moon longitude or
    // elapsed time); every finite remainder lies inside the 120-year
    // cycle and matches above.
    DashaPeriod {
        graha: VIMSHOTTARI_GRAHAS[start],
        remaining_years: left,
    }
}
