//! Nakshatra segment lookup.
//!
//! The ecliptic is divided into 27 equal segments of 13°20′ each,
//! starting from Ashwini at 0 degrees. The Moon's segment selects the
//! starting Vimshottari dasha period.

use crate::util::normalize_360;

/// Span of one nakshatra in degrees (13°20′).
pub const NAKSHATRA_SPAN: f64 = 360.0 / 27.0;

/// The 27 nakshatra names starting from Ashwini.
pub const NAKSHATRA_NAMES: [&str; 27] = [
    "Ashwini",
    "Bharani",
    "Krittika",
    "Rohini",
    "Mrigashira",
    "Ardra",
    "Punarvasu",
    "Pushya",
    "Ashlesha",
    "Magha",
    "Purva Phalguni",
    "Uttara Phalguni",
    "Hasta",
    "Chitra",
    "Swati",
    "Vishakha",
    "Anuradha",
    "Jyeshtha",
    "Mula",
    "Purva Ashadha",
    "Uttara Ashadha",
    "Shravana",
    "Dhanishta",
    "Shatabhisha",
    "Purva Bhadrapada",
    "Uttara Bhadrapada",
    "Revati",
];

/// 0-based nakshatra index (0 = Ashwini .. 26 = Revati) for a longitude.
///
/// Clamped to 26 in case of floating point edge (exactly 360.0).
pub fn nakshatra_index(lon_deg: f64) -> u8 {
    let lon = normalize_360(lon_deg);
    let idx = (lon / NAKSHATRA_SPAN).floor() as u8;
    idx.min(26)
}

/// Name of the nakshatra with the given 0-based index.
///
/// Returns None if index >= 27.
pub fn nakshatra_name(index: u8) -> Option<&'static str> {
    NAKSHATRA_NAMES.get(index as usize).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_covers_circle() {
        assert!((NAKSHATRA_SPAN * 27.0 - 360.0).abs() < 1e-12);
    }

    #[test]
    fn index_at_zero() {
        assert_eq!(nakshatra_index(0.0), 0);
    }

    #[test]
    fn index_boundaries() {
        for i in 0..27u8 {
            let lon = i as f64 * NAKSHATRA_SPAN;
            assert_eq!(nakshatra_index(lon), i, "boundary at {lon}");
        }
    }

    #[test]
    fn rohini_at_40() {
        // 40 / 13.333 = 3.0 exactly
        assert_eq!(nakshatra_index(40.0), 3);
        assert_eq!(nakshatra_name(3), Some("Rohini"));
    }

    #[test]
    fn index_wraps_negative() {
        assert_eq!(nakshatra_index(-1.0), 26); // 359 deg -> Revati
    }

    #[test]
    fn name_out_of_range() {
        assert_eq!(nakshatra_name(27), None);
    }
}
