//! Bhava (house) membership lookup.

use jataka_ephem::HouseCusps;

use crate::util::{in_arc, normalize_360};

/// House number (1..12) containing a longitude.
///
/// House *i* spans from cusp *i* to cusp *i+1* (house 12 wraps to cusp 1),
/// half-open, wrap-aware. Scan order is 1→12 and the first match wins.
/// If nothing matches — reachable only through floating point dust at a
/// wrap boundary, since 12 well-formed cusps cover the circle — the
/// longitude is assigned to house 12.
pub fn house_of(lon_deg: f64, cusps: &HouseCusps) -> u8 {
    let lon = normalize_360(lon_deg);
    for house in 1..=12u8 {
        let start = cusps.cusp(house);
        let end = cusps.cusp(HouseCusps::next_house(house));
        if in_arc(lon, start, end) {
            return house;
        }
    }
    12
}
