//! House cusp longitudes, keyed 1..12.

use crate::error::EphemError;

/// The 12 house cusp longitudes in degrees, each in [0, 360).
///
/// House *i* spans from `cusp(i)` to `cusp(i+1)`, with house 12 wrapping
/// back to house 1; any span may cross 0°.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HouseCusps {
    cusps: [f64; 12],
}

impl HouseCusps {
    /// Build from 12 cusp longitudes for houses 1..12 in order.
    ///
    /// Each value is reduced to [0, 360).
    pub fn new(mut cusps: [f64; 12]) -> Self {
        for c in &mut cusps {
            *c = normalize_360(*c);
        }
        Self { cusps }
    }

    /// Build from a provider cusp array.
    ///
    /// Accepts 12 elements (0-indexed, houses 1..12) or 13 elements
    /// (1-indexed, slot 0 unused). Rejects other lengths and non-finite
    /// values.
    pub fn from_raw(raw: &[f64]) -> Result<Self, EphemError> {
        let slice = match raw.len() {
            12 => raw,
            13 => &raw[1..],
            n => return Err(EphemError::CuspCount(n)),
        };
        let mut cusps = [0.0; 12];
        for (i, &c) in slice.iter().enumerate() {
            if !c.is_finite() {
                return Err(EphemError::NonFinite("house cusp"));
            }
            cusps[i] = normalize_360(c);
        }
        Ok(Self { cusps })
    }

    /// Cusp longitude for a house number in 1..12.
    pub fn cusp(&self, house: u8) -> f64 {
        debug_assert!((1..=12).contains(&house));
        self.cusps[(house - 1) as usize]
    }

    /// The house following `house` in circular order (12 wraps to 1).
    pub const fn next_house(house: u8) -> u8 {
        if house == 12 { 1 } else { house + 1 }
    }

    /// All 12 cusps in house order, for reporting.
    pub fn as_array(&self) -> &[f64; 12] {
        &self.cusps
    }
}

/// Normalize longitude to [0, 360).
fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    if r < 0.0 { r + 360.0 } else { r }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn equal_cusps_from(start: f64) -> [f64; 12] {
        let mut c = [0.0; 12];
        for (i, cusp) in c.iter_mut().enumerate() {
            *cusp = start + (i as f64) * 30.0;
        }
        c
    }

    #[test]
    fn from_raw_zero_indexed() {
        let hc = HouseCusps::from_raw(&equal_cusps_from(10.0)).unwrap();
        assert!((hc.cusp(1) - 10.0).abs() < 1e-12);
        assert!((hc.cusp(12) - 340.0).abs() < 1e-12);
    }

    #[test]
    fn from_raw_one_indexed() {
        let mut raw = vec![999.0];
        raw.extend_from_slice(&equal_cusps_from(10.0));
        let hc = HouseCusps::from_raw(&raw).unwrap();
        assert!((hc.cusp(1) - 10.0).abs() < 1e-12);
        assert!((hc.cusp(7) - 190.0).abs() < 1e-12);
    }

    #[test]
    fn from_raw_wrong_count() {
        assert_eq!(
            HouseCusps::from_raw(&[0.0; 11]).unwrap_err(),
            EphemError::CuspCount(11)
        );
        assert_eq!(
            HouseCusps::from_raw(&[0.0; 14]).unwrap_err(),
            EphemError::CuspCount(14)
        );
    }

    #[test]
    fn from_raw_rejects_nan() {
        let mut raw = equal_cusps_from(10.0);
        raw[4] = f64::NAN;
        assert_eq!(
            HouseCusps::from_raw(&raw).unwrap_err(),
            EphemError::NonFinite("house cusp")
        );
    }

    #[test]
    fn cusps_reduced_to_circle() {
        let hc = HouseCusps::new(equal_cusps_from(350.0));
        assert!((hc.cusp(1) - 350.0).abs() < 1e-12);
        assert!((hc.cusp(2) - 20.0).abs() < 1e-12);
        let hc = HouseCusps::new([-10.0; 12]);
        assert!((hc.cusp(1) - 350.0).abs() < 1e-12);
    }

    #[test]
    fn next_house_wraps() {
        assert_eq!(HouseCusps::next_house(1), 2);
        assert_eq!(HouseCusps::next_house(12), 1);
    }
}
