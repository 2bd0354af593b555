//! Shared circle arithmetic.

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    if r < 0.0 { r + 360.0 } else { r }
}

/// Wrap-aware membership test for the half-open arc [start, end) in degrees.
///
/// When `start <= end` the arc is an ordinary interval; when `start > end`
/// it crosses 0° and membership means `lon >= start || lon < end`. All
/// three arguments are expected in [0, 360).
pub fn in_arc(lon: f64, start: f64, end: f64) -> bool {
    if start <= end {
        start <= lon && lon < end
    } else {
        lon >= start || lon < end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_identity() {
        assert!((normalize_360(45.0) - 45.0).abs() < 1e-15);
    }

    #[test]
    fn normalize_wraps_full_circle() {
        assert!(normalize_360(360.0).abs() < 1e-15);
        assert!((normalize_360(730.0) - 10.0).abs() < 1e-10);
    }

    #[test]
    fn normalize_negative() {
        assert!((normalize_360(-10.0) - 350.0).abs() < 1e-15);
        assert!((normalize_360(-370.0) - 350.0).abs() < 1e-10);
    }

    #[test]
    fn arc_linear() {
        assert!(in_arc(25.0, 10.0, 40.0));
        assert!(in_arc(10.0, 10.0, 40.0)); // start inclusive
        assert!(!in_arc(40.0, 10.0, 40.0)); // end exclusive
        assert!(!in_arc(5.0, 10.0, 40.0));
    }

    #[test]
    fn arc_wrapping() {
        // Arc from 350 to 20 crosses 0
        assert!(in_arc(355.0, 350.0, 20.0));
        assert!(in_arc(0.0, 350.0, 20.0));
        assert!(in_arc(19.9, 350.0, 20.0));
        assert!(!in_arc(20.0, 350.0, 20.0));
        assert!(!in_arc(180.0, 350.0, 20.0));
    }

    #[test]
    fn degenerate_arc_is_empty() {
        assert!(!in_arc(10.0, 10.0, 10.0));
    }
}
