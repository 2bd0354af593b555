//! Mangal dosha (Manglik) evaluation.
//!
//! The dosha is flagged when Mars occupies one of six houses relative to
//! the ascendant. Houses here are whole-chart house numbers in 1..12.

/// Houses in which Mars raises the Mangal dosha.
pub const MANGLIK_HOUSES: [u8; 6] = [1, 2, 4, 7, 8, 12];

/// Mangal dosha verdict.
#[derive(Debug, Clone, PartialEq)]
pub struct MangalDosha {
    /// Whether the dosha is present.
    pub present: bool,
    /// Human-readable verdict, e.g. "Mars is in house 7. Manglik.".
    pub verdict: String,
}

/// Evaluate Mangal dosha from Mars's house (1..12). Total function.
pub fn mangal_dosha(mars_house: u8) -> MangalDosha {
    let present = MANGLIK_HOUSES.contains(&mars_house);
    let verdict = format!(
        "Mars is in house {mars_house}. {}.",
        if present { "Manglik" } else { "Not Manglik" }
    );
    MangalDosha { present, verdict }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exhaustive_over_houses() {
        for house in 1..=12u8 {
            let expect = matches!(house, 1 | 2 | 4 | 7 | 8 | 12);
            assert_eq!(mangal_dosha(house).present, expect, "house {house}");
        }
    }

    #[test]
    fn verdict_mentions_house_and_flag() {
        let d = mangal_dosha(7);
        assert!(d.present);
        assert!(d.verdict.contains("house 7"));
        assert!(d.verdict.contains("Manglik"));
    }

    #[test]
    fn negative_verdict_text() {
        let d = mangal_dosha(3);
        assert!(!d.present);
        assert_eq!(d.verdict, "Mars is in house 3. Not Manglik.");
    }
}
