//! Rounding policy for rates and averages.

/// Rounds to 2 decimal places, half away from zero.
///
/// Every rate and average the statistics reports expose goes through this
/// function. Division-by-zero guards live at the call sites and return 0
/// before rounding is reached.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_half_away_from_zero() {
        // 0.125 and 0.375 are exactly representable midpoints
        assert_eq!(round2(0.125), 0.13);
        assert_eq!(round2(0.375), 0.38);
        assert_eq!(round2(-0.125), -0.13);
    }

    #[test]
    fn rounds_ordinary_values() {
        assert_eq!(round2(33.333333), 33.33);
        assert_eq!(round2(66.666666), 66.67);
        assert_eq!(round2(100.005001), 100.01);
    }

    #[test]
    fn leaves_exact_values_unchanged() {
        assert_eq!(round2(75.0), 75.0);
        assert_eq!(round2(0.0), 0.0);
        assert_eq!(round2(150.25), 150.25);
    }

    #[test]
    fn rounds_computed_averages() {
        // 100 / 3 books
        assert_eq!(round2(100.0 / 3.0), 33.33);
        // 200 / 3 pages per day
        assert_eq!(round2(200.0 / 3.0), 66.67);
    }
}
