/// Most decimal places a value can be rounded to. Beyond this an `f64`
/// carries no further digits and `10^n` heads towards infinity.
pub const MAX_PRECISION: u32 = 15;

/// Round half away from zero to `decimals` places, capped at
/// [`MAX_PRECISION`].
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals.min(MAX_PRECISION) as i32);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(round_to(7.25, 1), 7.3);
        assert_eq!(round_to(6.04, 1), 6.0);
        assert_eq!(round_to(71.5, 0), 72.0);
        assert_eq!(round_to(-2.5, 0), -3.0);
    }

    #[test]
    fn huge_precision_stays_finite() {
        for decimals in [MAX_PRECISION + 1, 400, u32::MAX] {
            let v = round_to(72.123_456, decimals);
            assert!(v.is_finite(), "{decimals} -> {v}");
            assert!((v - 72.123_456).abs() < 1e-9);
        }
    }
}
