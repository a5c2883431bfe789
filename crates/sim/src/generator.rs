use chrono::{DateTime, Local};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use vitals_core::{round_to, Result, Sample, VitalsError, MAX_PRECISION};

/// Strategy producing the next simulated value of a feed.
///
/// `previous` is the newest sample already in the series, if any. The
/// built-in generators ignore it; a smoothing or trend model would not.
pub trait SampleGenerator: Send {
    fn next_value(&mut self, previous: Option<&Sample>) -> f64;

    fn next(&mut self, previous: Option<&Sample>, at: DateTime<Local>) -> Sample {
        Sample::new(at, self.next_value(previous))
    }
}

/// Memoryless draw from the closed interval `[low, high]`, one per tick.
#[derive(Debug, Clone)]
pub struct UniformGenerator<R = StdRng> {
    low:       f64,
    high:      f64,
    precision: Option<u32>,
    rng:       R,
}

impl UniformGenerator<StdRng> {
    /// Generator seeded from OS entropy.
    pub fn new(low: f64, high: f64) -> Result<Self> {
        Self::with_rng(low, high, StdRng::from_entropy())
    }

    /// Reproducible generator.
    pub fn seeded(low: f64, high: f64, seed: u64) -> Result<Self> {
        Self::with_rng(low, high, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> UniformGenerator<R> {
    pub fn with_rng(low: f64, high: f64, rng: R) -> Result<Self> {
        // Finite ends can still be too far apart for the sampler.
        if !low.is_finite() || !high.is_finite() || low > high || !(high - low).is_finite() {
            return Err(VitalsError::InvalidConfiguration(format!(
                "generator range [{low}, {high}] is not a valid closed interval"
            )));
        }
        Ok(Self { low, high, precision: None, rng })
    }

    /// Round every drawn value to `decimals` places (sleep hours use 1).
    /// Anything above [`MAX_PRECISION`] is capped.
    #[must_use]
    pub fn with_precision(mut self, decimals: u32) -> Self {
        self.precision = Some(decimals.min(MAX_PRECISION));
        self
    }

    pub fn range(&self) -> (f64, f64) {
        (self.low, self.high)
    }
}

impl<R: Rng + Send> SampleGenerator for UniformGenerator<R> {
    fn next_value(&mut self, _previous: Option<&Sample>) -> f64 {
        let value = self.rng.gen_range(self.low..=self.high);
        match self.precision {
            // Rounding may step past a bound that isn't on the decimal grid.
            Some(decimals) => round_to(value, decimals).clamp(self.low, self.high),
            None => value,
        }
    }
}

/// Replays a fixed list of values, wrapping around at the end.
#[derive(Debug, Clone)]
pub struct ScriptedGenerator {
    values: Vec<f64>,
    cursor: usize,
}

impl ScriptedGenerator {
    pub fn new(values: impl Into<Vec<f64>>) -> Result<Self> {
        let values = values.into();
        if values.is_empty() {
            return Err(VitalsError::InvalidConfiguration(
                "scripted generator needs at least one value".into(),
            ));
        }
        Ok(Self { values, cursor: 0 })
    }
}

impl SampleGenerator for ScriptedGenerator {
    fn next_value(&mut self, _previous: Option<&Sample>) -> f64 {
        let value = self.values[self.cursor];
        self.cursor = (self.cursor + 1) % self.values.len();
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_draws_stay_in_range_and_center_on_midpoint() {
        let mut generator = UniformGenerator::seeded(65.0, 85.0, 42).unwrap();
        let draws: Vec<f64> = (0..1000).map(|_| generator.next_value(None)).collect();

        assert!(draws.iter().all(|v| (65.0..=85.0).contains(v)));
        let mean = draws.iter().sum::<f64>() / draws.len() as f64;
        assert!((mean - 75.0).abs() < 1.0, "empirical mean {mean}");
    }

    #[test]
    fn precision_rounds_values() {
        let mut generator = UniformGenerator::seeded(5.0, 9.0, 3).unwrap().with_precision(1);
        for _ in 0..200 {
            let v = generator.next_value(None);
            assert!((5.0..=9.0).contains(&v));
            assert!((v * 10.0 - (v * 10.0).round()).abs() < 1e-9, "{v}");
        }
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = UniformGenerator::seeded(0.0, 1.0, 99).unwrap();
        let mut b = UniformGenerator::seeded(0.0, 1.0, 99).unwrap();
        for _ in 0..20 {
            assert_eq!(a.next_value(None), b.next_value(None));
        }
    }

    #[test]
    fn degenerate_range_is_allowed() {
        let mut generator = UniformGenerator::seeded(72.0, 72.0, 1).unwrap();
        assert_eq!(generator.next_value(None), 72.0);
    }

    #[test]
    fn inverted_or_non_finite_range_is_rejected() {
        assert!(UniformGenerator::seeded(85.0, 65.0, 0).is_err());
        assert!(UniformGenerator::seeded(f64::NAN, 1.0, 0).is_err());
        assert!(UniformGenerator::seeded(0.0, f64::INFINITY, 0).is_err());
    }

    #[test]
    fn scripted_generator_wraps() {
        let mut generator = ScriptedGenerator::new(vec![70.0, 72.0]).unwrap();
        let drawn: Vec<f64> = (0..5).map(|_| generator.next_value(None)).collect();
        assert_eq!(drawn, vec![70.0, 72.0, 70.0, 72.0, 70.0]);
    }

    #[test]
    fn empty_script_is_rejected() {
        assert!(matches!(
            ScriptedGenerator::new(Vec::new()),
            Err(VitalsError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn oversized_precision_is_capped() {
        let mut generator = UniformGenerator::seeded(65.0, 85.0, 1).unwrap().with_precision(400);
        for _ in 0..100 {
            let v = generator.next_value(None);
            assert!(v.is_finite() && (65.0..=85.0).contains(&v), "{v}");
        }
    }

    #[test]
    fn overflowing_span_is_rejected() {
        assert!(matches!(
            UniformGenerator::seeded(-1.7e308, 1.7e308, 1),
            Err(VitalsError::InvalidConfiguration(_))
        ));
        assert!(UniformGenerator::seeded(-1.0e308, 1.0e308, 1).is_err());
    }
}
