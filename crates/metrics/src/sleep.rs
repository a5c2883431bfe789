use std::fmt;
use vitals_core::{round_to, DerivedStats, Result};

/// Recommended nightly range for adults, in hours.
pub const RECOMMENDED_HOURS: (f64, f64) = (7.0, 9.0);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SleepQuality {
    Poor,
    Fair,
    Good,
    Excellent,
}

impl SleepQuality {
    /// Grade a quality score given in percent.
    pub fn of(score: f64) -> Self {
        match score {
            s if s < 70.0 => Self::Poor,
            s if s < 80.0 => Self::Fair,
            s if s < 90.0 => Self::Good,
            _ => Self::Excellent,
        }
    }
}

impl fmt::Display for SleepQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Poor      => "Poor",
            Self::Fair      => "Fair",
            Self::Good      => "Good",
            Self::Excellent => "Excellent",
        })
    }
}

/// Weekly sleep card: average duration and average quality.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SleepSummary {
    /// Mean hours, one decimal.
    pub average_hours: f64,
    /// Mean quality, whole percent.
    pub average_quality: f64,
    pub grade: SleepQuality,
}

impl SleepSummary {
    pub fn new(hours: &DerivedStats, quality: &DerivedStats) -> Self {
        let average_quality = quality.mean.round();
        Self {
            average_hours: round_to(hours.mean, 1),
            average_quality,
            grade: SleepQuality::of(average_quality),
        }
    }

    /// Convenience for callers holding possibly-empty stats.
    pub fn try_new(hours: Result<DerivedStats>, quality: Result<DerivedStats>) -> Result<Self> {
        Ok(Self::new(&hours?, &quality?))
    }

    pub fn meets_recommendation(&self) -> bool {
        let (low, high) = RECOMMENDED_HOURS;
        (low..=high).contains(&self.average_hours)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitals_core::VitalsError;

    fn stats(mean: f64) -> DerivedStats {
        DerivedStats { mean, min: mean, max: mean, count: 7 }
    }

    #[test]
    fn quality_grades() {
        assert_eq!(SleepQuality::of(69.0), SleepQuality::Poor);
        assert_eq!(SleepQuality::of(70.0), SleepQuality::Fair);
        assert_eq!(SleepQuality::of(89.9), SleepQuality::Good);
        assert_eq!(SleepQuality::of(90.0), SleepQuality::Excellent);
    }

    #[test]
    fn summary_rounds_averages() {
        let summary = SleepSummary::new(&stats(7.2571), &stats(79.6));
        assert_eq!(summary.average_hours, 7.3);
        assert_eq!(summary.average_quality, 80.0);
        assert_eq!(summary.grade, SleepQuality::Good);
        assert!(summary.meets_recommendation());
    }

    #[test]
    fn short_week_misses_recommendation() {
        assert!(!SleepSummary::new(&stats(6.1), &stats(65.0)).meets_recommendation());
    }

    #[test]
    fn empty_stats_propagate() {
        let result = SleepSummary::try_new(Err(VitalsError::EmptySeries), Ok(stats(80.0)));
        assert!(matches!(result, Err(VitalsError::EmptySeries)));
    }
}
