use std::fmt;
use vitals_core::DerivedStats;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeartRateZone {
    Resting,
    Normal,
    Elevated,
    High,
}

impl HeartRateZone {
    pub fn of(bpm: f64) -> Self {
        match bpm {
            b if b < 60.0 => Self::Resting,
            b if b < 70.0 => Self::Normal,
            b if b < 85.0 => Self::Elevated,
            _ => Self::High,
        }
    }
}

impl fmt::Display for HeartRateZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Resting  => "Resting",
            Self::Normal   => "Normal",
            Self::Elevated => "Elevated",
            Self::High     => "High",
        })
    }
}

/// Card figures for the heart-rate window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeartRateSummary {
    pub current: f64,
    pub zone:    HeartRateZone,
    /// Window mean, rounded to whole bpm.
    pub average: f64,
    /// Lowest reading in the window. This is only as "resting" as the
    /// simulated feed allows; its floor is 65 bpm.
    pub resting: f64,
}

impl HeartRateSummary {
    pub fn new(current: f64, stats: &DerivedStats) -> Self {
        Self {
            current,
            zone:    HeartRateZone::of(current),
            average: stats.mean.round(),
            resting: stats.min,
        }
    }
}
