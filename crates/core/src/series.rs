use crate::error::{Result, VitalsError};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// One observation of a metric.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub timestamp: DateTime<Local>,
    pub value:     f64,
}

impl Sample {
    pub fn new(timestamp: DateTime<Local>, value: f64) -> Self {
        Self { timestamp, value }
    }

    /// Chart axis label, e.g. `sample.label("%H:%M")` → `"14:05"`.
    pub fn label(&self, fmt: &str) -> String {
        self.timestamp.format(fmt).to_string()
    }
}

/// Aggregates over the samples currently held by a [`RollingMetricSeries`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DerivedStats {
    pub mean:  f64,
    pub min:   f64,
    pub max:   f64,
    pub count: usize,
}

/// Bounded, oldest-first buffer of samples. Backing store of every
/// chart on the dashboard.
///
/// Appending to a full series evicts exactly one sample, the oldest.
/// Statistics are recomputed from the buffer on every read, so they can
/// never lag behind a mutation.
#[derive(Debug, Clone)]
pub struct RollingMetricSeries {
    samples:  VecDeque<Sample>,
    capacity: usize,
}

impl RollingMetricSeries {
    /// Empty series retaining at most `capacity` samples.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(VitalsError::InvalidConfiguration(
                "series capacity must be at least 1".into(),
            ));
        }
        Ok(Self {
            samples: VecDeque::with_capacity(capacity),
            capacity,
        })
    }

    /// Series pre-filled with `history` (oldest first). Only the most recent
    /// `capacity` entries are kept.
    pub fn with_history(capacity: usize, history: impl IntoIterator<Item = Sample>) -> Result<Self> {
        let mut series = Self::new(capacity)?;
        for sample in history {
            series.append(sample);
        }
        Ok(series)
    }

    /// Push a new sample, evicting the oldest if at capacity.
    pub fn append(&mut self, sample: Sample) {
        if self.samples.len() == self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(sample);
    }

    /// Mean, extrema, and count of the retained samples.
    pub fn stats(&self) -> Result<DerivedStats> {
        let first = self.samples.front().ok_or(VitalsError::EmptySeries)?;

        let (sum, min, max) = self.samples.iter().fold(
            (0.0, first.value, first.value),
            |(sum, min, max), s| (sum + s.value, min.min(s.value), max.max(s.value)),
        );

        let count = self.samples.len();
        Ok(DerivedStats {
            mean: sum / count as f64,
            min,
            max,
            count,
        })
    }

    /// Owned copy of the buffer, oldest first.
    pub fn snapshot(&self) -> Vec<Sample> {
        self.samples.iter().copied().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Sample> {
        self.samples.iter()
    }

    pub fn latest(&self) -> Option<&Sample> {
        self.samples.back()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn at(minute: i64) -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap() + Duration::minutes(minute)
    }

    fn series_of(capacity: usize, values: &[f64]) -> RollingMetricSeries {
        let samples = values
            .iter()
            .enumerate()
            .map(|(i, v)| Sample::new(at(i as i64), *v));
        RollingMetricSeries::with_history(capacity, samples).unwrap()
    }

    fn values(series: &RollingMetricSeries) -> Vec<f64> {
        series.snapshot().iter().map(|s| s.value).collect()
    }

    #[test]
    fn zero_capacity_is_rejected() {
        assert!(matches!(
            RollingMetricSeries::new(0),
            Err(VitalsError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn stats_on_empty_series_fail() {
        let series = RollingMetricSeries::new(4).unwrap();
        assert!(series.is_empty());
        assert!(matches!(series.stats(), Err(VitalsError::EmptySeries)));
    }

    #[test]
    fn under_capacity_keeps_insertion_order() {
        let series = series_of(5, &[1.0, 2.0, 3.0]);
        assert_eq!(values(&series), vec![1.0, 2.0, 3.0]);
        assert_eq!(series.len(), 3);
    }

    #[test]
    fn evicts_oldest_first() {
        let mut series = series_of(3, &[70.0, 72.0, 68.0]);
        assert_eq!(values(&series), vec![70.0, 72.0, 68.0]);

        let stats = series.stats().unwrap();
        assert_eq!(stats.mean, 70.0);
        assert_eq!(stats.min, 68.0);
        assert_eq!(stats.max, 72.0);
        assert_eq!(stats.count, 3);

        series.append(Sample::new(at(3), 75.0));
        assert_eq!(values(&series), vec![72.0, 68.0, 75.0]);

        let stats = series.stats().unwrap();
        assert!((stats.mean - 71.666_666).abs() < 1e-4);
        assert_eq!(stats.min, 68.0);
        assert_eq!(stats.max, 75.0);
        assert_eq!(stats.count, 3);
    }

    #[test]
    fn long_run_retains_last_capacity_samples() {
        let input: Vec<f64> = (0..50).map(f64::from).collect();
        let series = series_of(7, &input);
        assert_eq!(values(&series), input[43..].to_vec());
        assert_eq!(series.latest().map(|s| s.value), Some(49.0));
    }

    #[test]
    fn seed_history_is_truncated_to_most_recent() {
        let series = series_of(24, &(0..30).map(f64::from).collect::<Vec<_>>());
        assert_eq!(series.len(), 24);
        assert_eq!(series.snapshot()[0].value, 6.0);
        assert_eq!(series.snapshot()[0].timestamp, at(6));
    }

    #[test]
    fn reads_are_idempotent() {
        let series = series_of(4, &[3.5, 9.0, -1.0]);
        assert_eq!(series.stats().unwrap(), series.stats().unwrap());
        assert_eq!(series.snapshot(), series.snapshot());
    }

    #[test]
    fn count_matches_snapshot_and_mean_is_bounded() {
        let mut series = RollingMetricSeries::new(5).unwrap();
        for (i, v) in [81.0, 66.5, 79.25, 70.0, 84.0, 65.0, 77.0].iter().enumerate() {
            series.append(Sample::new(at(i as i64), *v));
            let stats = series.stats().unwrap();
            assert_eq!(stats.count, series.snapshot().len());
            assert!(stats.min <= stats.mean && stats.mean <= stats.max);
        }
    }

    #[test]
    fn snapshot_is_detached_from_buffer() {
        let series = series_of(3, &[1.0, 2.0]);
        let mut copy = series.snapshot();
        copy[0].value = 100.0;
        copy.clear();
        assert_eq!(values(&series), vec![1.0, 2.0]);
    }

    #[test]
    fn label_formats_timestamp() {
        assert_eq!(Sample::new(at(65), 1.0).label("%H:%M"), "09:05");
    }
}
