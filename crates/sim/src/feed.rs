use crate::generator::SampleGenerator;
use chrono::{DateTime, Local};
use tracing::debug;
use vitals_core::{FeedSnapshot, MetricKind, RollingMetricSeries, Sample};

/// A rolling series paired with the generator that feeds it.
///
/// Advanced only by [`MetricFeed::tick`]; the timer lives outside.
pub struct MetricFeed {
    kind:      MetricKind,
    series:    RollingMetricSeries,
    generator: Box<dyn SampleGenerator>,
}

impl MetricFeed {
    pub fn new(
        kind: MetricKind,
        series: RollingMetricSeries,
        generator: impl SampleGenerator + 'static,
    ) -> Self {
        Self {
            kind,
            series,
            generator: Box::new(generator),
        }
    }

    /// Draw one sample stamped `at`, append it, and return it.
    pub fn tick(&mut self, at: DateTime<Local>) -> Sample {
        let sample = self.generator.next(self.series.latest(), at);
        self.series.append(sample);
        debug!(kind = %self.kind, value = sample.value, len = self.series.len(), "feed tick");
        sample
    }

    pub fn snapshot(&self) -> FeedSnapshot {
        FeedSnapshot {
            kind:    self.kind,
            samples: self.series.snapshot(),
            stats:   self.series.stats().ok(),
        }
    }

    pub fn kind(&self) -> MetricKind {
        self.kind
    }

    pub fn series(&self) -> &RollingMetricSeries {
        &self.series
    }
}

impl std::fmt::Debug for MetricFeed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MetricFeed")
            .field("kind", &self.kind)
            .field("series", &self.series)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::ScriptedGenerator;
    use chrono::{Duration, TimeZone};

    fn start() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 1, 15, 9, 0, 0).unwrap()
    }

    fn scripted_feed(capacity: usize, script: &[f64]) -> MetricFeed {
        MetricFeed::new(
            MetricKind::HeartRate,
            RollingMetricSeries::new(capacity).unwrap(),
            ScriptedGenerator::new(script.to_vec()).unwrap(),
        )
    }

    #[test]
    fn empty_feed_snapshot_has_no_stats() {
        let feed = scripted_feed(3, &[70.0]);
        let snapshot = feed.snapshot();
        assert!(snapshot.samples.is_empty());
        assert!(snapshot.stats.is_none());
    }

    #[test]
    fn ticks_append_and_evict() {
        let mut feed = scripted_feed(3, &[70.0, 72.0, 68.0, 75.0]);
        for i in 0..4 {
            feed.tick(start() + Duration::seconds(3 * i));
        }

        let snapshot = feed.snapshot();
        let values: Vec<f64> = snapshot.samples.iter().map(|s| s.value).collect();
        assert_eq!(values, vec![72.0, 68.0, 75.0]);
        assert_eq!(snapshot.latest().unwrap().timestamp, start() + Duration::seconds(9));

        let stats = snapshot.stats.unwrap();
        assert_eq!((stats.min, stats.max, stats.count), (68.0, 75.0, 3));
        assert!((stats.mean - 71.67).abs() < 0.01);
    }

    #[test]
    fn tick_returns_appended_sample() {
        let mut feed = scripted_feed(2, &[81.0]);
        let sample = feed.tick(start());
        assert_eq!(feed.series().latest(), Some(&sample));
        assert_eq!(feed.kind(), MetricKind::HeartRate);
    }

    #[test]
    fn generator_sees_previous_sample() {
        struct Drift;
        impl SampleGenerator for Drift {
            fn next_value(&mut self, previous: Option<&Sample>) -> f64 {
                previous.map_or(70.0, |s| s.value + 1.0)
            }
        }

        let mut feed = MetricFeed::new(
            MetricKind::HeartRate,
            RollingMetricSeries::new(10).unwrap(),
            Drift,
        );
        feed.tick(start());
        feed.tick(start());
        assert_eq!(feed.tick(start()).value, 72.0);
    }
}
