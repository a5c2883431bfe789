pub mod feed;
pub mod generator;
pub mod history;

pub use feed::MetricFeed;
pub use generator::{ScriptedGenerator, SampleGenerator, UniformGenerator};

use chrono::Local;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::{self, Instant};
use vitals_core::FeedSnapshot;

/// Spawn a background Tokio task that owns `feed`, ticks it every
/// `interval`, and forwards a [`FeedSnapshot`] through the returned channel
/// after each tick.
///
/// The current contents (e.g. a seeded history) are published immediately,
/// before the first tick. The task stops when the receiver is dropped.
pub fn spawn_feed(mut feed: MetricFeed, interval: Duration) -> mpsc::Receiver<FeedSnapshot> {
    let (tx, rx) = mpsc::channel(4);

    tokio::spawn(async move {
        if tx.send(feed.snapshot()).await.is_err() {
            return;
        }

        let mut ticker = time::interval_at(Instant::now() + interval, interval);
        loop {
            ticker.tick().await;
            feed.tick(Local::now());

            if tx.send(feed.snapshot()).await.is_err() {
                tracing::debug!(kind = %feed.kind(), "feed receiver dropped; stopping");
                break; // all receivers dropped
            }
        }
    });

    rx
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitals_core::{MetricKind, RollingMetricSeries};

    #[tokio::test]
    async fn driver_publishes_seed_then_ticks() {
        let feed = MetricFeed::new(
            MetricKind::SleepHours,
            RollingMetricSeries::new(2).unwrap(),
            ScriptedGenerator::new(vec![7.5, 6.0, 8.2]).unwrap(),
        );
        let mut rx = spawn_feed(feed, Duration::from_millis(5));

        let initial = rx.recv().await.unwrap();
        assert!(initial.samples.is_empty());

        let mut last = initial;
        for _ in 0..3 {
            last = rx.recv().await.unwrap();
        }
        let values: Vec<f64> = last.samples.iter().map(|s| s.value).collect();
        assert_eq!(values, vec![6.0, 8.2]);
        assert_eq!(last.kind, MetricKind::SleepHours);
    }
}
