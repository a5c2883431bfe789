use chrono::{DateTime, Local};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;
use tokio::sync::mpsc;
use vitals_config::{SeriesConfig, VitalsConfig};
use vitals_core::{FeedSnapshot, MetricKind, Result, RollingMetricSeries};
use vitals_sim::{history, spawn_feed, MetricFeed, UniformGenerator};

/// Sleep quality is drawn as whole percent in `[60, 99]`.
const SLEEP_QUALITY_RANGE: (f64, f64) = (60.0, 99.0);

/// A feed ready to be driven, with its cadence.
#[derive(Debug)]
pub struct FeedSpec {
    pub feed:     MetricFeed,
    pub interval: Duration,
}

/// Build every simulated feed named by `config`, back-filled relative to `now`.
pub fn build_feeds(config: &VitalsConfig, now: DateTime<Local>) -> Result<Vec<FeedSpec>> {
    let hr = &config.heart_rate;
    let mut hr_rng = history_rng(hr);
    let hr_history = if hr.seed_history {
        history::heart_rate_history(&mut hr_rng, now)
    } else {
        Vec::new()
    };

    let sleep = &config.sleep;
    let mut sleep_rng = history_rng(sleep);
    let (hours_history, quality_history) = if sleep.seed_history {
        history::sleep_history(&mut sleep_rng, now)
    } else {
        (Vec::new(), Vec::new())
    };

    let quality_generator = generator(
        SLEEP_QUALITY_RANGE.0,
        SLEEP_QUALITY_RANGE.1,
        Some(0),
        sleep.seed.map(|s| s.wrapping_add(2)),
    )?;

    Ok(vec![
        FeedSpec {
            feed: MetricFeed::new(
                MetricKind::HeartRate,
                RollingMetricSeries::with_history(hr.capacity()?, hr_history)?,
                series_generator(hr)?,
            ),
            interval: Duration::from_millis(hr.interval_ms(&config.global)),
        },
        FeedSpec {
            feed: MetricFeed::new(
                MetricKind::SleepHours,
                RollingMetricSeries::with_history(sleep.capacity()?, hours_history)?,
                series_generator(sleep)?,
            ),
            interval: Duration::from_millis(sleep.interval_ms(&config.global)),
        },
        FeedSpec {
            feed: MetricFeed::new(
                MetricKind::SleepQuality,
                RollingMetricSeries::with_history(sleep.capacity()?, quality_history)?,
                quality_generator,
            ),
            interval: Duration::from_millis(sleep.interval_ms(&config.global)),
        },
    ])
}

fn series_generator(series: &SeriesConfig) -> Result<UniformGenerator> {
    generator(series.low, series.high, series.precision, series.seed)
}

fn generator(low: f64, high: f64, precision: Option<u32>, seed: Option<u64>) -> Result<UniformGenerator> {
    let generator = match seed {
        Some(seed) => UniformGenerator::seeded(low, high, seed)?,
        None => UniformGenerator::new(low, high)?,
    };
    Ok(match precision {
        Some(decimals) => generator.with_precision(decimals),
        None => generator,
    })
}

fn history_rng(series: &SeriesConfig) -> StdRng {
    match series.seed {
        Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(1)),
        None => StdRng::from_entropy(),
    }
}

/// Running feed tasks, merged into a single stream of snapshots.
///
/// Dropping the set stops every feed: the merged receiver goes away, the
/// forwarders exit, and each driver notices its own receiver is gone.
pub struct FeedSet {
    rx: mpsc::Receiver<FeedSnapshot>,
}

impl FeedSet {
    pub fn spawn(specs: Vec<FeedSpec>) -> Self {
        let (tx, rx) = mpsc::channel(16);

        for spec in specs {
            let mut feed_rx = spawn_feed(spec.feed, spec.interval);
            let tx = tx.clone();
            tokio::spawn(async move {
                while let Some(snapshot) = feed_rx.recv().await {
                    if tx.send(snapshot).await.is_err() {
                        break;
                    }
                }
            });
        }

        Self { rx }
    }

    /// Next snapshot from any feed; `None` once every feed has stopped.
    pub async fn recv(&mut self) -> Option<FeedSnapshot> {
        self.rx.recv().await
    }
}
