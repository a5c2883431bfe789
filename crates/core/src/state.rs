use crate::event::Message;
use crate::series::{DerivedStats, Sample};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// The simulated feeds the dashboard knows how to drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    HeartRate,
    SleepHours,
    SleepQuality,
}

impl MetricKind {
    /// Unit suffix used when printing values.
    pub fn unit(self) -> &'static str {
        match self {
            Self::HeartRate    => "bpm",
            Self::SleepHours   => "h",
            Self::SleepQuality => "%",
        }
    }

    /// `strftime` pattern for chart labels: clock time for intraday feeds,
    /// weekday for nightly ones.
    pub fn label_format(self) -> &'static str {
        match self {
            Self::HeartRate => "%H:%M",
            Self::SleepHours | Self::SleepQuality => "%a",
        }
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::HeartRate    => "heart rate",
            Self::SleepHours   => "sleep duration",
            Self::SleepQuality => "sleep quality",
        })
    }
}

/// Immutable copy of a feed taken right after a tick.
///
/// This is what crosses task boundaries; the series itself never leaves the
/// task that appends to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedSnapshot {
    pub kind:    MetricKind,
    /// Samples oldest-first.
    pub samples: Vec<Sample>,
    /// `None` only when the series is still empty.
    pub stats:   Option<DerivedStats>,
}

impl FeedSnapshot {
    pub fn latest(&self) -> Option<&Sample> {
        self.samples.last()
    }
}

/// Central application state; every view reads from this value.
///
/// Updates never mutate in place: [`AppState::apply`] consumes the current
/// version and returns the next one.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Latest snapshot per feed.
    pub feeds: BTreeMap<MetricKind, FeedSnapshot>,
    /// Number of feed updates applied so far.
    pub updates: u64,
    /// Time of the most recent update.
    pub time: DateTime<Local>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            feeds:   BTreeMap::new(),
            updates: 0,
            time:    Local::now(),
        }
    }
}

impl AppState {
    /// Fold one message into the state. Messages that don't concern feeds
    /// return the state unchanged.
    #[must_use]
    pub fn apply(mut self, message: &Message) -> Self {
        if let Message::FeedUpdated(snapshot) = message {
            if let Some(latest) = snapshot.latest() {
                self.time = latest.timestamp;
            }
            self.feeds.insert(snapshot.kind, snapshot.clone());
            self.updates += 1;
        }
        self
    }

    pub fn feed(&self, kind: MetricKind) -> Option<&FeedSnapshot> {
        self.feeds.get(&kind)
    }
}
