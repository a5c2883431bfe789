pub mod error;
pub mod event;
pub mod round;
pub mod series;
pub mod state;

pub use error::{Result, VitalsError};
pub use event::Message;
pub use round::{round_to, MAX_PRECISION};
pub use series::{DerivedStats, RollingMetricSeries, Sample};
pub use state::{AppState, FeedSnapshot, MetricKind};
