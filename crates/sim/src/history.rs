//! Synthetic back-fill so charts have something to draw before the first tick.

use chrono::{DateTime, Duration, Local, Timelike};
use rand::Rng;
use vitals_core::{round_to, Sample};

/// Hourly points in a heart-rate history.
pub const HEART_RATE_HOURS: i64 = 24;
/// Nights in a sleep history.
pub const SLEEP_NIGHTS: i64 = 7;

/// 24 hourly readings ending at the hour containing `now`, each
/// `70 ± 10` bpm as whole numbers (`[60, 79]`).
pub fn heart_rate_history<R: Rng>(rng: &mut R, now: DateTime<Local>) -> Vec<Sample> {
    let hour = top_of_hour(now);
    (0..HEART_RATE_HOURS)
        .map(|i| {
            let at = hour - Duration::hours(HEART_RATE_HOURS - 1 - i);
            let bpm = 70 + rng.gen_range(-10..10);
            Sample::new(at, f64::from(bpm))
        })
        .collect()
}

/// One week of nights ending with `today`.
///
/// Returns `(hours, quality)`: durations in `[5, 9]` hours rounded to one
/// decimal, and quality scores as whole percentages in `[60, 99]`. Both
/// series share timestamps.
pub fn sleep_history<R: Rng>(rng: &mut R, today: DateTime<Local>) -> (Vec<Sample>, Vec<Sample>) {
    let midnight = today
        .with_hour(0)
        .and_then(|t| t.with_minute(0))
        .and_then(|t| t.with_second(0))
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(today);

    (0..SLEEP_NIGHTS)
        .map(|i| {
            let at = midnight - Duration::days(SLEEP_NIGHTS - 1 - i);
            let hours = round_to(5.0 + rng.gen::<f64>() * 4.0, 1);
            let quality = rng.gen_range(60..100);
            (Sample::new(at, hours), Sample::new(at, f64::from(quality)))
        })
        .unzip()
}

fn top_of_hour(t: DateTime<Local>) -> DateTime<Local> {
    t.with_minute(0)
        .and_then(|t| t.with_second(0))
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(t)
}
