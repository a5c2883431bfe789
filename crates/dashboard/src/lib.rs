//! Headless health dashboard.
//!
//! Owns the event loop and wires together all background tasks:
//! - Simulated feeds (heart rate every tick, nightly sleep duration/quality)
//! - Config file watcher (live reload on change)
//! - Stdin commands (water intake, workout day, quit)
//! - Ctrl-C (graceful shutdown)

pub mod feeds;
pub mod input;
pub mod report;

use chrono::Local;
use std::path::PathBuf;
use tracing::{info, warn};
use vitals_config::{load as load_config, ConfigWatcher, VitalsConfig};
use vitals_core::{AppState, Message, MetricKind, Result};
use vitals_metrics::{nutrition, workout, Meal, UserProfile, WaterIntake, WorkoutPlan};

pub use feeds::{build_feeds, FeedSet, FeedSpec};

// ── Entry point ───────────────────────────────────────────────────────────────

/// Run the dashboard until Ctrl-C, `quit`, or every feed stops.
pub async fn run(config_path: PathBuf) -> Result<()> {
    let config = load_config(&config_path)?;
    let mut feeds = FeedSet::spawn(build_feeds(&config, Local::now())?);
    let mut dashboard = Dashboard::new(config);

    let (_watcher, mut reloads) = ConfigWatcher::spawn(&config_path);
    let mut commands = input::spawn_input();

    for line in dashboard.static_report() {
        info!("{line}");
    }

    loop {
        let message = tokio::select! {
            snapshot = feeds.recv() => match snapshot {
                Some(snapshot) => Message::FeedUpdated(snapshot),
                None => {
                    warn!("All feeds stopped");
                    Message::Shutdown
                }
            },
            Some(()) = reloads.recv() => Message::ConfigReloaded,
            Some(command) = commands.recv() => command,
            _ = tokio::signal::ctrl_c() => Message::Shutdown,
        };

        match message {
            Message::Shutdown => break,
            Message::ConfigReloaded => match load_config(&config_path) {
                Ok(config) => match build_feeds(&config, Local::now()) {
                    Ok(specs) => {
                        info!("Config reloaded from {}", config_path.display());
                        feeds = FeedSet::spawn(specs);
                        dashboard = dashboard.reconfigure(config);
                    }
                    Err(e) => warn!("Reloaded config rejected: {e}"),
                },
                Err(e) => warn!("Config reload failed: {e}"),
            },
            other => {
                dashboard = dashboard.update(&other);
                if let Some(line) = dashboard.report_for(&other) {
                    info!("{line}");
                }
            }
        }
    }

    info!("Shutting down after {} feed updates", dashboard.state().updates);
    Ok(())
}

// ── State ─────────────────────────────────────────────────────────────────────

/// Everything the dashboard shows. Updates consume the current value and
/// return the next one.
#[derive(Debug, Clone)]
pub struct Dashboard {
    state:        AppState,
    config:       VitalsConfig,
    profile:      UserProfile,
    water:        WaterIntake,
    meals:        Vec<Meal>,
    workouts:     Vec<WorkoutPlan>,
    selected_day: u8,
}

impl Dashboard {
    pub fn new(config: VitalsConfig) -> Self {
        let today = workout::today_index();
        Self {
            state:        AppState::default(),
            profile:      profile_from(&config),
            water:        water_from(&config),
            meals:        nutrition::sample_day(),
            workouts:     workout::sample_week(today),
            selected_day: today,
            config,
        }
    }

    #[must_use]
    pub fn update(mut self, message: &Message) -> Self {
        match message {
            Message::WaterGlassAdded   => self.water = self.water.add_glass(),
            Message::WaterGlassRemoved => self.water = self.water.remove_glass(),
            Message::WorkoutDaySelected(day) if *day < 7 => self.selected_day = *day,
            _ => {}
        }
        self.state = self.state.apply(message);
        self
    }

    /// Adopt a reloaded config. Feed history restarts with the new feeds;
    /// water intake carries over, re-clamped to the new limits.
    #[must_use]
    pub fn reconfigure(self, config: VitalsConfig) -> Self {
        let water = WaterIntake::new(
            self.water.glasses(),
            config.water.daily_goal,
            config.water.max_glasses,
        );
        Self {
            state: AppState::default(),
            profile: profile_from(&config),
            water,
            config,
            ..self
        }
    }

    /// Line describing what `message` changed, if anything visible.
    pub fn report_for(&self, message: &Message) -> Option<String> {
        match message {
            Message::FeedUpdated(snapshot) => match snapshot.kind {
                MetricKind::HeartRate => report::heart_rate(snapshot),
                MetricKind::SleepHours | MetricKind::SleepQuality => report::sleep(
                    self.state.feed(MetricKind::SleepHours)?,
                    self.state.feed(MetricKind::SleepQuality)?,
                ),
            },
            Message::WaterGlassAdded | Message::WaterGlassRemoved => {
                Some(report::water(&self.water))
            }
            Message::WorkoutDaySelected(_) => {
                Some(report::workouts(&self.workouts, self.selected_day))
            }
            Message::ConfigReloaded | Message::Shutdown => None,
        }
    }

    /// Cards that don't change with feed ticks.
    pub fn static_report(&self) -> Vec<String> {
        vec![
            report::profile(&self.profile),
            report::water(&self.water),
            report::nutrition(&self.meals),
            report::workouts(&self.workouts, self.selected_day),
        ]
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn config(&self) -> &VitalsConfig {
        &self.config
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    pub fn water(&self) -> WaterIntake {
        self.water
    }

    pub fn selected_day(&self) -> u8 {
        self.selected_day
    }
}

fn profile_from(config: &VitalsConfig) -> UserProfile {
    let p = &config.profile;
    UserProfile {
        name:         p.name.clone(),
        email:        p.email.clone(),
        member_since: p.member_since.clone(),
        height_cm:    p.height_cm,
        weight_kg:    p.weight_kg,
        age:          p.age,
    }
}

fn water_from(config: &VitalsConfig) -> WaterIntake {
    let w = &config.water;
    WaterIntake::new(w.initial_glasses, w.daily_goal, w.max_glasses)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use vitals_core::{FeedSnapshot, RollingMetricSeries, Sample};

    fn snapshot(kind: MetricKind, values: &[f64]) -> FeedSnapshot {
        let t = Local.with_ymd_and_hms(2024, 7, 3, 8, 0, 0).unwrap();
        let series =
            RollingMetricSeries::with_history(7, values.iter().map(|v| Sample::new(t, *v))).unwrap();
        FeedSnapshot { kind, samples: series.snapshot(), stats: series.stats().ok() }
    }

    #[test]
    fn water_messages_update_counter() {
        let dashboard = Dashboard::new(VitalsConfig::default())
            .update(&Message::WaterGlassAdded)
            .update(&Message::WaterGlassAdded)
            .update(&Message::WaterGlassRemoved);
        assert_eq!(dashboard.water().glasses(), 4);
        assert_eq!(
            dashboard.report_for(&Message::WaterGlassRemoved).unwrap(),
            "water 4 of 8 glasses (50% of daily goal)"
        );
    }

    #[test]
    fn day_selection_ignores_out_of_range() {
        let dashboard = Dashboard::new(VitalsConfig::default())
            .update(&Message::WorkoutDaySelected(4))
            .update(&Message::WorkoutDaySelected(9));
        assert_eq!(dashboard.selected_day(), 4);
        assert!(dashboard
            .report_for(&Message::WorkoutDaySelected(4))
            .unwrap()
            .contains("Fri: Core Workout"));
    }

    #[test]
    fn sleep_report_waits_for_both_feeds() {
        let hours = Message::FeedUpdated(snapshot(MetricKind::SleepHours, &[7.0, 8.0]));
        let dashboard = Dashboard::new(VitalsConfig::default()).update(&hours);
        assert!(dashboard.report_for(&hours).is_none());

        let quality = Message::FeedUpdated(snapshot(MetricKind::SleepQuality, &[85.0, 95.0]));
        let dashboard = dashboard.update(&quality);
        let line = dashboard.report_for(&quality).unwrap();
        assert!(line.starts_with("sleep avg 7.5h, quality 90% (Excellent) ["), "{line}");
        assert_eq!(dashboard.state().updates, 2);
    }

    #[test]
    fn heart_rate_report() {
        let msg = Message::FeedUpdated(snapshot(MetricKind::HeartRate, &[70.0, 72.0, 68.0]));
        let dashboard = Dashboard::new(VitalsConfig::default()).update(&msg);
        let line = dashboard.report_for(&msg).unwrap();
        assert!(line.starts_with("heart rate 68 bpm (Normal)"), "{line}");
    }

    #[test]
    fn reconfigure_keeps_water_and_resets_feeds() {
        let msg = Message::FeedUpdated(snapshot(MetricKind::HeartRate, &[70.0]));
        let dashboard = Dashboard::new(VitalsConfig::default())
            .update(&msg)
            .update(&Message::WaterGlassAdded);

        let mut config = VitalsConfig::default();
        config.water.max_glasses = 2;
        config.profile.weight_kg = 75.0;
        let dashboard = dashboard.reconfigure(config);

        assert_eq!(dashboard.water().glasses(), 2);
        assert!(dashboard.state().feeds.is_empty());
        assert_eq!(dashboard.profile().weight_kg, 75.0);
        assert_eq!(dashboard.config().water.max_glasses, 2);
    }

    #[test]
    fn static_report_covers_every_card() {
        let lines = Dashboard::new(VitalsConfig::default()).static_report();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("Demo User (32)"));
        assert!(lines[2].starts_with("nutrition 1250 kcal"));
    }
}
