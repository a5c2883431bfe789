use serde::{Deserialize, Deserializer, Serialize};
use vitals_core::{Result, VitalsError, MAX_PRECISION};

/// Root configuration structure parsed from `vitals.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VitalsConfig {
    /// Settings shared by every feed.
    pub global: GlobalConfig,
    /// Simulated heart-rate feed.
    #[serde(deserialize_with = "heart_rate_section")]
    pub heart_rate: SeriesConfig,
    /// Simulated nightly sleep feed.
    #[serde(deserialize_with = "sleep_section")]
    pub sleep: SeriesConfig,
    /// Water-intake counter.
    pub water: WaterConfig,
    /// Profile shown alongside the feeds.
    pub profile: ProfileConfig,
}

impl Default for VitalsConfig {
    fn default() -> Self {
        Self {
            global:     GlobalConfig::default(),
            heart_rate: SeriesConfig::heart_rate(),
            sleep:      SeriesConfig::sleep(),
            water:      WaterConfig::default(),
            profile:    ProfileConfig::default(),
        }
    }
}

impl VitalsConfig {
    /// Check every section, reporting the first problem found.
    pub fn validate(&self) -> Result<()> {
        if self.global.tick_interval_ms == 0 {
            return Err(VitalsError::InvalidConfiguration(
                "global.tick_interval_ms must be positive".into(),
            ));
        }
        self.heart_rate.validate("heart_rate")?;
        self.sleep.validate("sleep")?;
        self.water.validate()
    }
}

/// Global settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalConfig {
    /// Default cadence of every feed, in milliseconds.
    pub tick_interval_ms: u64,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self { tick_interval_ms: 3_000 }
    }
}

/// Config block for one simulated rolling series.
///
/// Each feed has its own defaults, so a partial section in the file is
/// parsed as [`SeriesOverrides`] and layered over the feed's defaults.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesConfig {
    /// Maximum retained samples. Signed so that a negative value in the file
    /// is reported rather than failing to parse.
    pub capacity: i64,
    /// Lower bound of the generator's closed interval.
    pub low: f64,
    /// Upper bound of the generator's closed interval.
    pub high: f64,
    /// Decimal places kept on generated values (`None` = full precision).
    pub precision: Option<u32>,
    /// Pre-fill the series with a synthetic history on startup.
    pub seed_history: bool,
    /// Per-feed cadence override in milliseconds.
    pub interval_ms: Option<u64>,
    /// Fixed RNG seed for reproducible runs.
    pub seed: Option<u64>,
}

impl SeriesConfig {
    /// 24 points of bpm drawn from `[65, 85]`.
    pub fn heart_rate() -> Self {
        Self {
            capacity:     24,
            low:          65.0,
            high:         85.0,
            precision:    Some(0),
            seed_history: true,
            interval_ms:  None,
            seed:         None,
        }
    }

    /// One week of nightly durations drawn from `[5, 9]` hours, one night
    /// every 10 s.
    pub fn sleep() -> Self {
        Self {
            capacity:     7,
            low:          5.0,
            high:         9.0,
            precision:    Some(1),
            seed_history: true,
            interval_ms:  Some(10_000),
            seed:         None,
        }
    }

    /// Capacity as a buffer length, rejecting zero and negative values.
    pub fn capacity(&self) -> Result<usize> {
        usize::try_from(self.capacity)
            .ok()
            .filter(|c| *c >= 1)
            .ok_or_else(|| {
                VitalsError::InvalidConfiguration(format!(
                    "capacity must be at least 1, got {}",
                    self.capacity
                ))
            })
    }

    /// Effective cadence: the per-feed override or the global default.
    pub fn interval_ms(&self, global: &GlobalConfig) -> u64 {
        self.interval_ms.unwrap_or(global.tick_interval_ms)
    }

    fn validate(&self, section: &str) -> Result<()> {
        self.capacity()
            .map_err(|e| VitalsError::InvalidConfiguration(format!("{section}: {e}")))?;

        if !self.low.is_finite()
            || !self.high.is_finite()
            || self.low > self.high
            || !(self.high - self.low).is_finite()
        {
            return Err(VitalsError::InvalidConfiguration(format!(
                "{section}: range [{}, {}] is not a valid closed interval",
                self.low, self.high
            )));
        }
        if let Some(precision) = self.precision.filter(|p| *p > MAX_PRECISION) {
            return Err(VitalsError::InvalidConfiguration(format!(
                "{section}: precision {precision} exceeds {MAX_PRECISION} decimal places"
            )));
        }
        if self.interval_ms == Some(0) {
            return Err(VitalsError::InvalidConfiguration(format!(
                "{section}: interval_ms must be positive"
            )));
        }
        Ok(())
    }
}

/// Fields a `[heart_rate]` / `[sleep]` section may set; anything absent keeps
/// the feed default.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeriesOverrides {
    pub capacity:     Option<i64>,
    pub low:          Option<f64>,
    pub high:         Option<f64>,
    pub precision:    Option<u32>,
    pub seed_history: Option<bool>,
    pub interval_ms:  Option<u64>,
    pub seed:         Option<u64>,
}

impl SeriesOverrides {
    pub fn apply(self, base: SeriesConfig) -> SeriesConfig {
        SeriesConfig {
            capacity:     self.capacity.unwrap_or(base.capacity),
            low:          self.low.unwrap_or(base.low),
            high:         self.high.unwrap_or(base.high),
            precision:    self.precision.or(base.precision),
            seed_history: self.seed_history.unwrap_or(base.seed_history),
            interval_ms:  self.interval_ms.or(base.interval_ms),
            seed:         self.seed.or(base.seed),
        }
    }
}

fn heart_rate_section<'de, D: Deserializer<'de>>(d: D) -> std::result::Result<SeriesConfig, D::Error> {
    SeriesOverrides::deserialize(d).map(|o| o.apply(SeriesConfig::heart_rate()))
}

fn sleep_section<'de, D: Deserializer<'de>>(d: D) -> std::result::Result<SeriesConfig, D::Error> {
    SeriesOverrides::deserialize(d).map(|o| o.apply(SeriesConfig::sleep()))
}

/// Water-intake counter settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaterConfig {
    pub initial_glasses: u32,
    pub daily_goal:      u32,
    pub max_glasses:     u32,
}

impl Default for WaterConfig {
    fn default() -> Self {
        Self {
            initial_glasses: 3,
            daily_goal:      8,
            max_glasses:     12,
        }
    }
}

impl WaterConfig {
    fn validate(&self) -> Result<()> {
        if self.daily_goal == 0 {
            return Err(VitalsError::InvalidConfiguration(
                "water.daily_goal must be positive".into(),
            ));
        }
        if self.initial_glasses > self.max_glasses {
            return Err(VitalsError::InvalidConfiguration(format!(
                "water.initial_glasses ({}) exceeds water.max_glasses ({})",
                self.initial_glasses, self.max_glasses
            )));
        }
        Ok(())
    }
}

/// Profile record shown next to the feeds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileConfig {
    pub name:         String,
    pub email:        String,
    pub member_since: String,
    pub height_cm:    f64,
    pub weight_kg:    f64,
    pub age:          u32,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            name:         "Demo User".to_string(),
            email:        "demo@example.com".to_string(),
            member_since: "January 2023".to_string(),
            height_cm:    175.0,
            weight_kg:    68.2,
            age:          32,
        }
    }
}
