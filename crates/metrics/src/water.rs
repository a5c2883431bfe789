/// Glasses of water logged today.
///
/// Values are immutable: `add_glass` / `remove_glass` return the next state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaterIntake {
    glasses:    u32,
    daily_goal: u32,
    max:        u32,
}

impl Default for WaterIntake {
    fn default() -> Self {
        Self::new(3, 8, 12)
    }
}

impl WaterIntake {
    /// `glasses` is clamped to `max`; a zero goal is treated as 1.
    pub fn new(glasses: u32, daily_goal: u32, max: u32) -> Self {
        Self {
            glasses: glasses.min(max),
            daily_goal: daily_goal.max(1),
            max,
        }
    }

    #[must_use]
    pub fn add_glass(self) -> Self {
        Self { glasses: self.glasses.saturating_add(1).min(self.max), ..self }
    }

    #[must_use]
    pub fn remove_glass(self) -> Self {
        Self { glasses: self.glasses.saturating_sub(1), ..self }
    }

    pub fn glasses(&self) -> u32 {
        self.glasses
    }

    pub fn daily_goal(&self) -> u32 {
        self.daily_goal
    }

    /// Share of the daily goal, in percent. Exceeds 100 past the goal.
    pub fn progress_percent(&self) -> f64 {
        f64::from(self.glasses) / f64::from(self.daily_goal) * 100.0
    }

    pub fn goal_reached(&self) -> bool {
        self.glasses >= self.daily_goal
    }
}
