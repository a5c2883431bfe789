//! Small formulas behind the dashboard cards: BMI, heart-rate zones, sleep
//! grading, water, nutrition, and the weekly workout plan.

pub mod bmi;
pub mod heart_rate;
pub mod nutrition;
pub mod profile;
pub mod sleep;
pub mod water;
pub mod workout;

pub use bmi::{healthy_weight_range, Bmi, BmiCategory};
pub use heart_rate::{HeartRateSummary, HeartRateZone};
pub use nutrition::{Meal, NutritionTotals};
pub use profile::UserProfile;
pub use sleep::{SleepQuality, SleepSummary};
pub use water::WaterIntake;
pub use workout::{Exercise, WorkoutPlan};
