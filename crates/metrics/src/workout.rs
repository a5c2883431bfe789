use chrono::{Datelike, Weekday};
use serde::{Deserialize, Serialize};

pub const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    pub name:      String,
    pub sets:      u32,
    pub reps:      u32,
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutPlan {
    pub name:      String,
    /// 0 = Monday … 6 = Sunday.
    pub day:       u8,
    pub completed: bool,
    pub exercises: Vec<Exercise>,
}

impl WorkoutPlan {
    fn new(name: &str, day: u8, completed: bool, exercises: &[(&str, u32, u32)]) -> Self {
        Self {
            name: name.to_string(),
            day,
            completed,
            exercises: exercises
                .iter()
                .map(|(name, sets, reps)| Exercise {
                    name: name.to_string(),
                    sets: *sets,
                    reps: *reps,
                    completed,
                })
                .collect(),
        }
    }
}

/// Monday-based index of a chrono weekday.
pub fn day_index(weekday: Weekday) -> u8 {
    weekday.num_days_from_monday() as u8
}

/// Index of today's weekday.
pub fn today_index() -> u8 {
    day_index(chrono::Local::now().weekday())
}

/// The sample training week. Sessions on days before `today` count as done;
/// Monday's session is always done. Sunday starts the next week, so only
/// Monday counts there.
pub fn sample_week(today: u8) -> Vec<WorkoutPlan> {
    let done = |day: u8| today < 6 && today > day;
    vec![
        WorkoutPlan::new("Upper Body", 0, true, &[
            ("Push-ups", 3, 12),
            ("Pull-ups", 3, 8),
            ("Shoulder Press", 3, 10),
        ]),
        WorkoutPlan::new("Lower Body", 2, done(2), &[
            ("Squats", 3, 15),
            ("Lunges", 3, 12),
            ("Deadlifts", 3, 8),
        ]),
        WorkoutPlan::new("Core Workout", 4, done(4), &[
            ("Planks", 3, 30),
            ("Russian Twists", 3, 20),
            ("Leg Raises", 3, 15),
        ]),
        WorkoutPlan::new("Cardio", 5, done(5), &[
            ("Running", 1, 30),
            ("Jump Rope", 3, 100),
            ("Burpees", 3, 15),
        ]),
    ]
}

pub fn workouts_for_day(plans: &[WorkoutPlan], day: u8) -> Vec<&WorkoutPlan> {
    plans.iter().filter(|p| p.day == day).collect()
}

pub fn completed_count(plans: &[WorkoutPlan]) -> usize {
    plans.iter().filter(|p| p.completed).count()
}

/// Completed sessions as a percentage of planned ones (0 for an empty week).
pub fn completion_percentage(plans: &[WorkoutPlan]) -> f64 {
    if plans.is_empty() {
        return 0.0;
    }
    completed_count(plans) as f64 / plans.len() as f64 * 100.0
}
