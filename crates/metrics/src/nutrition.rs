use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    pub name:     String,
    /// Free-form time of day, e.g. `"7:30 AM"`.
    pub time:     String,
    pub calories: u32,
    /// Grams.
    pub protein:  u32,
    /// Grams.
    pub carbs:    u32,
    /// Grams.
    pub fat:      u32,
}

impl Meal {
    pub fn new(name: &str, time: &str, calories: u32, protein: u32, carbs: u32, fat: u32) -> Self {
        Self {
            name: name.to_string(),
            time: time.to_string(),
            calories,
            protein,
            carbs,
            fat,
        }
    }
}

/// The sample day shown before anything is logged.
pub fn sample_day() -> Vec<Meal> {
    vec![
        Meal::new("Breakfast", "7:30 AM", 450, 25, 45, 15),
        Meal::new("Lunch", "12:30 PM", 650, 35, 60, 22),
        Meal::new("Snack", "3:30 PM", 150, 5, 15, 7),
    ]
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NutritionTotals {
    pub calories: u32,
    pub protein:  u32,
    pub carbs:    u32,
    pub fat:      u32,
}

impl NutritionTotals {
    pub fn of(meals: &[Meal]) -> Self {
        meals.iter().fold(Self::default(), |acc, m| Self {
            calories: acc.calories + m.calories,
            protein:  acc.protein + m.protein,
            carbs:    acc.carbs + m.carbs,
            fat:      acc.fat + m.fat,
        })
    }

    /// Each macro's share of total grams, in percent: `(protein, carbs, fat)`.
    pub fn macro_split(&self) -> (f64, f64, f64) {
        let grams = self.protein + self.carbs + self.fat;
        if grams == 0 {
            return (0.0, 0.0, 0.0);
        }
        let pct = |g: u32| f64::from(g) / f64::from(grams) * 100.0;
        (pct(self.protein), pct(self.carbs), pct(self.fat))
    }
}
