//! One-line text renderings of each dashboard card.

use vitals_core::FeedSnapshot;
use vitals_metrics::workout::{self, WEEKDAYS};
use vitals_metrics::{
    healthy_weight_range, HeartRateSummary, Meal, NutritionTotals, SleepSummary, UserProfile,
    WaterIntake, WorkoutPlan,
};

pub fn heart_rate(feed: &FeedSnapshot) -> Option<String> {
    let latest = feed.latest()?;
    let stats = feed.stats.as_ref()?;
    let summary = HeartRateSummary::new(latest.value, stats);
    let unit = feed.kind.unit();
    Some(format!(
        "{} {:.0} {unit} ({}) at {}, avg {:.0} {unit}, resting {:.0} {unit}, {} samples",
        feed.kind,
        summary.current,
        summary.zone,
        latest.label(feed.kind.label_format()),
        summary.average,
        summary.resting,
        stats.count,
    ))
}

pub fn sleep(hours: &FeedSnapshot, quality: &FeedSnapshot) -> Option<String> {
    let summary = SleepSummary::new(hours.stats.as_ref()?, quality.stats.as_ref()?);
    let nights: Vec<String> = hours
        .samples
        .iter()
        .map(|s| format!("{} {:.1}h", s.label(hours.kind.label_format()), s.value))
        .collect();
    Some(format!(
        "sleep avg {:.1}h, quality {:.0}% ({}){} [{}]",
        summary.average_hours,
        summary.average_quality,
        summary.grade,
        if summary.meets_recommendation() { "" } else { ", below 7-9h" },
        nights.join(", "),
    ))
}

pub fn water(intake: &WaterIntake) -> String {
    format!(
        "water {} of {} glasses ({:.0}% of daily goal)",
        intake.glasses(),
        intake.daily_goal(),
        intake.progress_percent(),
    )
}

pub fn profile(profile: &UserProfile) -> String {
    let bmi = match profile.bmi() {
        Ok(bmi) => format!("BMI {bmi} ({})", bmi.category()),
        Err(e) => format!("BMI unavailable: {e}"),
    };
    let range = healthy_weight_range(profile.height_cm)
        .map(|(lo, hi)| format!(", healthy {lo:.0}-{hi:.0} kg"))
        .unwrap_or_default();
    format!(
        "{} ({}), {:.0} cm, {:.1} kg, {bmi}{range}",
        profile.name, profile.age, profile.height_cm, profile.weight_kg,
    )
}

pub fn nutrition(meals: &[Meal]) -> String {
    let totals = NutritionTotals::of(meals);
    let (protein, carbs, fat) = totals.macro_split();
    format!(
        "nutrition {} kcal over {} meals, protein {}g ({protein:.0}%), carbs {}g ({carbs:.0}%), fat {}g ({fat:.0}%)",
        totals.calories,
        meals.len(),
        totals.protein,
        totals.carbs,
        totals.fat,
    )
}

pub fn workouts(plans: &[WorkoutPlan], day: u8) -> String {
    let today: Vec<String> = workout::workouts_for_day(plans, day)
        .iter()
        .map(|p| {
            let status = if p.completed { "done" } else { "planned" };
            format!("{} ({} exercises, {status})", p.name, p.exercises.len())
        })
        .collect();
    let today = if today.is_empty() {
        "rest day".to_string()
    } else {
        today.join(", ")
    };
    format!(
        "workouts {} of {} done ({:.0}%), {}: {today}",
        workout::completed_count(plans),
        plans.len(),
        workout::completion_percentage(plans),
        WEEKDAYS.get(usize::from(day)).copied().unwrap_or("?"),
    )
}
