//! Daily progress across workout, diet and water.

use fittrack_core::{Checklist, Meal, TrackerConfig, Workout};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::aggregator::completion_percentage;
use crate::checklist::{checklist_completion, parent_completion};
use crate::error::{MetricsError, Result};

/// Percent complete for each area of the day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyProgress {
    /// Exercises done in today's workout
    pub workout_percent: f64,

    /// Meals fully eaten
    pub diet_percent: f64,

    /// Water drunk against the daily target
    pub water_percent: f64,
}

/// Compute the day's progress.
///
/// Water above the configured target is an error rather than a reading
/// over 100%.
pub fn daily_progress(
    workout: &Workout,
    meals: &[Meal],
    water_glasses: u32,
    config: &TrackerConfig,
) -> Result<DailyProgress> {
    if water_glasses > config.daily_water_target {
        return Err(MetricsError::invalid(format!(
            "water intake {water_glasses} exceeds daily target {}",
            config.daily_water_target
        )));
    }

    let progress = DailyProgress {
        workout_percent: checklist_completion(workout)?,
        diet_percent: parent_completion(meals)?,
        water_percent: completion_percentage(
            water_glasses as usize,
            config.daily_water_target as usize,
        )?,
    };

    debug!(
        workout = %workout.id,
        exercises_done = workout.completed_items(),
        ?progress,
        "Computed daily progress"
    );
    Ok(progress)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;
    use fittrack_core::{ChecklistItem, Exercise, MealId, WorkoutId};

    fn workout(done: usize) -> Workout {
        let names = ["Push-ups", "Squats", "Plank", "Lunges", "Pull-ups"];
        Workout {
            id: WorkoutId::new(1),
            title: "Morning Workout".to_string(),
            subtitle: "Cardio & Strength".to_string(),
            description: String::new(),
            duration_minutes: 60,
            calories: 320,
            exercises: names
                .iter()
                .enumerate()
                .map(|(i, name)| {
                    let mut exercise = Exercise::new(i as u32 + 1, *name, 3, 10);
                    exercise.item.completed = i < done;
                    exercise
                })
                .collect(),
        }
    }

    fn meals(done: usize) -> Vec<Meal> {
        (0..3)
            .map(|i| Meal {
                id: MealId::new(i + 1),
                name: format!("Meal {i}"),
                time: NaiveTime::from_hms_opt(8 + i * 5, 0, 0).unwrap(),
                calories: 500,
                protein: 30,
                carbs: 50,
                fat: 15,
                items: vec![ChecklistItem {
                    completed: (i as usize) < done,
                    ..ChecklistItem::new(1, "plate")
                }],
            })
            .collect()
    }

    #[test]
    fn test_daily_progress() {
        let progress =
            daily_progress(&workout(3), &meals(2), 5, &TrackerConfig::default()).unwrap();
        assert_eq!(progress.workout_percent, 60.0);
        assert!((progress.diet_percent - 200.0 / 3.0).abs() < 1e-9);
        assert_eq!(progress.water_percent, 62.5);
    }

    #[test]
    fn test_water_over_target_rejected() {
        let result = daily_progress(&workout(0), &meals(0), 9, &TrackerConfig::default());
        assert!(matches!(result, Err(MetricsError::InvalidInput(_))));
    }

    #[test]
    fn test_empty_workout_rejected() {
        let mut empty = workout(0);
        empty.exercises.clear();
        assert!(daily_progress(&empty, &meals(0), 0, &TrackerConfig::default()).is_err());
    }
}
