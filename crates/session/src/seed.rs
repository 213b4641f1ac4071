//! Seed data every session starts from.

use chrono::{Duration, NaiveDate, NaiveTime};
use fittrack_core::{
    Activity, ActivityId, ActivityKind, ChecklistItem, DailyRecord, Exercise, Goal, Meal, MealId,
    TrackerConfig, UserProfile, Workout, WorkoutId,
};

use crate::{Result, SessionError};

/// Water already drunk when the diet plan opens.
pub const INITIAL_WATER_GLASSES: u32 = 3;

fn time(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or_default()
}

/// A week of tracked days ending at `today`, most recent first.
///
/// Water intake is capped at the configured daily target. Fails when the
/// week would start before the earliest representable date.
pub fn progress_records(today: NaiveDate, config: &TrackerConfig) -> Result<Vec<DailyRecord>> {
    // (weight, calories, workouts, minutes, steps, water)
    const WEEK: [(f64, u32, u32, u32, u32, u32); 7] = [
        (75.5, 1850, 1, 45, 8500, 6),
        (76.2, 2050, 1, 30, 7200, 5),
        (76.2, 1920, 1, 60, 9100, 8),
        (76.5, 2100, 0, 0, 6800, 4),
        (76.7, 1980, 1, 55, 8900, 7),
        (77.0, 2200, 1, 45, 7500, 6),
        (77.2, 2150, 0, 0, 5200, 5),
    ];

    WEEK.iter()
        .zip(0i64..)
        .map(|(&(weight_kg, calories, workouts, minutes, steps, water), days_ago)| {
            let date = today
                .checked_sub_signed(Duration::days(days_ago))
                .ok_or(SessionError::DateOutOfRange(today))?;
            Ok(DailyRecord {
                date,
                weight_kg,
                calories_consumed: calories,
                workouts_completed: workouts,
                workout_minutes: minutes,
                steps_count: steps,
                water_glasses: water.min(config.daily_water_target),
            })
        })
        .collect()
}

fn meal(
    id: u32,
    name: &str,
    at: NaiveTime,
    (calories, protein, carbs, fat): (u32, u32, u32, u32),
    items: &[&str],
) -> Meal {
    Meal {
        id: MealId::new(id),
        name: name.to_string(),
        time: at,
        calories,
        protein,
        carbs,
        fat,
        items: items
            .iter()
            .zip(1u32..)
            .map(|(label, item_id)| ChecklistItem::new(item_id, *label))
            .collect(),
    }
}

/// The day's meal plan, nothing eaten yet.
pub fn meals() -> Vec<Meal> {
    vec![
        meal(
            1,
            "Breakfast",
            time(8, 0),
            (450, 25, 45, 15),
            &["Oatmeal with berries", "Greek yogurt", "Protein shake"],
        ),
        meal(
            2,
            "Lunch",
            time(13, 0),
            (650, 40, 60, 20),
            &["Grilled chicken breast", "Quinoa", "Mixed vegetables", "Avocado"],
        ),
        meal(
            3,
            "Dinner",
            time(19, 0),
            (550, 35, 40, 18),
            &["Salmon fillet", "Brown rice", "Steamed broccoli"],
        ),
    ]
}

/// Workouts available for detail sessions.
pub fn workouts() -> Vec<Workout> {
    vec![
        Workout {
            id: WorkoutId::new(1),
            title: "Core & Cardio".to_string(),
            subtitle: "Full body circuit".to_string(),
            description: "Complete workout focused on core strength and cardio.".to_string(),
            duration_minutes: 45,
            calories: 350,
            exercises: vec![
                Exercise::new(1, "Push-ups", 3, 15),
                Exercise::new(2, "Squats", 4, 12),
                Exercise::new(3, "Plank", 3, 60).timed(),
                Exercise::new(4, "Jumping Jacks", 3, 20),
            ],
        },
        Workout {
            id: WorkoutId::new(3),
            title: "HIIT".to_string(),
            subtitle: "Interval training".to_string(),
            description: "High intensity interval training for maximum fat burn.".to_string(),
            duration_minutes: 30,
            calories: 420,
            exercises: vec![
                Exercise::new(1, "Burpees", 3, 10).timed(),
                Exercise::new(2, "Mountain Climbers", 3, 30),
                Exercise::new(3, "Kettlebell Swings", 3, 15).timed(),
                Exercise::new(4, "Box Jumps", 4, 12),
            ],
        },
    ]
}

/// Look up a seeded workout.
pub fn workout(id: WorkoutId) -> Option<Workout> {
    workouts().into_iter().find(|workout| workout.id == id)
}

/// Today's routine as shown on the daily progress panel, partly done.
pub fn todays_workout() -> Workout {
    let mut exercises = vec![
        Exercise::new(1, "Push-ups", 3, 15),
        Exercise::new(2, "Squats", 4, 12),
        Exercise::new(3, "Plank", 3, 60).timed(),
        Exercise::new(4, "Lunges", 3, 10),
        Exercise::new(5, "Pull-ups", 3, 8),
    ];
    for exercise in exercises.iter_mut().take(3) {
        exercise.item.completed = true;
    }

    Workout {
        id: WorkoutId::new(2),
        title: "Daily Routine".to_string(),
        subtitle: "Strength".to_string(),
        description: String::new(),
        duration_minutes: 60,
        calories: 320,
        exercises,
    }
}

fn details(labels: &[&str]) -> Vec<String> {
    labels.iter().map(|label| label.to_string()).collect()
}

/// The calendar activities scheduled on `date`.
pub fn activities_for(date: NaiveDate) -> Vec<Activity> {
    vec![
        Activity {
            id: ActivityId::new(1),
            title: "Morning Workout".to_string(),
            subtitle: "Cardio & Strength".to_string(),
            start_time: time(7, 0),
            end_time: time(8, 0),
            location: "Gym".to_string(),
            instructor: "Alex Johnson".to_string(),
            kind: ActivityKind::Workout,
            date,
            duration_minutes: Some(60),
            calories: Some(320),
            completed: true,
            progress: Some(100.0),
            details: details(&["Push-ups", "Squats", "Planks"]),
        },
        Activity {
            id: ActivityId::new(2),
            title: "Meal Plan".to_string(),
            subtitle: "Lunch - High Protein".to_string(),
            start_time: time(12, 30),
            end_time: time(13, 0),
            location: "Cafeteria".to_string(),
            instructor: "Nutritionist".to_string(),
            kind: ActivityKind::Diet,
            date,
            duration_minutes: None,
            calories: Some(650),
            completed: true,
            progress: None,
            details: Vec::new(),
        },
        Activity {
            id: ActivityId::new(3),
            title: "Evening Run".to_string(),
            subtitle: "5K Training".to_string(),
            start_time: time(18, 0),
            end_time: time(18, 45),
            location: "Park".to_string(),
            instructor: "Running Coach".to_string(),
            kind: ActivityKind::Workout,
            date,
            duration_minutes: Some(45),
            calories: Some(420),
            completed: false,
            progress: Some(0.0),
            details: details(&["Warm-up", "Distance Run", "Cool-down"]),
        },
        Activity {
            id: ActivityId::new(4),
            title: "Strength Training".to_string(),
            subtitle: "Core & Upper Body".to_string(),
            start_time: time(19, 30),
            end_time: time(20, 30),
            location: "Home".to_string(),
            instructor: "Self-guided".to_string(),
            kind: ActivityKind::Workout,
            date,
            duration_minutes: Some(60),
            calories: Some(280),
            completed: false,
            progress: Some(0.0),
            details: details(&["Sit-ups", "Push-ups", "Pull-ups", "Crunches"]),
        },
    ]
}

/// The session user.
pub fn profile() -> UserProfile {
    UserProfile {
        name: "Alex Johnson".to_string(),
        email: "alex.johnson@example.com".to_string(),
        member_since: "January 2023".to_string(),
        height_cm: 175.0,
        weight_kg: 75.5,
        goals: Goal::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fittrack_core::Checklist;

    #[test]
    fn test_records_are_most_recent_first() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 14).unwrap();
        let records = progress_records(today, &TrackerConfig::default()).unwrap();
        assert_eq!(records.len(), 7);
        assert_eq!(records[0].date, today);
        assert_eq!(records[6].date, NaiveDate::from_ymd_opt(2024, 3, 8).unwrap());
        assert!(records.windows(2).all(|pair| pair[0].date > pair[1].date));
    }

    #[test]
    fn test_records_respect_water_target() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 14).unwrap();
        let config = TrackerConfig {
            daily_water_target: 4,
            ..TrackerConfig::default()
        };
        let records = progress_records(today, &config).unwrap();
        assert!(records.iter().all(|record| record.validate(&config).is_ok()));
        assert_eq!(records.iter().map(|record| record.water_glasses).sum::<u32>(), 28);

        let defaults = progress_records(today, &TrackerConfig::default()).unwrap();
        assert_eq!(defaults[0].water_glasses, 6);
    }

    #[test]
    fn test_records_near_earliest_date() {
        let config = TrackerConfig::default();
        assert!(matches!(
            progress_records(NaiveDate::MIN, &config),
            Err(SessionError::DateOutOfRange(_))
        ));

        let earliest_full_week = NaiveDate::MIN + Duration::days(6);
        let records = progress_records(earliest_full_week, &config).unwrap();
        assert_eq!(records[6].date, NaiveDate::MIN);
    }

    #[test]
    fn test_seed_ids_unique_within_parent() {
        for meal in meals() {
            let mut ids: Vec<_> = meal.items.iter().map(|item| item.id).collect();
            ids.dedup();
            assert_eq!(ids.len(), meal.items.len());
        }
        assert!(meals().iter().all(|meal| !meal.is_completed()));
    }

    #[test]
    fn test_workout_lookup() {
        assert_eq!(workout(WorkoutId::new(3)).unwrap().title, "HIIT");
        assert!(workout(WorkoutId::new(2)).is_none());
        assert_eq!(todays_workout().completed_items(), 3);
    }

    #[test]
    fn test_activities_carry_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 14).unwrap();
        let activities = activities_for(date);
        assert_eq!(activities.len(), 4);
        assert!(activities.iter().all(|activity| activity.date == date));
    }
}
