//! Calendar activity model.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use crate::id::ActivityId;

/// A scheduled activity on the calendar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    /// Identifier, unique within a day
    pub id: ActivityId,

    /// Title
    pub title: String,

    /// Subtitle
    pub subtitle: String,

    /// Start time
    pub start_time: NaiveTime,

    /// End time
    pub end_time: NaiveTime,

    /// Where it happens
    pub location: String,

    /// Who leads it
    pub instructor: String,

    /// Activity kind
    pub kind: ActivityKind,

    /// Scheduled date
    pub date: NaiveDate,

    /// Duration in minutes, if tracked
    pub duration_minutes: Option<u32>,

    /// Calories, if tracked
    pub calories: Option<u32>,

    /// Whether it is done
    pub completed: bool,

    /// Completion percentage (0-100), workouts only
    pub progress: Option<f64>,

    /// Short detail labels, e.g. exercise names
    pub details: Vec<String>,
}

/// Activity kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    /// Training session
    Workout,
    /// Meal plan entry
    Diet,
    /// Anything else
    Other,
}

impl ActivityKind {
    /// Get string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityKind::Workout => "workout",
            ActivityKind::Diet => "diet",
            ActivityKind::Other => "other",
        }
    }
}

impl Activity {
    /// Time between start and end, in minutes.
    ///
    /// Falls back to the scheduled span when no duration was recorded.
    pub fn scheduled_minutes(&self) -> u32 {
        self.duration_minutes.unwrap_or_else(|| {
            let span = self.end_time.signed_duration_since(self.start_time);
            u32::try_from(span.num_minutes()).unwrap_or(0)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lunch() -> Activity {
        Activity {
            id: ActivityId::new(2),
            title: "Meal Plan".to_string(),
            subtitle: "Lunch - High Protein".to_string(),
            start_time: NaiveTime::from_hms_opt(12, 30, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(13, 0, 0).unwrap(),
            location: "Cafeteria".to_string(),
            instructor: "Nutritionist".to_string(),
            kind: ActivityKind::Diet,
            date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            duration_minutes: None,
            calories: Some(650),
            completed: true,
            progress: None,
            details: vec![],
        }
    }

    #[test]
    fn test_scheduled_minutes_from_span() {
        assert_eq!(lunch().scheduled_minutes(), 30);
    }

    #[test]
    fn test_scheduled_minutes_prefers_duration() {
        let mut activity = lunch();
        activity.duration_minutes = Some(45);
        assert_eq!(activity.scheduled_minutes(), 45);
    }

    #[test]
    fn test_inverted_span_is_zero() {
        let mut activity = lunch();
        activity.end_time = NaiveTime::from_hms_opt(12, 0, 0).unwrap();
        assert_eq!(activity.scheduled_minutes(), 0);
    }
}
