//! Daily record model - one day's tracked metrics snapshot.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use crate::config::TrackerConfig;

/// Metrics tracked for a single calendar date.
///
/// Records are immutable once created; sequences of records are ordered
/// most-recent-first by convention.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyRecord {
    /// Calendar date, unique within a sequence
    pub date: NaiveDate,

    /// Body weight in kilograms
    pub weight_kg: f64,

    /// Calories consumed
    pub calories_consumed: u32,

    /// Workouts completed
    pub workouts_completed: u32,

    /// Minutes spent working out
    pub workout_minutes: u32,

    /// Step count
    pub steps_count: u32,

    /// Glasses of water drunk
    pub water_glasses: u32,
}

impl DailyRecord {
    /// Create a record for `date` with the given weight and zeroed counters.
    pub fn new(date: NaiveDate, weight_kg: f64) -> Self {
        Self {
            date,
            weight_kg,
            calories_consumed: 0,
            workouts_completed: 0,
            workout_minutes: 0,
            steps_count: 0,
            water_glasses: 0,
        }
    }

    /// Check the record against the tracking configuration.
    pub fn validate(&self, config: &TrackerConfig) -> Result<(), RecordError> {
        if !(self.weight_kg.is_finite() && self.weight_kg > 0.0) {
            return Err(RecordError::InvalidWeight {
                date: self.date,
                weight_kg: self.weight_kg,
            });
        }
        if self.water_glasses > config.daily_water_target {
            return Err(RecordError::WaterOverTarget {
                date: self.date,
                glasses: self.water_glasses,
                target: config.daily_water_target,
            });
        }
        Ok(())
    }

    /// Raw value of the given metric for this day.
    pub fn metric(&self, kind: MetricKind) -> u64 {
        let value = match kind {
            MetricKind::Steps => self.steps_count,
            MetricKind::WorkoutMinutes => self.workout_minutes,
            MetricKind::Calories => self.calories_consumed,
            MetricKind::Water => self.water_glasses,
        };
        u64::from(value)
    }
}

/// A record that breaks a tracking bound.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RecordError {
    /// Weight was not a positive finite number
    #[error("weight on {date} must be positive, got {weight_kg}")]
    InvalidWeight {
        /// Day of the record
        date: NaiveDate,
        /// Rejected weight
        weight_kg: f64,
    },

    /// More water logged than the daily target allows
    #[error("{glasses} glasses of water on {date} exceed the daily target of {target}")]
    WaterOverTarget {
        /// Day of the record
        date: NaiveDate,
        /// Logged glasses
        glasses: u32,
        /// Configured target
        target: u32,
    },
}

/// Day-comparable metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    /// Step count
    Steps,
    /// Workout minutes
    WorkoutMinutes,
    /// Calories consumed
    Calories,
    /// Water glasses
    Water,
}

impl MetricKind {
    /// All metric kinds, in dashboard order.
    pub const ALL: [MetricKind; 4] = [
        MetricKind::Steps,
        MetricKind::WorkoutMinutes,
        MetricKind::Calories,
        MetricKind::Water,
    ];

    /// Get string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricKind::Steps => "steps",
            MetricKind::WorkoutMinutes => "workout_minutes",
            MetricKind::Calories => "calories",
            MetricKind::Water => "water",
        }
    }

    /// Display unit.
    pub fn unit(&self) -> &'static str {
        match self {
            MetricKind::Steps => "steps",
            MetricKind::WorkoutMinutes => "min",
            MetricKind::Calories => "kcal",
            MetricKind::Water => "glasses",
        }
    }
}

impl std::fmt::Display for MetricKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
