//! Aggregate views over daily records.
//!
//! Record sequences are ordered most-recent-first: `records[0]` is the
//! newest day and the last element is the oldest day in the window.

use fittrack_core::{DailyRecord, MetricKind};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{MetricsError, Result};

/// Totals and averages over a window of records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Sum of workouts completed
    pub total_workouts: u64,

    /// Sum of workout minutes
    pub total_workout_minutes: u64,

    /// Sum of steps
    pub total_steps: u64,

    /// Sum of water glasses
    pub total_water: u64,

    /// Mean calories consumed per record
    pub avg_calories: f64,
}

/// Direction of weight change across a window.
///
/// `Down` means weight was lost, which is a positive `delta_kg`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightDirection {
    /// Weight decreased
    Down,
    /// Weight increased
    Up,
    /// No change
    Flat,
}

/// Weight change between the oldest and newest record of a window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightTrend {
    /// Oldest weight minus newest weight; positive means weight lost
    pub delta_kg: f64,

    /// Direction derived from the sign of `delta_kg`
    pub direction: WeightDirection,
}

/// Raw direction of a day-over-day change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Change {
    /// Today is greater
    Increased,
    /// Today is smaller
    Decreased,
    /// Equal
    Unchanged,
}

/// Today's value of a metric compared against yesterday's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayComparison {
    /// Compared metric
    pub metric: MetricKind,

    /// Today's raw value
    pub today_value: u64,

    /// Today minus yesterday
    pub delta: i64,

    /// Direction of `delta`
    pub direction: Change,
}

/// Sum the tracked counters and average calories over `records`.
pub fn weekly_summary(records: &[DailyRecord]) -> Result<Summary> {
    if records.is_empty() {
        return Err(MetricsError::invalid("cannot summarise an empty record sequence"));
    }

    let mut summary = Summary {
        total_workouts: 0,
        total_workout_minutes: 0,
        total_steps: 0,
        total_water: 0,
        avg_calories: 0.0,
    };
    let mut total_calories: u64 = 0;

    for record in records {
        summary.total_workouts += u64::from(record.workouts_completed);
        summary.total_workout_minutes += u64::from(record.workout_minutes);
        summary.total_steps += u64::from(record.steps_count);
        summary.total_water += u64::from(record.water_glasses);
        total_calories += u64::from(record.calories_consumed);
    }
    summary.avg_calories = total_calories as f64 / records.len() as f64;

    debug!(
        days = records.len(),
        workouts = summary.total_workouts,
        avg_calories = summary.avg_calories,
        "Computed weekly summary"
    );
    Ok(summary)
}

/// Weight change from the oldest to the newest record.
pub fn weight_trend(records: &[DailyRecord]) -> Result<WeightTrend> {
    let (Some(newest), Some(oldest)) = (records.first(), records.last()) else {
        return Err(MetricsError::invalid("cannot compute a trend over no records"));
    };
    for record in [newest, oldest] {
        if !is_positive(record.weight_kg) {
            return Err(MetricsError::invalid(format!(
                "weight on {} must be positive, got {}",
                record.date, record.weight_kg
            )));
        }
    }

    let delta_kg = oldest.weight_kg - newest.weight_kg;
    let direction = if delta_kg > 0.0 {
        WeightDirection::Down
    } else if delta_kg < 0.0 {
        WeightDirection::Up
    } else {
        WeightDirection::Flat
    };

    debug!(from = %oldest.date, to = %newest.date, delta_kg, ?direction, "Computed weight trend");
    Ok(WeightTrend { delta_kg, direction })
}

/// `100 * completed / total`, unrounded.
///
/// Fails when `total` is zero or `completed` exceeds `total`.
pub fn completion_percentage(completed: usize, total: usize) -> Result<f64> {
    if total == 0 {
        return Err(MetricsError::invalid("completion total must be positive"));
    }
    if completed > total {
        return Err(MetricsError::invalid(format!(
            "completed ({completed}) exceeds total ({total})"
        )));
    }
    Ok(100.0 * completed as f64 / total as f64)
}

/// Compare one metric between two days.
pub fn day_over_day(today: &DailyRecord, yesterday: &DailyRecord, metric: MetricKind) -> DayComparison {
    let today_value = today.metric(metric);
    // Both values come from u32 fields, so the difference always fits.
    let delta = today_value as i64 - yesterday.metric(metric) as i64;
    let direction = match delta.signum() {
        1 => Change::Increased,
        -1 => Change::Decreased,
        _ => Change::Unchanged,
    };

    DayComparison {
        metric,
        today_value,
        delta,
        direction,
    }
}

/// Body-mass index: `weight / (height in metres)^2`.
pub fn bmi(weight_kg: f64, height_cm: f64) -> Result<f64> {
    if !is_positive(height_cm) {
        return Err(MetricsError::invalid(format!(
            "height must be positive, got {height_cm}"
        )));
    }
    if !is_positive(weight_kg) {
        return Err(MetricsError::invalid(format!(
            "weight must be positive, got {weight_kg}"
        )));
    }
    let height_m = height_cm / 100.0;
    Ok(weight_kg / (height_m * height_m))
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}
