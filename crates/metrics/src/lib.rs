//! Metrics aggregation.
//!
//! Pure reductions over daily records, checklists and meals: weekly
//! summaries, weight trends, day-over-day comparisons, BMI and completion
//! percentages. Nothing here holds state.

#![warn(missing_docs)]

pub mod error;
pub mod aggregator;
pub mod checklist;
pub mod nutrition;
pub mod daily;

pub use error::{MetricsError, Result};
pub use aggregator::{
    bmi, completion_percentage, day_over_day, weekly_summary, weight_trend, Change,
    DayComparison, Summary, WeightDirection, WeightTrend,
};
pub use nutrition::NutritionTotals;
pub use daily::{daily_progress, DailyProgress};
