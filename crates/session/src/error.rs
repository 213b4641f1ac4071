//! Session error type.

use chrono::NaiveDate;
use fittrack_core::{GoalError, ItemId, MealId};
use fittrack_metrics::MetricsError;

/// Result alias for session operations.
pub type Result<T> = std::result::Result<T, SessionError>;

/// Errors that can occur while mutating session state.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// No meal with this id in the plan
    #[error("meal not found: {0}")]
    MealNotFound(MealId),

    /// No item with this id in the meal
    #[error("item {item} not found in meal {meal}")]
    ItemNotFound {
        /// Parent meal
        meal: MealId,
        /// Missing item
        item: ItemId,
    },

    /// No exercise with this id in the workout
    #[error("exercise not found: {0}")]
    ExerciseNotFound(ItemId),

    /// Goal edit rejected
    #[error("invalid goal: {0}")]
    InvalidGoal(#[from] GoalError),

    /// Body measurement rejected
    #[error("invalid measurement: {0}")]
    InvalidMeasurement(String),

    /// Date arithmetic left the representable calendar range
    #[error("date out of range near {0}")]
    DateOutOfRange(NaiveDate),

    /// Derived metric could not be computed
    #[error(transparent)]
    Metrics(#[from] MetricsError),
}
