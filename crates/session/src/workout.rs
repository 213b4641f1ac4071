//! Workout session: exercise checklist for one workout.

use fittrack_core::{Checklist, Exercise, ItemId, Workout};
use fittrack_metrics::checklist::checklist_completion;
use tracing::info;

use crate::error::{Result, SessionError};

/// State of a workout being performed.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutSession {
    workout: Workout,
}

impl WorkoutSession {
    /// Start a session for `workout`.
    pub fn new(workout: Workout) -> Self {
        Self { workout }
    }

    /// The workout with its current exercise state.
    pub fn workout(&self) -> &Workout {
        &self.workout
    }

    /// Exercises in order.
    pub fn exercises(&self) -> &[Exercise] {
        &self.workout.exercises
    }

    /// Flip one exercise. Returns its new state.
    pub fn toggle_exercise(&mut self, id: ItemId) -> Result<bool> {
        let item = self
            .workout
            .item_mut(id)
            .ok_or(SessionError::ExerciseNotFound(id))?;
        let completed = item.toggle();
        info!(workout = %self.workout.id, exercise = %id, completed, "Toggled exercise");
        Ok(completed)
    }

    /// Exercises done so far.
    pub fn completed_count(&self) -> usize {
        self.workout.completed_items()
    }

    /// Whether every exercise is done.
    pub fn is_completed(&self) -> bool {
        self.workout.is_completed()
    }

    /// Percentage of exercises done.
    pub fn completion_percentage(&self) -> Result<f64> {
        Ok(checklist_completion(&self.workout)?)
    }
}
