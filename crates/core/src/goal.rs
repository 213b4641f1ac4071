//! Goal model - the user's fitness targets and profile.

use serde::{Deserialize, Serialize};

/// Fitness targets for a single user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    /// Workouts per week
    pub weekly_workouts_target: u32,

    /// Calories per day
    pub daily_calories_target: u32,

    /// Glasses of water per day
    pub daily_water_target: u32,

    /// Target body weight in kilograms
    pub target_weight_kg: f64,
}

/// Rejected goal values.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GoalError {
    /// An integer target was zero
    #[error("{0} must be positive")]
    ZeroTarget(&'static str),

    /// Target weight was not a positive finite number
    #[error("target weight must be positive, got {0}")]
    InvalidWeight(f64),
}

impl Goal {
    /// Check that every target is positive.
    pub fn validate(&self) -> Result<(), GoalError> {
        if self.weekly_workouts_target == 0 {
            return Err(GoalError::ZeroTarget("weekly workouts target"));
        }
        if self.daily_calories_target == 0 {
            return Err(GoalError::ZeroTarget("daily calories target"));
        }
        if self.daily_water_target == 0 {
            return Err(GoalError::ZeroTarget("daily water target"));
        }
        if !(self.target_weight_kg.is_finite() && self.target_weight_kg > 0.0) {
            return Err(GoalError::InvalidWeight(self.target_weight_kg));
        }
        Ok(())
    }
}

impl Default for Goal {
    fn default() -> Self {
        Self {
            weekly_workouts_target: 4,
            daily_calories_target: 2000,
            daily_water_target: 8,
            target_weight_kg: 73.0,
        }
    }
}

/// A user's profile: identity, body measurements and goals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Display name
    pub name: String,

    /// Contact email
    pub email: String,

    /// Free-form membership start, e.g. "January 2023"
    pub member_since: String,

    /// Height in centimetres
    pub height_cm: f64,

    /// Current weight in kilograms
    pub weight_kg: f64,

    /// Fitness goals
    pub goals: Goal,
}
