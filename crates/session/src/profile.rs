//! Profile editing: body measurements and goal drafts.
//!
//! Goal edits go to a draft copy. `save` validates the draft and replaces
//! the saved goals; `cancel` throws the draft away.

use fittrack_core::{Goal, UserProfile};
use fittrack_metrics::bmi;
use tracing::{info, warn};

use crate::error::{Result, SessionError};

/// A single goal edit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GoalField {
    /// Workouts per week
    WeeklyWorkouts(u32),
    /// Calories per day
    DailyCalories(u32),
    /// Glasses of water per day
    DailyWater(u32),
    /// Target weight in kilograms
    TargetWeight(f64),
}

impl GoalField {
    fn apply(self, goal: &mut Goal) {
        match self {
            GoalField::WeeklyWorkouts(value) => goal.weekly_workouts_target = value,
            GoalField::DailyCalories(value) => goal.daily_calories_target = value,
            GoalField::DailyWater(value) => goal.daily_water_target = value,
            GoalField::TargetWeight(value) => goal.target_weight_kg = value,
        }
    }
}

/// Editor over a user's profile.
#[derive(Debug, Clone)]
pub struct ProfileEditor {
    profile: UserProfile,
    draft: Option<Goal>,
}

impl ProfileEditor {
    /// Wrap a saved profile.
    pub fn new(profile: UserProfile) -> Self {
        Self {
            profile,
            draft: None,
        }
    }

    /// The saved profile.
    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    /// Saved goals.
    pub fn goals(&self) -> &Goal {
        &self.profile.goals
    }

    /// Whether a goal edit is open.
    pub fn is_editing(&self) -> bool {
        self.draft.is_some()
    }

    /// Open a goal edit seeded from the saved goals.
    pub fn begin_edit(&mut self) {
        if self.draft.is_none() {
            self.draft = Some(self.profile.goals.clone());
        }
    }

    /// Change one goal in the draft, opening an edit if needed.
    pub fn update_goal(&mut self, field: GoalField) {
        let draft = self
            .draft
            .get_or_insert_with(|| self.profile.goals.clone());
        field.apply(draft);
    }

    /// Validate and commit the draft. Returns false when no edit was open.
    ///
    /// A rejected draft stays open so it can be corrected.
    pub fn save(&mut self) -> Result<bool> {
        let Some(draft) = self.draft.as_ref() else {
            return Ok(false);
        };
        if let Err(err) = draft.validate() {
            warn!(error = %err, "Rejected goal edit");
            return Err(err.into());
        }
        self.profile.goals = draft.clone();
        self.draft = None;
        info!(goals = ?self.profile.goals, "Saved goals");
        Ok(true)
    }

    /// Discard the draft.
    pub fn cancel(&mut self) {
        if self.draft.take().is_some() {
            info!("Discarded goal edit");
        }
    }

    /// Update height and weight.
    pub fn update_body(&mut self, height_cm: f64, weight_kg: f64) -> Result<()> {
        for (name, value) in [("height", height_cm), ("weight", weight_kg)] {
            if !(value.is_finite() && value > 0.0) {
                return Err(SessionError::InvalidMeasurement(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }
        self.profile.height_cm = height_cm;
        self.profile.weight_kg = weight_kg;
        info!(height_cm, weight_kg, "Updated body measurements");
        Ok(())
    }

    /// Body-mass index from the saved measurements.
    pub fn bmi(&self) -> Result<f64> {
        Ok(bmi(self.profile.weight_kg, self.profile.height_cm)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    #[test]
    fn test_save_commits_draft() {
        let mut editor = ProfileEditor::new(seed::profile());
        editor.begin_edit();
        editor.update_goal(GoalField::WeeklyWorkouts(5));
        editor.update_goal(GoalField::TargetWeight(72.5));
        assert_eq!(editor.goals().weekly_workouts_target, 4);

        assert!(editor.save().unwrap());
        assert!(!editor.is_editing());
        assert_eq!(editor.goals().weekly_workouts_target, 5);
        assert_eq!(editor.goals().target_weight_kg, 72.5);
    }

    #[test]
    fn test_cancel_keeps_saved_goals() {
        let mut editor = ProfileEditor::new(seed::profile());
        let before = editor.goals().clone();
        editor.update_goal(GoalField::DailyCalories(1500));
        assert!(editor.is_editing());

        editor.cancel();
        assert!(!editor.is_editing());
        assert_eq!(editor.goals(), &before);
        assert!(!editor.save().unwrap());
    }

    #[test]
    fn test_invalid_draft_stays_open() {
        let mut editor = ProfileEditor::new(seed::profile());
        editor.update_goal(GoalField::DailyWater(0));
        assert!(matches!(editor.save(), Err(SessionError::InvalidGoal(_))));
        assert!(editor.is_editing());
        assert_eq!(editor.goals().daily_water_target, 8);

        editor.update_goal(GoalField::DailyWater(10));
        assert!(editor.save().unwrap());
        assert_eq!(editor.goals().daily_water_target, 10);
    }

    #[test]
    fn test_bmi_follows_measurements() {
        let mut editor = ProfileEditor::new(seed::profile());
        assert!((editor.bmi().unwrap() - 24.65).abs() < 0.01);

        editor.update_body(180.0, 81.0).unwrap();
        assert!((editor.bmi().unwrap() - 25.0).abs() < 1e-9);

        assert!(matches!(
            editor.update_body(0.0, 81.0),
            Err(SessionError::InvalidMeasurement(_))
        ));
        assert_eq!(editor.profile().height_cm, 180.0);
    }
}
