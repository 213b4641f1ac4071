//! Diet plan state: meal checklists and water intake.

use fittrack_core::{Checklist, ItemId, Meal, MealId, TrackerConfig};
use fittrack_metrics::{checklist::parent_completion, nutrition, NutritionTotals};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{Result, SessionError};

/// A day's diet plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DietPlan {
    meals: Vec<Meal>,
    water_glasses: u32,
    water_target: u32,
}

impl DietPlan {
    /// Create a plan with no water drunk yet.
    pub fn new(meals: Vec<Meal>, config: &TrackerConfig) -> Self {
        Self {
            meals,
            water_glasses: 0,
            water_target: config.daily_water_target,
        }
    }

    /// Start from an existing water count, capped at the target.
    pub fn with_water(mut self, glasses: u32) -> Self {
        self.water_glasses = glasses.min(self.water_target);
        self
    }

    /// Meals in plan order.
    pub fn meals(&self) -> &[Meal] {
        &self.meals
    }

    /// Look up a meal.
    pub fn meal(&self, id: MealId) -> Option<&Meal> {
        self.meals.iter().find(|meal| meal.id == id)
    }

    /// Flip one meal component. Returns the item's new state.
    pub fn toggle_meal_item(&mut self, meal_id: MealId, item_id: ItemId) -> Result<bool> {
        let meal = self
            .meals
            .iter_mut()
            .find(|meal| meal.id == meal_id)
            .ok_or(SessionError::MealNotFound(meal_id))?;
        let item = meal.item_mut(item_id).ok_or(SessionError::ItemNotFound {
            meal: meal_id,
            item: item_id,
        })?;
        let completed = item.toggle();

        info!(
            meal = %meal_id,
            item = %item_id,
            completed,
            meal_completed = meal.is_completed(),
            "Toggled meal item"
        );
        Ok(completed)
    }

    /// Drink one more glass. Does nothing once the target is reached.
    pub fn add_water_glass(&mut self) -> bool {
        if self.water_glasses >= self.water_target {
            debug!(target = self.water_target, "Water target already reached");
            return false;
        }
        self.water_glasses += 1;
        info!(glasses = self.water_glasses, target = self.water_target, "Added water glass");
        true
    }

    /// Glasses drunk so far.
    pub fn water_glasses(&self) -> u32 {
        self.water_glasses
    }

    /// Daily water target.
    pub fn water_target(&self) -> u32 {
        self.water_target
    }

    /// Number of meals whose components are all checked off.
    pub fn completed_meals(&self) -> usize {
        self.meals.iter().filter(|meal| meal.is_completed()).count()
    }

    /// Percentage of meals completed.
    pub fn completion_percentage(&self) -> Result<f64> {
        Ok(parent_completion(&self.meals)?)
    }

    /// Planned nutrition for the whole day.
    pub fn nutrition(&self) -> NutritionTotals {
        nutrition::totals(&self.meals)
    }

    /// Nutrition of completed meals only.
    pub fn consumed(&self) -> NutritionTotals {
        nutrition::consumed(&self.meals)
    }
}
