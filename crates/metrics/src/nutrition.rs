//! Nutrition totals over a day's meals.

use fittrack_core::{Checklist, Meal};
use serde::{Deserialize, Serialize};

/// Summed macronutrients.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NutritionTotals {
    /// Energy in kcal
    pub calories: u32,
    /// Protein in grams
    pub protein: u32,
    /// Carbohydrates in grams
    pub carbs: u32,
    /// Fat in grams
    pub fat: u32,
}

impl NutritionTotals {
    fn add(mut self, meal: &Meal) -> Self {
        self.calories += meal.calories;
        self.protein += meal.protein;
        self.carbs += meal.carbs;
        self.fat += meal.fat;
        self
    }
}

/// Planned nutrition: every meal, eaten or not.
pub fn totals(meals: &[Meal]) -> NutritionTotals {
    meals.iter().fold(NutritionTotals::default(), NutritionTotals::add)
}

/// Nutrition of the meals whose components are all checked off.
pub fn consumed(meals: &[Meal]) -> NutritionTotals {
    meals
        .iter()
        .filter(|meal| meal.is_completed())
        .fold(NutritionTotals::default(), NutritionTotals::add)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;
    use fittrack_core::{ChecklistItem, MealId};

    fn meal(id: u32, calories: u32, protein: u32, carbs: u32, fat: u32, done: bool) -> Meal {
        Meal {
            id: MealId::new(id),
            name: format!("Meal {id}"),
            time: NaiveTime::from_hms_opt(8 + id, 0, 0).unwrap(),
            calories,
            protein,
            carbs,
            fat,
            items: vec![ChecklistItem {
                completed: done,
                ..ChecklistItem::new(1, "main")
            }],
        }
    }

    #[test]
    fn test_totals_sum_all_meals() {
        let meals = vec![
            meal(1, 450, 25, 45, 15, false),
            meal(2, 650, 40, 60, 20, true),
            meal(3, 550, 35, 40, 18, false),
        ];
        assert_eq!(
            totals(&meals),
            NutritionTotals { calories: 1650, protein: 100, carbs: 145, fat: 53 }
        );
    }

    #[test]
    fn test_consumed_only_counts_completed_meals() {
        let meals = vec![meal(1, 450, 25, 45, 15, false), meal(2, 650, 40, 60, 20, true)];
        assert_eq!(
            consumed(&meals),
            NutritionTotals { calories: 650, protein: 40, carbs: 60, fat: 20 }
        );
    }

    #[test]
    fn test_empty_plan_is_zero() {
        assert_eq!(totals(&[]), NutritionTotals::default());
    }
}
