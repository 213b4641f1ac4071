//! Completion percentages for checklists.

use fittrack_core::{Checklist, ChecklistItem};

use crate::aggregator::completion_percentage;
use crate::error::Result;

/// Percentage of completed items in a flat list.
pub fn item_completion<'a>(items: impl IntoIterator<Item = &'a ChecklistItem>) -> Result<f64> {
    let (completed, total) = items
        .into_iter()
        .fold((0, 0), |(done, total), item| (done + usize::from(item.completed), total + 1));
    completion_percentage(completed, total)
}

/// Percentage of items completed within one workout or meal.
pub fn checklist_completion<C: Checklist + ?Sized>(checklist: &C) -> Result<f64> {
    completion_percentage(checklist.completed_items(), checklist.total_items())
}

/// Percentage of parents (workouts or meals) whose items are all done.
pub fn parent_completion<C: Checklist>(parents: &[C]) -> Result<f64> {
    let completed = parents.iter().filter(|parent| parent.is_completed()).count();
    completion_percentage(completed, parents.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;
    use fittrack_core::{ItemId, Meal, MealId};

    fn meal(id: u32, done: &[bool]) -> Meal {
        Meal {
            id: MealId::new(id),
            name: format!("Meal {id}"),
            time: NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
            calories: 500,
            protein: 30,
            carbs: 50,
            fat: 15,
            items: done
                .iter()
                .enumerate()
                .map(|(i, &completed)| ChecklistItem {
                    completed,
                    ..ChecklistItem::new(i as u32 + 1, format!("item {i}"))
                })
                .collect(),
        }
    }

    #[test]
    fn test_item_completion() {
        let lunch = meal(1, &[true, true, false, true]);
        assert_eq!(item_completion(&lunch.items).unwrap(), 75.0);
        assert!(item_completion(&Vec::<ChecklistItem>::new()).is_err());
    }

    #[test]
    fn test_checklist_completion_tracks_toggles() {
        let mut lunch = meal(1, &[false, false]);
        assert_eq!(checklist_completion(&lunch).unwrap(), 0.0);
        lunch.item_mut(ItemId::new(2)).unwrap().toggle();
        assert_eq!(checklist_completion(&lunch).unwrap(), 50.0);
    }

    #[test]
    fn test_parent_completion_counts_fully_done_parents() {
        let meals = vec![
            meal(1, &[true, true, true]),
            meal(2, &[true, false]),
            meal(3, &[false]),
        ];
        let percent = parent_completion(&meals).unwrap();
        assert!((percent - 100.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_parent_completion_empty_fails() {
        assert!(parent_completion::<Meal>(&[]).is_err());
    }
}
