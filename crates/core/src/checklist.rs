//! Checklist models - workouts made of exercises, meals made of components.
//!
//! A parent (workout or meal) never stores its own completion flag. It is
//! completed iff it has at least one item and every item is completed,
//! recomputed from child state on each query.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use crate::id::{ItemId, MealId, WorkoutId};

/// A single checkable entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    /// Identifier, unique within the parent
    pub id: ItemId,

    /// Human-readable label
    pub label: String,

    /// Whether the item has been done
    pub completed: bool,
}

impl ChecklistItem {
    /// Create an incomplete item.
    pub fn new(id: impl Into<ItemId>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            completed: false,
        }
    }

    /// Flip completion, returning the new state.
    pub fn toggle(&mut self) -> bool {
        self.completed = !self.completed;
        self.completed
    }
}

/// Something made of checklist items.
pub trait Checklist {
    /// Iterate the child items in order.
    fn items(&self) -> Box<dyn Iterator<Item = &ChecklistItem> + '_>;

    /// Mutable access to one child item.
    fn item_mut(&mut self, id: ItemId) -> Option<&mut ChecklistItem>;

    /// Number of child items.
    fn total_items(&self) -> usize {
        self.items().count()
    }

    /// Number of completed child items.
    fn completed_items(&self) -> usize {
        self.items().filter(|item| item.completed).count()
    }

    /// Derived completion: non-empty and every item done.
    fn is_completed(&self) -> bool {
        let total = self.total_items();
        total > 0 && self.completed_items() == total
    }
}

/// How an exercise's repetitions are counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RepUnit {
    /// Counted repetitions
    #[default]
    Reps,
    /// Held for seconds
    Seconds,
}

impl RepUnit {
    /// Short label used after the count.
    pub fn label(&self) -> &'static str {
        match self {
            RepUnit::Reps => "reps",
            RepUnit::Seconds => "sec",
        }
    }
}

/// An exercise within a workout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    /// Checklist state
    #[serde(flatten)]
    pub item: ChecklistItem,

    /// Number of sets
    pub sets: u32,

    /// Repetitions (or seconds) per set
    pub reps: u32,

    /// Unit for `reps`
    #[serde(default)]
    pub unit: RepUnit,
}

impl Exercise {
    /// Create an incomplete exercise counted in reps.
    pub fn new(id: u32, name: impl Into<String>, sets: u32, reps: u32) -> Self {
        Self {
            item: ChecklistItem::new(id, name),
            sets,
            reps,
            unit: RepUnit::Reps,
        }
    }

    /// Count the exercise in seconds instead of reps.
    pub fn timed(mut self) -> Self {
        self.unit = RepUnit::Seconds;
        self
    }
}

/// A structured workout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    /// Unique identifier
    pub id: WorkoutId,

    /// Title
    pub title: String,

    /// Subtitle
    pub subtitle: String,

    /// Description
    pub description: String,

    /// Planned duration in minutes
    pub duration_minutes: u32,

    /// Estimated calories burned
    pub calories: u32,

    /// Exercises in order
    pub exercises: Vec<Exercise>,
}

impl Checklist for Workout {
    fn items(&self) -> Box<dyn Iterator<Item = &ChecklistItem> + '_> {
        Box::new(self.exercises.iter().map(|exercise| &exercise.item))
    }

    fn item_mut(&mut self, id: ItemId) -> Option<&mut ChecklistItem> {
        self.exercises
            .iter_mut()
            .map(|exercise| &mut exercise.item)
            .find(|item| item.id == id)
    }
}

/// A component of a meal.
pub type MealItem = ChecklistItem;

/// A planned meal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    /// Unique identifier
    pub id: MealId,

    /// Meal name, e.g. "Breakfast"
    pub name: String,

    /// Planned time of day
    pub time: NaiveTime,

    /// Energy in kcal
    pub calories: u32,

    /// Protein in grams
    pub protein: u32,

    /// Carbohydrates in grams
    pub carbs: u32,

    /// Fat in grams
    pub fat: u32,

    /// Components of the meal
    pub items: Vec<MealItem>,
}

impl Checklist for Meal {
    fn items(&self) -> Box<dyn Iterator<Item = &ChecklistItem> + '_> {
        Box::new(self.items.iter())
    }

    fn item_mut(&mut self, id: ItemId) -> Option<&mut ChecklistItem> {
        self.items.iter_mut().find(|item| item.id == id)
    }
}
