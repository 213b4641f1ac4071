//! FitTrack core data models.
//!
//! This crate defines the records, goals and checklists that the metrics
//! and session crates operate on.

#![warn(missing_docs)]

// Core identities
mod id;

// Daily tracking
mod record;
mod activity;

// Goals and profile
mod goal;

// Workouts and meals
mod checklist;

// Configuration
mod config;

// Re-exports
pub use id::*;

pub use record::{DailyRecord, MetricKind, RecordError};
pub use activity::{Activity, ActivityKind};
pub use goal::{Goal, GoalError, UserProfile};
pub use checklist::{Checklist, ChecklistItem, Exercise, Meal, MealItem, RepUnit, Workout};
pub use config::{ConfigError, TrackerConfig};
