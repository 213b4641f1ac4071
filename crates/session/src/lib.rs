//! Session state (Layer 2)
//!
//! Mutable, caller-owned state for one tracking session: the diet plan,
//! workout checklists, profile editing and calendar navigation. Derived
//! values are always recomputed from the current state through
//! `fittrack-metrics`.

#![warn(missing_docs)]

pub mod error;
pub mod diet;
pub mod workout;
pub mod profile;
pub mod calendar;
pub mod seed;

pub use error::{Result, SessionError};
pub use diet::DietPlan;
pub use workout::WorkoutSession;
pub use profile::{GoalField, ProfileEditor};
pub use calendar::WeekCalendar;
