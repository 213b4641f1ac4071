//! Identifiers for FitTrack entities.
//!
//! Identifiers are small integers unique within their parent collection,
//! matching how seed data numbers meals, exercises and activities.

use serde::{Deserialize, Serialize};

macro_rules! numeric_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(u32);

        impl $name {
            /// Wrap a raw identifier.
            pub const fn new(raw: u32) -> Self {
                Self(raw)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                self.0.fmt(f)
            }
        }

        impl std::str::FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.trim().parse()?))
            }
        }

        impl From<u32> for $name {
            fn from(raw: u32) -> Self {
                Self(raw)
            }
        }
    };
}

numeric_id!(
    /// Identifier of a checklist item, unique within its workout or meal.
    ItemId
);

numeric_id!(
    /// Identifier of a meal within a diet plan.
    MealId
);

numeric_id!(
    /// Identifier of a workout.
    WorkoutId
);

numeric_id!(
    /// Identifier of a calendar activity within a day.
    ActivityId
);
