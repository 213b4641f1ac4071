//! Week calendar navigation.
//!
//! Every displayed week lies inside chrono's representable range; moves that
//! would leave it fail with [`SessionError::DateOutOfRange`] and keep the view.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use fittrack_core::TrackerConfig;
use tracing::{debug, warn};

use crate::error::{Result, SessionError};

/// First day of the week containing `date`.
pub fn start_of_week(date: NaiveDate, first_day: Weekday) -> Result<NaiveDate> {
    let offset = (7 + date.weekday().num_days_from_monday() - first_day.num_days_from_monday()) % 7;
    date.checked_sub_signed(Duration::days(i64::from(offset)))
        .ok_or(SessionError::DateOutOfRange(date))
}

// The whole week, not just its first day, has to be representable.
fn full_week(start: NaiveDate) -> Result<NaiveDate> {
    start
        .checked_add_signed(Duration::days(6))
        .map(|_| start)
        .ok_or(SessionError::DateOutOfRange(start))
}

/// A one-week view with a selected day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekCalendar {
    today: NaiveDate,
    selected: NaiveDate,
    week_start: NaiveDate,
    first_day: Weekday,
}

impl WeekCalendar {
    /// Open on the week containing `today`, with today selected.
    pub fn new(today: NaiveDate, config: &TrackerConfig) -> Result<Self> {
        let week_start = full_week(start_of_week(today, config.week_starts_on)?)?;
        Ok(Self {
            today,
            selected: today,
            week_start,
            first_day: config.week_starts_on,
        })
    }

    /// First day of the displayed week.
    pub fn week_start(&self) -> NaiveDate {
        self.week_start
    }

    /// Currently selected day.
    pub fn selected(&self) -> NaiveDate {
        self.selected
    }

    /// The session's today.
    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// The seven displayed days.
    pub fn days(&self) -> Vec<NaiveDate> {
        self.week_start.iter_days().take(7).collect()
    }

    /// Show the previous week. The selection is unchanged.
    pub fn previous_week(&mut self) -> Result<()> {
        let start = self
            .week_start
            .checked_sub_signed(Duration::days(7))
            .ok_or(SessionError::DateOutOfRange(self.week_start))?;
        self.week_start = start;
        debug!(week_start = %self.week_start, "Moved to previous week");
        Ok(())
    }

    /// Show the next week. The selection is unchanged.
    pub fn next_week(&mut self) -> Result<()> {
        let start = self
            .week_start
            .checked_add_signed(Duration::days(7))
            .ok_or(SessionError::DateOutOfRange(self.week_start))
            .and_then(full_week)?;
        self.week_start = start;
        debug!(week_start = %self.week_start, "Moved to next week");
        Ok(())
    }

    /// Select a day, moving the view to its week.
    pub fn select(&mut self, date: NaiveDate) -> Result<()> {
        let start = start_of_week(date, self.first_day).and_then(full_week);
        let start = match start {
            Ok(start) => start,
            Err(err) => {
                warn!(date = %date, "Rejected selection outside the calendar range");
                return Err(err);
            }
        };
        self.selected = date;
        self.week_start = start;
        debug!(selected = %date, "Selected day");
        Ok(())
    }

    /// Select today and show its week.
    pub fn go_to_today(&mut self) -> Result<()> {
        self.select(self.today)
    }

    /// Whether `date` is today.
    pub fn is_today(&self, date: NaiveDate) -> bool {
        date == self.today
    }

    /// Whether `date` is selected.
    pub fn is_selected(&self, date: NaiveDate) -> bool {
        date == self.selected
    }

    /// Month heading for the displayed week, e.g. "March 2024".
    pub fn title(&self) -> String {
        self.week_start.format("%B %Y").to_string()
    }
}
