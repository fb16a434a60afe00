//! Day and week schedules and the edits applied to them.
//!
//! A [`WeekSchedule`] always holds seven [`DaySchedule`]s in Monday-first
//! order, and every day always holds at least one shift.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::{Day, Location, ShiftEntry};

/// One weekday of a report and the shifts worked on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DaySchedule {
    /// The day this schedule covers.
    pub day: Day,
    /// Whether the day is switched on for editing.
    #[serde(default)]
    pub enabled: bool,
    /// The shifts worked on this day, in entry order.
    #[serde(default)]
    pub shifts: Vec<ShiftEntry>,
}

impl DaySchedule {
    /// Creates a disabled day holding one empty placeholder shift.
    pub fn new(day: Day) -> Self {
        Self {
            day,
            enabled: false,
            shifts: vec![ShiftEntry::default()],
        }
    }

    /// Iterates over the shifts that have both a start and an end time.
    pub fn complete_shifts(&self) -> impl Iterator<Item = &ShiftEntry> {
        self.shifts.iter().filter(|shift| shift.is_complete())
    }

    /// Restores the at-least-one-shift invariant.
    pub(crate) fn ensure_placeholder(&mut self) {
        if self.shifts.is_empty() {
            self.shifts.push(ShiftEntry::default());
        }
    }
}

/// A single field edit applied to one shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShiftUpdate {
    /// Sets or clears the start time.
    StartTime(Option<NaiveTime>),
    /// Sets or clears the end time.
    EndTime(Option<NaiveTime>),
    /// Changes the site.
    Location(Location),
}

/// The seven days of one report session.
///
/// # Example
///
/// ```
/// use wage_calculator::models::{Day, ShiftUpdate, WeekSchedule};
/// use chrono::NaiveTime;
///
/// let mut week = WeekSchedule::new();
/// week.toggle_day(Day::Monday, true);
/// week.update_shift(Day::Monday, 0, ShiftUpdate::StartTime(NaiveTime::from_hms_opt(9, 0, 0))).unwrap();
/// week.update_shift(Day::Monday, 0, ShiftUpdate::EndTime(NaiveTime::from_hms_opt(17, 0, 0))).unwrap();
///
/// assert_eq!(week.day(Day::Monday).complete_shifts().count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekSchedule {
    days: Vec<DaySchedule>,
}

impl Default for WeekSchedule {
    fn default() -> Self {
        Self::new()
    }
}

impl WeekSchedule {
    /// Creates a week of disabled days, each with one placeholder shift.
    pub fn new() -> Self {
        Self {
            days: Day::ALL.into_iter().map(DaySchedule::new).collect(),
        }
    }

    /// Builds a week from an arbitrary list of day schedules.
    ///
    /// Days are placed in week order. A day listed more than once keeps its
    /// last entry, a missing day is filled with a fresh disabled day, and any
    /// day without shifts receives a placeholder.
    pub fn from_days(days: impl IntoIterator<Item = DaySchedule>) -> Self {
        let mut week = Self::new();
        for mut schedule in days {
            schedule.ensure_placeholder();
            let index = schedule.day.index();
            week.days[index] = schedule;
        }
        week
    }

    /// All seven days in week order.
    pub fn days(&self) -> &[DaySchedule] {
        &self.days
    }

    /// The schedule for a given day.
    pub fn day(&self, day: Day) -> &DaySchedule {
        &self.days[day.index()]
    }

    fn day_mut(&mut self, day: Day) -> &mut DaySchedule {
        &mut self.days[day.index()]
    }

    /// Switches a day on or off.
    ///
    /// Switching off resets every shift to an empty placeholder at the
    /// primary site while keeping the number of rows. Switching on keeps the
    /// existing shifts.
    pub fn toggle_day(&mut self, day: Day, enabled: bool) {
        let schedule = self.day_mut(day);
        schedule.enabled = enabled;
        if !enabled {
            schedule.shifts.fill(ShiftEntry::default());
        }
        schedule.ensure_placeholder();
    }

    /// Appends an empty shift to a day.
    pub fn add_shift(&mut self, day: Day) {
        self.day_mut(day).shifts.push(ShiftEntry::default());
    }

    /// Removes the shift at `index`.
    ///
    /// Removing the only remaining shift, or an index past the end, leaves
    /// the day untouched. Returns whether a shift was removed.
    pub fn remove_shift(&mut self, day: Day, index: usize) -> bool {
        let schedule = self.day_mut(day);
        if schedule.shifts.len() <= 1 || index >= schedule.shifts.len() {
            return false;
        }
        schedule.shifts.remove(index);
        true
    }

    /// Applies a single field edit to the shift at `index`.
    pub fn update_shift(&mut self, day: Day, index: usize, update: ShiftUpdate) -> EngineResult<()> {
        let shift = self
            .day_mut(day)
            .shifts
            .get_mut(index)
            .ok_or(EngineError::ShiftIndexOutOfRange { day, index })?;

        match update {
            ShiftUpdate::StartTime(time) => {
                shift.start_time = time.map(super::shift::truncate_to_minute)
            }
            ShiftUpdate::EndTime(time) => shift.end_time = time.map(super::shift::truncate_to_minute),
            ShiftUpdate::Location(location) => shift.location = location,
        }
        Ok(())
    }

    /// Resets the whole week to its initial state.
    pub fn clear(&mut self) {
        *self = Self::new();
    }
}
