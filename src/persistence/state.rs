//! The calculator form and its persisted shape.
//!
//! Persisted state is a flat JSON object: one key per weekday name holding
//! `{enabled, shifts}`, next to the rates and report header fields.
//!
//! ```json
//! {
//!   "Monday": { "enabled": true, "shifts": [{ "startTime": "09:00", "endTime": "17:00", "location": "Gosford" }] },
//!   "weekdayRate": "20",
//!   "taxAmount": "50",
//!   "employeeName": "Sam"
//! }
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{Day, DaySchedule, RatesAndExpenses, ReportDetails, ShiftEntry, WeekSchedule};

/// Everything on the calculator form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CalculatorState {
    /// The week being edited.
    pub schedule: WeekSchedule,
    /// Rates and expenses as typed.
    pub rates: RatesAndExpenses,
    /// Report header details.
    pub details: ReportDetails,
}

impl CalculatorState {
    /// Converts the form into its persisted shape.
    pub fn to_persisted(&self) -> PersistedState {
        let mut week = PersistedWeek::default();
        for schedule in self.schedule.days() {
            *week.slot_mut(schedule.day) = Some(PersistedDay {
                enabled: Some(schedule.enabled),
                shifts: schedule.shifts.clone(),
            });
        }

        PersistedState {
            week,
            rates: self.rates.clone(),
            details: self.details.clone(),
        }
    }
}

/// One day as stored.
///
/// `enabled` is optional so that older saves without it can be backfilled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedDay {
    /// Whether the day was switched on. Missing in older saves.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// The stored shifts.
    #[serde(default)]
    pub shifts: Vec<ShiftEntry>,
}

impl PersistedDay {
    /// Rebuilds a day schedule, filling in what older saves left out.
    ///
    /// A missing `enabled` is inferred from whether any shift has a time
    /// filled in, and an empty shift list receives a placeholder.
    fn into_schedule(self, day: Day) -> DaySchedule {
        let enabled = self
            .enabled
            .unwrap_or_else(|| self.shifts.iter().any(ShiftEntry::has_any_time));

        let mut schedule = DaySchedule {
            day,
            enabled,
            shifts: self.shifts,
        };
        schedule.ensure_placeholder();
        schedule
    }
}

/// The seven weekday keys of the persisted object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedWeek {
    #[serde(rename = "Monday", default, skip_serializing_if = "Option::is_none")]
    monday: Option<PersistedDay>,
    #[serde(rename = "Tuesday", default, skip_serializing_if = "Option::is_none")]
    tuesday: Option<PersistedDay>,
    #[serde(rename = "Wednesday", default, skip_serializing_if = "Option::is_none")]
    wednesday: Option<PersistedDay>,
    #[serde(rename = "Thursday", default, skip_serializing_if = "Option::is_none")]
    thursday: Option<PersistedDay>,
    #[serde(rename = "Friday", default, skip_serializing_if = "Option::is_none")]
    friday: Option<PersistedDay>,
    #[serde(rename = "Saturday", default, skip_serializing_if = "Option::is_none")]
    saturday: Option<PersistedDay>,
    #[serde(rename = "Sunday", default, skip_serializing_if = "Option::is_none")]
    sunday: Option<PersistedDay>,
}

impl PersistedWeek {
    /// Mutable access to the entry for a day.
    pub fn slot_mut(&mut self, day: Day) -> &mut Option<PersistedDay> {
        match day {
            Day::Monday => &mut self.monday,
            Day::Tuesday => &mut self.tuesday,
            Day::Wednesday => &mut self.wednesday,
            Day::Thursday => &mut self.thursday,
            Day::Friday => &mut self.friday,
            Day::Saturday => &mut self.saturday,
            Day::Sunday => &mut self.sunday,
        }
    }
}

/// The serialized form of [`CalculatorState`].
///
/// # Example
///
/// ```
/// use wage_calculator::models::Day;
/// use wage_calculator::persistence::PersistedState;
///
/// let stored: PersistedState = serde_json::from_str(
///     r#"{"Tuesday": {"shifts": [{"startTime": "09:00", "endTime": ""}]}, "weekdayRate": 21}"#,
/// ).unwrap();
/// let state = stored.into_state();
///
/// // `enabled` is inferred from the filled-in start time.
/// assert!(state.schedule.day(Day::Tuesday).enabled);
/// assert!(!state.schedule.day(Day::Monday).enabled);
/// assert_eq!(state.rates.weekday_rate, "21");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedState {
    /// Per-day entries keyed by weekday name.
    #[serde(flatten)]
    pub week: PersistedWeek,
    /// Rates and expenses.
    #[serde(flatten)]
    pub rates: RatesAndExpenses,
    /// Report header details.
    #[serde(flatten)]
    pub details: ReportDetails,
}

impl PersistedState {
    /// Rebuilds the form, normalizing anything older saves left out.
    ///
    /// Days absent from the stored object come back as fresh disabled days.
    pub fn into_state(self) -> CalculatorState {
        let PersistedState {
            mut week,
            rates,
            details,
        } = self;

        let days = Day::ALL.into_iter().map(|day| match week.slot_mut(day).take() {
            Some(stored) => stored.into_schedule(day),
            None => {
                debug!(day = %day, "No stored entry for day, starting fresh");
                DaySchedule::new(day)
            }
        });

        CalculatorState {
            schedule: WeekSchedule::from_days(days),
            rates,
            details,
        }
    }
}

impl From<&CalculatorState> for PersistedState {
    fn from(state: &CalculatorState) -> Self {
        state.to_persisted()
    }
}

impl From<PersistedState> for CalculatorState {
    fn from(stored: PersistedState) -> Self {
        stored.into_state()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Location, ShiftUpdate};
    use chrono::NaiveTime;
    use serde_json::json;

    fn time(h: u32, m: u32) -> Option<NaiveTime> {
        NaiveTime::from_hms_opt(h, m, 0)
    }

    fn sample_state() -> CalculatorState {
        let mut schedule = WeekSchedule::new();
        schedule.toggle_day(Day::Monday, true);
        schedule
            .update_shift(Day::Monday, 0, ShiftUpdate::StartTime(time(9, 0)))
            .unwrap();
        schedule
            .update_shift(Day::Monday, 0, ShiftUpdate::EndTime(time(17, 0)))
            .unwrap();
        schedule.add_shift(Day::Monday);
        schedule
            .update_shift(Day::Monday, 1, ShiftUpdate::Location(Location::Islington))
            .unwrap();

        CalculatorState {
            schedule,
            rates: RatesAndExpenses {
                weekday_rate: "20".to_string(),
                weekend_rate: "25".to_string(),
                fuel_cost: "10".to_string(),
                others: "".to_string(),
                transferred: "50".to_string(),
                closing_amount: "200".to_string(),
            },
            details: ReportDetails {
                employee_name: "Sam Taylor".to_string(),
                pouch_day: "Monday".to_string(),
                ..Default::default()
            },
        }
    }

    #[test]
    fn test_persisted_shape_is_flat_object() {
        let value = serde_json::to_value(sample_state().to_persisted()).unwrap();

        assert_eq!(value["Monday"]["enabled"], json!(true));
        assert_eq!(value["Monday"]["shifts"][0]["startTime"], json!("09:00"));
        assert_eq!(value["Monday"]["shifts"][0]["endTime"], json!("17:00"));
        assert_eq!(value["Monday"]["shifts"][1]["startTime"], json!(null));
        assert_eq!(value["Monday"]["shifts"][1]["location"], json!("Islington"));
        assert_eq!(value["Sunday"]["enabled"], json!(false));
        assert_eq!(value["weekdayRate"], json!("20"));
        assert_eq!(value["taxAmount"], json!("50"));
        assert_eq!(value["employeeName"], json!("Sam Taylor"));
        assert_eq!(value["pouchDay"], json!("Monday"));
    }

    #[test]
    fn test_round_trip_is_lossless() {
        let state = sample_state();
        let json = serde_json::to_string(&state.to_persisted()).unwrap();
        let restored: PersistedState = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.into_state(), state);
    }

    #[test]
    fn test_missing_enabled_is_inferred_from_times() {
        let stored: PersistedState = serde_json::from_value(json!({
            "Wednesday": { "shifts": [{ "startTime": null, "endTime": "12:00" }] },
            "Thursday": { "shifts": [{ "startTime": null, "endTime": null }] },
        }))
        .unwrap();

        let state = stored.into_state();
        assert!(state.schedule.day(Day::Wednesday).enabled);
        assert!(!state.schedule.day(Day::Thursday).enabled);
    }

    #[test]
    fn test_explicit_enabled_is_kept() {
        let stored: PersistedState = serde_json::from_value(json!({
            "Friday": { "enabled": false, "shifts": [{ "startTime": "09:00", "endTime": "10:00" }] },
        }))
        .unwrap();

        let state = stored.into_state();
        let friday = state.schedule.day(Day::Friday);
        assert!(!friday.enabled);
        assert_eq!(friday.shifts[0].start_time, time(9, 0));
    }

    #[test]
    fn test_day_without_shifts_gets_placeholder() {
        let stored: PersistedState = serde_json::from_value(json!({
            "Saturday": { "enabled": true, "shifts": [] },
            "Sunday": { "enabled": true },
        }))
        .unwrap();

        let state = stored.into_state();
        for day in [Day::Saturday, Day::Sunday] {
            assert_eq!(state.schedule.day(day).shifts, vec![ShiftEntry::default()]);
        }
    }

    #[test]
    fn test_absent_days_are_fresh() {
        let stored: PersistedState = serde_json::from_value(json!({})).unwrap();
        let state = stored.into_state();

        assert_eq!(state, CalculatorState::default());
    }

    #[test]
    fn test_empty_string_times_and_unknown_keys() {
        let stored: PersistedState = serde_json::from_value(json!({
            "Monday": { "shifts": [{ "startTime": "", "endTime": "", "location": "Adamstown" }] },
            "theme": "dark",
        }))
        .unwrap();

        let state = stored.into_state();
        let monday = state.schedule.day(Day::Monday);
        assert!(!monday.enabled);
        assert_eq!(monday.shifts[0].location, Location::Adamstown);
        assert!(!monday.shifts[0].has_any_time());
    }

    #[test]
    fn test_unknown_location_is_rejected() {
        let result: Result<PersistedState, _> = serde_json::from_value(json!({
            "Monday": { "shifts": [{ "startTime": "09:00", "endTime": "10:00", "location": "Newcastle" }] },
        }));
        assert!(result.is_err());
    }
}
