//! Core data models for the wage calculator.
//!
//! This module contains the week of shifts being edited, the rates and
//! header details typed alongside it, and the results derived from them.

mod calculation_result;
mod day;
mod details;
mod rates;
mod schedule;
mod shift;

pub use calculation_result::{RateTier, ShiftEarnings, Totals};
pub use day::Day;
pub use details::ReportDetails;
pub use rates::RatesAndExpenses;
pub use schedule::{DaySchedule, ShiftUpdate, WeekSchedule};
pub use shift::{Location, ShiftEntry, parse_clock_time};
