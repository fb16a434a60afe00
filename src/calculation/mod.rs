//! Calculation logic for the wage calculator.
//!
//! This module turns a week of shift entries and a rates snapshot into
//! per-shift earnings and weekly totals: lenient amount parsing, shift
//! duration across midnight, weekday/weekend rate classification, the shared
//! per-shift breakdown and the final cash reconciliation.

mod amount;
mod breakdown;
mod duration;
mod rate_tier;
mod totals;

pub use amount::{ParsedRates, parse_amount};
pub use breakdown::{shift_breakdown, shift_earnings};
pub use duration::{MINUTES_PER_DAY, minutes_to_hours, shift_duration, shift_minutes};
pub use rate_tier::{SUNDAY_WEEKEND_CUTOFF_HOUR, classify_rate_tier, hourly_rate};
pub use totals::{compute_totals, totals_from_breakdown};
