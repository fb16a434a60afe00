//! Calculation result models for the wage calculator.
//!
//! This module contains the [`Totals`] record produced by one aggregation
//! call and the per-shift [`ShiftEarnings`] rows the report is built from.

use std::fmt;

use chrono::NaiveTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Day, Location};

/// The pay tier a shift is billed at.
///
/// # Example
///
/// ```
/// use wage_calculator::models::RateTier;
///
/// assert_eq!(RateTier::Weekend.to_string(), "Weekend");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RateTier {
    /// Billed at the weekday rate.
    Weekday,
    /// Billed at the weekend rate.
    Weekend,
}

impl fmt::Display for RateTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RateTier::Weekday => write!(f, "Weekday"),
            RateTier::Weekend => write!(f, "Weekend"),
        }
    }
}

/// The earnings worked out for one completed shift.
///
/// Both the totals and the report table are derived from these rows, so the
/// two can never disagree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftEarnings {
    /// The day the shift was entered on.
    pub day: Day,
    /// Position of the shift within its day.
    pub index: usize,
    /// Start time.
    pub start_time: NaiveTime,
    /// End time, possibly on the following calendar day.
    pub end_time: NaiveTime,
    /// Where the shift was worked.
    pub location: Location,
    /// Whole minutes worked.
    pub minutes: i64,
    /// Hours worked.
    pub hours: Decimal,
    /// The tier the shift was billed at.
    pub rate_tier: RateTier,
    /// The hourly rate applied.
    pub rate: Decimal,
    /// `hours * rate`.
    pub earnings: Decimal,
    /// Fuel cost this shift accrued (zero away from the primary site).
    pub fuel_cost: Decimal,
}

/// Aggregated totals for one report.
///
/// Produced fresh by every call to
/// [`compute_totals`](crate::calculation::compute_totals) and never changed
/// afterwards.
///
/// # Example
///
/// ```
/// use wage_calculator::models::Totals;
/// use rust_decimal::Decimal;
///
/// let totals = Totals::default();
/// assert_eq!(totals.total_hours, Decimal::ZERO);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    /// Hours across all completed shifts.
    pub total_hours: Decimal,
    /// Fuel cost across all completed primary-site shifts.
    pub total_fuel_cost: Decimal,
    /// Other expenses as entered.
    pub other_expenses: Decimal,
    /// Wages plus fuel and other expenses, before the transfer is taken off.
    pub wages_before_reconciliation: Decimal,
    /// Amount already transferred.
    pub transferred: Decimal,
    /// Wages plus fuel and other expenses, less the transfer.
    pub wages_after_reconciliation: Decimal,
    /// Cash counted at close.
    pub closing_amount: Decimal,
    /// Closing amount less wages after reconciliation.
    pub leftover: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_rate_tier_serialization() {
        let json = serde_json::to_string(&RateTier::Weekend).unwrap();
        assert_eq!(json, "\"weekend\"");

        let deserialized: RateTier = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, RateTier::Weekend);
    }

    #[test]
    fn test_totals_serialize_decimals_as_strings() {
        let totals = Totals {
            total_hours: dec("8.0"),
            wages_after_reconciliation: dec("120.00"),
            ..Default::default()
        };
        let json = serde_json::to_string(&totals).unwrap();
        assert!(json.contains("\"total_hours\":\"8.0\""));
        assert!(json.contains("\"wages_after_reconciliation\":\"120.00\""));

        let deserialized: Totals = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, totals);
    }
}
