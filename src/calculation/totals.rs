//! Weekly totals and cash reconciliation.

use rust_decimal::Decimal;
use tracing::debug;

use crate::models::{DaySchedule, RatesAndExpenses, ShiftEarnings, Totals};

use super::{ParsedRates, minutes_to_hours, shift_breakdown};

/// Computes the totals for a week of shifts.
///
/// Pure and total: unreadable amounts are zero, incomplete shifts are
/// skipped and arithmetic saturates instead of overflowing.
///
/// # Example
///
/// ```
/// use wage_calculator::calculation::compute_totals;
/// use wage_calculator::models::{Day, RatesAndExpenses, ShiftUpdate, WeekSchedule};
/// use chrono::NaiveTime;
/// use rust_decimal::Decimal;
///
/// let mut week = WeekSchedule::new();
/// week.toggle_day(Day::Monday, true);
/// week.update_shift(Day::Monday, 0, ShiftUpdate::StartTime(
///     NaiveTime::from_hms_opt(9, 0, 0),
/// )).unwrap();
/// week.update_shift(Day::Monday, 0, ShiftUpdate::EndTime(
///     NaiveTime::from_hms_opt(17, 0, 0),
/// )).unwrap();
///
/// let rates = RatesAndExpenses {
///     weekday_rate: "20".to_string(),
///     weekend_rate: "25".to_string(),
///     fuel_cost: "10".to_string(),
///     transferred: "50".to_string(),
///     closing_amount: "200".to_string(),
///     ..Default::default()
/// };
///
/// let totals = compute_totals(week.days(), &rates);
/// assert_eq!(totals.total_hours, Decimal::from(8));
/// assert_eq!(totals.wages_after_reconciliation, Decimal::from(120));
/// assert_eq!(totals.wages_before_reconciliation, Decimal::from(170));
/// assert_eq!(totals.leftover, Decimal::from(80));
/// ```
pub fn compute_totals(days: &[DaySchedule], rates: &RatesAndExpenses) -> Totals {
    let rates = ParsedRates::parse(rates);
    let breakdown = shift_breakdown(days, &rates);
    totals_from_breakdown(&breakdown, &rates)
}

/// Folds an already computed breakdown into [`Totals`].
///
/// Callers that also need the per-shift rows use this to avoid classifying
/// every shift twice.
pub fn totals_from_breakdown(breakdown: &[ShiftEarnings], rates: &ParsedRates) -> Totals {
    let mut minutes: i64 = 0;
    let mut wages = Decimal::ZERO;
    let mut fuel = Decimal::ZERO;

    for row in breakdown {
        minutes = minutes.saturating_add(row.minutes);
        wages = wages.saturating_add(row.earnings);
        fuel = fuel.saturating_add(row.fuel_cost);
    }

    let wages_after = wages
        .saturating_add(fuel)
        .saturating_add(rates.others)
        .saturating_sub(rates.transferred);
    let wages_before = wages_after.saturating_add(rates.transferred);
    let leftover = rates.closing_amount.saturating_sub(wages_after);

    debug!(
        shifts_count = breakdown.len(),
        total_minutes = minutes,
        wages = %wages,
        fuel = %fuel,
        wages_after = %wages_after,
        leftover = %leftover,
        "Computed weekly totals"
    );

    Totals {
        total_hours: minutes_to_hours(minutes),
        total_fuel_cost: fuel,
        other_expenses: rates.others,
        wages_before_reconciliation: wages_before,
        transferred: rates.transferred,
        wages_after_reconciliation: wages_after,
        closing_amount: rates.closing_amount,
        leftover,
    }
}
