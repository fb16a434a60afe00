//! Per-shift earnings breakdown.
//!
//! The totals and the report table are both built from [`shift_breakdown`],
//! so a shift is classified the same way wherever it appears.

use rust_decimal::Decimal;

use crate::models::{Day, DaySchedule, ShiftEarnings, ShiftEntry};

use super::{ParsedRates, classify_rate_tier, minutes_to_hours, shift_minutes};

/// Works out the earnings for a single shift.
///
/// Returns `None` for an incomplete shift (either time missing). Fuel cost is
/// charged once for every completed shift at the primary site.
///
/// # Example
///
/// ```
/// use wage_calculator::calculation::{ParsedRates, shift_earnings};
/// use wage_calculator::models::{Day, Location, ShiftEntry};
/// use chrono::NaiveTime;
/// use rust_decimal::Decimal;
///
/// let rates = ParsedRates {
///     weekday_rate: Decimal::from(20),
///     fuel_cost: Decimal::from(10),
///     ..Default::default()
/// };
/// let shift = ShiftEntry::new(
///     NaiveTime::from_hms_opt(9, 0, 0),
///     NaiveTime::from_hms_opt(17, 0, 0),
///     Location::Gosford,
/// );
///
/// let row = shift_earnings(Day::Monday, 0, &shift, &rates).unwrap();
/// assert_eq!(row.hours, Decimal::from(8));
/// assert_eq!(row.earnings, Decimal::from(160));
/// assert_eq!(row.fuel_cost, Decimal::from(10));
///
/// assert!(shift_earnings(Day::Monday, 0, &ShiftEntry::default(), &rates).is_none());
/// ```
pub fn shift_earnings(
    day: Day,
    index: usize,
    shift: &ShiftEntry,
    rates: &ParsedRates,
) -> Option<ShiftEarnings> {
    let (start_time, end_time) = (shift.start_time?, shift.end_time?);

    let minutes = shift_minutes(Some(start_time), Some(end_time));
    let rate_tier = classify_rate_tier(day, Some(start_time));
    let rate = rates.rate_for(rate_tier);
    let earnings = rate.saturating_mul(Decimal::from(minutes)) / Decimal::from(60);
    let fuel_cost = if shift.location.is_primary() {
        rates.fuel_cost
    } else {
        Decimal::ZERO
    };

    Some(ShiftEarnings {
        day,
        index,
        start_time,
        end_time,
        location: shift.location,
        minutes,
        hours: minutes_to_hours(minutes),
        rate_tier,
        rate,
        earnings,
        fuel_cost,
    })
}

/// Works out the earnings for every completed shift, in week order.
///
/// Days are visited in the order given and shifts in entry order. The
/// `enabled` flag is not consulted; a disabled day only ever holds empty
/// shifts.
pub fn shift_breakdown(days: &[DaySchedule], rates: &ParsedRates) -> Vec<ShiftEarnings> {
    days.iter()
        .flat_map(|schedule| {
            schedule
                .shifts
                .iter()
                .enumerate()
                .filter_map(|(index, shift)| shift_earnings(schedule.day, index, shift, rates))
        })
        .collect()
}
