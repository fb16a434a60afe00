//! The on-screen result summary and the number formatting it shares with the
//! report document.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use crate::models::{ReportDetails, Totals};

/// Rounds to two places, half away from zero, without a negative zero.
fn two_places(value: Decimal) -> Decimal {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    if rounded.is_zero() { Decimal::ZERO } else { rounded }
}

/// Formats a money amount: the currency prefix, then the signed amount to
/// two decimal places.
///
/// # Example
///
/// ```
/// use wage_calculator::report::format_money;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_money(Decimal::new(12345, 3), "$"), "$12.35");
/// assert_eq!(format_money(Decimal::from(-5), "$"), "$-5.00");
/// ```
pub fn format_money(amount: Decimal, currency: &str) -> String {
    format!("{currency}{:.2}", two_places(amount))
}

/// Formats hours to two decimal places.
pub fn format_hours(hours: Decimal) -> String {
    format!("{:.2}", two_places(hours))
}

/// One label/value row of the result summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryLine {
    /// The row label.
    pub label: &'static str,
    /// The formatted value.
    pub value: String,
}

impl SummaryLine {
    fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
        }
    }
}

/// Builds the result summary shown after a calculation, in display order.
///
/// Header fields are shown as typed. Hours carry no currency prefix.
pub fn summary_lines(details: &ReportDetails, totals: &Totals, currency: &str) -> Vec<SummaryLine> {
    let money = |amount| format_money(amount, currency);

    vec![
        SummaryLine::new("Date", details.date.as_str()),
        SummaryLine::new("Employee Name", details.employee_name.as_str()),
        SummaryLine::new("Employee Address", details.employee_address.as_str()),
        SummaryLine::new("Total Hours Worked", format_hours(totals.total_hours)),
        SummaryLine::new("Fuel Cost", money(totals.total_fuel_cost)),
        SummaryLine::new("Other Expenses", money(totals.other_expenses)),
        SummaryLine::new(
            "Grand Total Wages (Before Transfer)",
            money(totals.wages_before_reconciliation),
        ),
        SummaryLine::new("Transferred Amount", money(totals.transferred)),
        SummaryLine::new(
            "Grand Total Wages (After Transfer)",
            money(totals.wages_after_reconciliation),
        ),
        SummaryLine::new("Closing Amount", money(totals.closing_amount)),
        SummaryLine::new("Wages Left Over", money(totals.leftover)),
    ]
}
