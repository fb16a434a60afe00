//! The wages report document.
//!
//! A [`WagesReport`] holds everything printed on the two report pages, with
//! blank header fields already replaced by their defaults. It is rendered to
//! plain text here and to PDF in the `pdf` module.

use std::fmt::Write as _;

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

use crate::calculation::{ParsedRates, shift_breakdown, totals_from_breakdown};
use crate::config::ConfigLoader;
use crate::models::{DaySchedule, RatesAndExpenses, ReportDetails, ShiftEarnings, Totals};

use super::summary::{format_hours, format_money};

/// Column headings of the work schedule table.
pub const SCHEDULE_COLUMNS: [&str; 6] = ["Day", "Start", "End", "Location", "Hours", "Earnings"];

/// Report header: who and when.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportHeader {
    /// Title printed at the top of the first page.
    pub title: String,
    /// Organisation the report is for.
    pub organisation: String,
    /// Report date, or "N/A".
    pub date: String,
    /// Employee name, or "Unknown".
    pub employee_name: String,
    /// Employee address, or "N/A".
    pub employee_address: String,
}

/// Closing cash details printed on the notes page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClosingDetails {
    /// Day the cash was pouched, or "N/A".
    pub pouch_day: String,
    /// Date the cash was pouched, or "N/A".
    pub pouch_date: String,
    /// Closing sentence.
    pub note: String,
}

/// A complete wages report, ready to render.
///
/// # Example
///
/// ```
/// use wage_calculator::config::ConfigLoader;
/// use wage_calculator::models::{RatesAndExpenses, ReportDetails, WeekSchedule};
/// use wage_calculator::report::WagesReport;
///
/// let report = WagesReport::build(
///     &ConfigLoader::default(),
///     &ReportDetails::default(),
///     WeekSchedule::new().days(),
///     &RatesAndExpenses::default(),
/// );
/// assert_eq!(report.header.employee_name, "Unknown");
/// assert_eq!(report.file_name(), "Unknown_WagesReport_N-A.pdf");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WagesReport {
    /// Header fields.
    pub header: ReportHeader,
    /// Currency prefix used when rendering.
    pub currency_symbol: String,
    /// Hourly weekday rate.
    pub weekday_rate: Decimal,
    /// Hourly weekend rate.
    pub weekend_rate: Decimal,
    /// One row per completed shift, in week order.
    pub shifts: Vec<ShiftEarnings>,
    /// Weekly totals.
    pub totals: Totals,
    /// What the other expenses were for.
    pub expense_explanation: String,
    /// Closing cash details.
    pub closing: ClosingDetails,
    /// Title of the notes page.
    pub notes_title: String,
    /// Footer text printed on every page.
    pub footer: String,
}

impl WagesReport {
    /// Assembles a report from the form.
    ///
    /// The table rows and the totals come from one breakdown, so they always
    /// agree.
    pub fn build(
        config: &ConfigLoader,
        details: &ReportDetails,
        days: &[DaySchedule],
        rates: &RatesAndExpenses,
    ) -> Self {
        let branding = config.report();
        let parsed = ParsedRates::parse(rates);
        let shifts = shift_breakdown(days, &parsed);
        let totals = totals_from_breakdown(&shifts, &parsed);

        debug!(
            employee = details.employee_name_or_default(),
            rows = shifts.len(),
            "Built wages report"
        );

        Self {
            header: ReportHeader {
                title: branding.title.clone(),
                organisation: branding.organisation.clone(),
                date: details.date_or_default().to_string(),
                employee_name: details.employee_name_or_default().to_string(),
                employee_address: details.employee_address_or_default().to_string(),
            },
            currency_symbol: config.currency_symbol().to_string(),
            weekday_rate: parsed.weekday_rate,
            weekend_rate: parsed.weekend_rate,
            shifts,
            totals,
            expense_explanation: details.expense_explanation_or_default().to_string(),
            closing: ClosingDetails {
                pouch_day: details.pouch_day_or_default().to_string(),
                pouch_date: details.pouch_date_or_default().to_string(),
                note: branding.closing_note.clone(),
            },
            notes_title: branding.notes_title.clone(),
            footer: format!("{} | Version: {}", branding.footer, branding.version),
        }
    }

    /// The download file name, `{employee}_WagesReport_{date}.pdf`.
    ///
    /// Path separators in either part are replaced with `-`.
    pub fn file_name(&self) -> String {
        let clean = |text: &str| text.replace(['/', '\\'], "-");
        format!(
            "{}_WagesReport_{}.pdf",
            clean(&self.header.employee_name),
            clean(&self.header.date)
        )
    }

    pub(crate) fn money(&self, amount: Decimal) -> String {
        format_money(amount, &self.currency_symbol)
    }

    /// The cells of one schedule table row.
    pub(crate) fn row_cells(&self, row: &ShiftEarnings) -> [String; 6] {
        [
            row.day.to_string(),
            row.start_time.format("%H:%M").to_string(),
            row.end_time.format("%H:%M").to_string(),
            row.location.to_string(),
            format_hours(row.hours),
            self.money(row.earnings),
        ]
    }

    /// Hourly rate lines.
    pub(crate) fn rate_lines(&self) -> [String; 2] {
        [
            format!("Weekday: {}", self.money(self.weekday_rate)),
            format!("Weekend: {}", self.money(self.weekend_rate)),
        ]
    }

    /// Summary lines printed under the schedule table.
    pub(crate) fn summary_lines(&self) -> [String; 3] {
        [
            format!("Total Hours: {}", format_hours(self.totals.total_hours)),
            format!("Fuel Cost: {}", self.money(self.totals.total_fuel_cost)),
            format!("Other Expenses: {}", self.money(self.totals.other_expenses)),
        ]
    }

    /// Financial summary lines printed on the first page.
    pub(crate) fn financial_lines(&self) -> [String; 5] {
        let totals = &self.totals;
        [
            format!(
                "Total Before Transfer: {}",
                self.money(totals.wages_before_reconciliation)
            ),
            format!("Transferred: {}", self.money(totals.transferred)),
            format!(
                "Total After Transfer: {}",
                self.money(totals.wages_after_reconciliation)
            ),
            format!("Closing Amount: {}", self.money(totals.closing_amount)),
            format!("AMOUNT LEFT AFTER SORTING: {}", self.money(totals.leftover)),
        ]
    }

    /// Closing amount lines printed on the notes page.
    pub(crate) fn closing_lines(&self) -> [String; 4] {
        let totals = &self.totals;
        [
            format!(
                "Closing Amount Day and Date: {} ({})",
                self.closing.pouch_day, self.closing.pouch_date
            ),
            format!(
                "Closing Amount: {}. Wages left after transfer: {}.",
                self.money(totals.closing_amount),
                self.money(totals.wages_after_reconciliation)
            ),
            format!(
                "MONEY LEFT AFTER SORTING THE WAGES: {} - {} = {}",
                self.money(totals.closing_amount),
                self.money(totals.wages_after_reconciliation),
                self.money(totals.leftover)
            ),
            self.closing.note.clone(),
        ]
    }

    /// Renders the report as plain text, one page after the other.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        self.write_text(&mut out)
            .map(|()| out)
            .unwrap_or_default()
    }

    fn write_text(&self, out: &mut String) -> std::fmt::Result {
        let rule = "=".repeat(72);

        writeln!(out, "{}", self.header.title)?;
        writeln!(out, "{rule}")?;
        writeln!(out)?;
        writeln!(out, "Employee Information")?;
        writeln!(out, "Date: {}", self.header.date)?;
        writeln!(out, "Employee Name: {}", self.header.employee_name)?;
        writeln!(out, "Address: {}", self.header.employee_address)?;
        writeln!(out)?;
        writeln!(out, "Hourly Rates")?;
        for line in self.rate_lines() {
            writeln!(out, "{line}")?;
        }
        writeln!(out)?;

        writeln!(out, "Work Schedule")?;
        writeln!(
            out,
            "{:<10} {:<6} {:<6} {:<10} {:>6} {:>12}",
            SCHEDULE_COLUMNS[0],
            SCHEDULE_COLUMNS[1],
            SCHEDULE_COLUMNS[2],
            SCHEDULE_COLUMNS[3],
            SCHEDULE_COLUMNS[4],
            SCHEDULE_COLUMNS[5]
        )?;
        for row in &self.shifts {
            let [day, start, end, location, hours, earnings] = self.row_cells(row);
            writeln!(
                out,
                "{day:<10} {start:<6} {end:<6} {location:<10} {hours:>6} {earnings:>12}"
            )?;
        }
        if self.shifts.is_empty() {
            writeln!(out, "(no completed shifts)")?;
        }
        writeln!(out)?;

        writeln!(out, "Summary")?;
        for line in self.summary_lines() {
            writeln!(out, "{line}")?;
        }
        writeln!(out)?;
        writeln!(out, "Financial Summary")?;
        for line in self.financial_lines() {
            writeln!(out, "{line}")?;
        }
        writeln!(out)?;
        writeln!(out, "{}", self.footer)?;
        writeln!(out)?;

        writeln!(out, "{}", self.notes_title)?;
        writeln!(out, "{rule}")?;
        writeln!(out)?;
        writeln!(out, "Expense Explanation")?;
        writeln!(out, "{}", self.expense_explanation)?;
        writeln!(out)?;
        writeln!(out, "Closing Amount Details")?;
        for line in self.closing_lines() {
            writeln!(out, "{line}")?;
        }
        writeln!(out)?;
        writeln!(out, "{}", self.footer)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Day, Location, ShiftEntry, WeekSchedule};
    use chrono::NaiveTime;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn shift(start: (u32, u32), end: (u32, u32), location: Location) -> ShiftEntry {
        ShiftEntry::new(
            NaiveTime::from_hms_opt(start.0, start.1, 0),
            NaiveTime::from_hms_opt(end.0, end.1, 0),
            location,
        )
    }

    fn sample_week() -> WeekSchedule {
        WeekSchedule::from_days(vec![
            DaySchedule {
                day: Day::Monday,
                enabled: true,
                shifts: vec![
                    shift((9, 0), (17, 0), Location::Gosford),
                    ShiftEntry::new(NaiveTime::from_hms_opt(18, 0, 0), None, Location::Gosford),
                ],
            },
            DaySchedule {
                day: Day::Saturday,
                enabled: true,
                shifts: vec![shift((22, 0), (2, 30), Location::Islington)],
            },
        ])
    }

    fn sample_rates() -> RatesAndExpenses {
        RatesAndExpenses {
            weekday_rate: "20".to_string(),
            weekend_rate: "25".to_string(),
            fuel_cost: "10".to_string(),
            others: "5.5".to_string(),
            transferred: "50".to_string(),
            closing_amount: "300".to_string(),
        }
    }

    fn sample_details() -> ReportDetails {
        ReportDetails {
            date: "14/03/2025".to_string(),
            employee_name: "Sam Taylor".to_string(),
            employee_address: "1 Main St".to_string(),
            expense_explanation: "Cleaning supplies".to_string(),
            pouch_day: "Friday".to_string(),
            pouch_date: "14/03/2025".to_string(),
        }
    }

    fn build() -> WagesReport {
        WagesReport::build(
            &ConfigLoader::default(),
            &sample_details(),
            sample_week().days(),
            &sample_rates(),
        )
    }

    #[test]
    fn test_rows_cover_completed_shifts_only() {
        let report = build();
        assert_eq!(report.shifts.len(), 2);
        assert_eq!(report.shifts[0].day, Day::Monday);
        assert_eq!(report.shifts[1].day, Day::Saturday);
        assert_eq!(report.shifts[1].hours, dec("4.5"));
    }

    #[test]
    fn test_totals_agree_with_rows() {
        let report = build();
        let row_earnings: Decimal = report.shifts.iter().map(|r| r.earnings).sum();
        let row_fuel: Decimal = report.shifts.iter().map(|r| r.fuel_cost).sum();

        // 160 + 112.50 wages, 10 fuel, 5.50 others, less 50 transferred.
        assert_eq!(row_earnings, dec("272.5"));
        assert_eq!(row_fuel, report.totals.total_fuel_cost);
        assert_eq!(report.totals.wages_after_reconciliation, dec("238"));
        assert_eq!(report.totals.leftover, dec("62"));
    }

    #[test]
    fn test_blank_details_use_defaults() {
        let report = WagesReport::build(
            &ConfigLoader::default(),
            &ReportDetails::default(),
            WeekSchedule::new().days(),
            &RatesAndExpenses::default(),
        );

        assert_eq!(report.header.date, "N/A");
        assert_eq!(report.header.employee_name, "Unknown");
        assert_eq!(report.header.employee_address, "N/A");
        assert_eq!(report.expense_explanation, "No additional expenses.");
        assert_eq!(report.closing.pouch_day, "N/A");
        assert_eq!(report.closing.pouch_date, "N/A");
        assert!(report.shifts.is_empty());
    }

    #[test]
    fn test_file_name() {
        assert_eq!(build().file_name(), "Sam Taylor_WagesReport_14-03-2025.pdf");
    }

    #[test]
    fn test_render_text_contents() {
        let text = build().render_text();

        assert!(text.starts_with("EzyMart Wages Report\n"));
        assert!(text.contains("Employee Name: Sam Taylor"));
        assert!(text.contains("Weekday: $20.00"));
        assert!(text.contains("Weekend: $25.00"));
        assert!(text.contains("Monday"));
        assert!(text.contains("22:00"));
        assert!(text.contains("02:30"));
        assert!(text.contains("$112.50"));
        assert!(text.contains("Total Hours: 12.50"));
        assert!(text.contains("AMOUNT LEFT AFTER SORTING: $62.00"));
        assert!(text.contains("Cleaning supplies"));
        assert!(text.contains("Closing Amount Day and Date: Friday (14/03/2025)"));
        assert!(text.contains("MONEY LEFT AFTER SORTING THE WAGES: $300.00 - $238.00 = $62.00"));
        assert!(text.contains("Version: 1.1.3V"));
        assert!(!text.contains("18:00"));
    }

    #[test]
    fn test_report_serializes_for_clients() {
        let value = serde_json::to_value(build()).unwrap();
        assert_eq!(value["header"]["employee_name"], "Sam Taylor");
        assert_eq!(value["shifts"].as_array().unwrap().len(), 2);
        let leftover = value["totals"]["leftover"].as_str().map(dec);
        assert_eq!(leftover, Some(dec("62")));
    }
}
