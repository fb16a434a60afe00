//! Free-text report header details.

use serde::{Deserialize, Serialize};

/// The employee and closing-cash details printed on a wages report.
///
/// None of these take part in the calculation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReportDetails {
    /// The report date as entered.
    pub date: String,
    /// Employee name.
    pub employee_name: String,
    /// Employee address.
    pub employee_address: String,
    /// What the other expenses were for.
    pub expense_explanation: String,
    /// Day the closing cash was pouched.
    pub pouch_day: String,
    /// Date the closing cash was pouched.
    pub pouch_date: String,
}

fn or_default<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() { fallback } else { value }
}

impl ReportDetails {
    /// The date, or "N/A" when empty.
    pub fn date_or_default(&self) -> &str {
        or_default(&self.date, "N/A")
    }

    /// The employee name, or "Unknown" when empty.
    pub fn employee_name_or_default(&self) -> &str {
        or_default(&self.employee_name, "Unknown")
    }

    /// The employee address, or "N/A" when empty.
    pub fn employee_address_or_default(&self) -> &str {
        or_default(&self.employee_address, "N/A")
    }

    /// The expense explanation, or a stock sentence when empty.
    pub fn expense_explanation_or_default(&self) -> &str {
        or_default(&self.expense_explanation, "No additional expenses.")
    }

    /// The pouch day, or "N/A" when empty.
    pub fn pouch_day_or_default(&self) -> &str {
        or_default(&self.pouch_day, "N/A")
    }

    /// The pouch date, or "N/A" when empty.
    pub fn pouch_date_or_default(&self) -> &str {
        or_default(&self.pouch_date, "N/A")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_details_fall_back_and_whitespace_is_kept() {
        let details = ReportDetails {
            employee_address: "   ".to_string(),
            ..Default::default()
        };
        assert_eq!(details.date_or_default(), "N/A");
        assert_eq!(details.employee_name_or_default(), "Unknown");
        assert_eq!(details.employee_address_or_default(), "   ");
        assert_eq!(
            details.expense_explanation_or_default(),
            "No additional expenses."
        );
        assert_eq!(details.pouch_day_or_default(), "N/A");
        assert_eq!(details.pouch_date_or_default(), "N/A");
    }

    #[test]
    fn test_filled_details_are_kept() {
        let details = ReportDetails {
            employee_name: "Sam Lee".to_string(),
            date: "2026-03-02".to_string(),
            ..Default::default()
        };
        assert_eq!(details.employee_name_or_default(), "Sam Lee");
        assert_eq!(details.date_or_default(), "2026-03-02");
    }

    #[test]
    fn test_missing_fields_deserialize_as_blank() {
        let details: ReportDetails =
            serde_json::from_str(r#"{"employeeName": "Sam Lee"}"#).unwrap();
        assert_eq!(details.employee_name, "Sam Lee");
        assert!(details.pouch_day.is_empty());
    }
}
