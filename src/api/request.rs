//! Request types for the wage calculator API.
//!
//! This module defines the JSON request bodies for the `/calculate` and
//! `/report` endpoints. `PUT /state` takes a
//! [`PersistedState`](crate::persistence::PersistedState) directly.

use serde::{Deserialize, Serialize};

use crate::models::{DaySchedule, RatesAndExpenses, ReportDetails, WeekSchedule};

/// Request body for the `/calculate` endpoint.
///
/// Days may be sent in any order and may be left out. They are placed in
/// week order before calculating; a day sent twice keeps its last entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// The days of the week with their shifts.
    #[serde(default)]
    pub days: Vec<DaySchedule>,
    /// Rates and expenses as typed.
    #[serde(default)]
    pub rates: RatesAndExpenses,
    /// Header details for the summary view.
    #[serde(default)]
    pub details: ReportDetails,
}

impl CalculationRequest {
    /// The week described by this request.
    pub fn week(&self) -> WeekSchedule {
        WeekSchedule::from_days(self.days.iter().cloned())
    }
}

/// Request body for the `/report` and `/report/pdf` endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportRequest {
    /// Report header details.
    #[serde(default)]
    pub details: ReportDetails,
    /// The days of the week with their shifts.
    #[serde(default)]
    pub days: Vec<DaySchedule>,
    /// Rates and expenses as typed.
    #[serde(default)]
    pub rates: RatesAndExpenses,
}

impl ReportRequest {
    /// The week described by this request.
    pub fn week(&self) -> WeekSchedule {
        WeekSchedule::from_days(self.days.iter().cloned())
    }
}
