//! Shift model and related types.
//!
//! This module defines [`ShiftEntry`], one worked interval on a day, and the
//! [`Location`] it was worked at.

use std::fmt;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize};

/// A work site a shift can be worked at.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Location {
    /// The primary site. Every completed shift here accrues fuel cost.
    #[default]
    Gosford,
    /// Islington.
    Islington,
    /// Adamstown.
    Adamstown,
}

impl Location {
    /// The site that incurs a fuel-cost charge per completed shift.
    pub const PRIMARY: Location = Location::Gosford;

    /// Every selectable site, in display order.
    pub const ALL: [Location; 3] = [Location::Gosford, Location::Islington, Location::Adamstown];

    /// Returns true if this is the primary site.
    pub fn is_primary(self) -> bool {
        self == Self::PRIMARY
    }

    /// The site name as shown to the user.
    pub fn name(self) -> &'static str {
        match self {
            Location::Gosford => "Gosford",
            Location::Islington => "Islington",
            Location::Adamstown => "Adamstown",
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Represents one worked interval on a day.
///
/// Either time may be absent while the user is still filling in the form.
/// A shift missing either time is incomplete and is ignored by every
/// calculation.
///
/// # Example
///
/// ```
/// use wage_calculator::models::{Location, ShiftEntry};
/// use chrono::NaiveTime;
///
/// let shift = ShiftEntry::new(
///     NaiveTime::from_hms_opt(9, 0, 0),
///     NaiveTime::from_hms_opt(17, 0, 0),
///     Location::Islington,
/// );
/// assert!(shift.is_complete());
/// assert!(!ShiftEntry::default().is_complete());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftEntry {
    /// The clock time the shift started, minute precision.
    #[serde(default, with = "clock_time")]
    pub start_time: Option<NaiveTime>,
    /// The clock time the shift ended, minute precision.
    #[serde(default, with = "clock_time")]
    pub end_time: Option<NaiveTime>,
    /// Where the shift was worked.
    #[serde(default, deserialize_with = "location_or_default")]
    pub location: Location,
}

impl ShiftEntry {
    /// Creates a shift, truncating both times to the minute.
    pub fn new(start_time: Option<NaiveTime>, end_time: Option<NaiveTime>, location: Location) -> Self {
        Self {
            start_time: start_time.map(truncate_to_minute),
            end_time: end_time.map(truncate_to_minute),
            location,
        }
    }

    /// Returns true if both start and end time are present.
    pub fn is_complete(&self) -> bool {
        self.start_time.is_some() && self.end_time.is_some()
    }

    /// Returns true if either time has been filled in.
    pub fn has_any_time(&self) -> bool {
        self.start_time.is_some() || self.end_time.is_some()
    }
}

fn location_or_default<'de, D>(deserializer: D) -> Result<Location, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Location>::deserialize(deserializer)?.unwrap_or_default())
}

pub(crate) fn truncate_to_minute(time: NaiveTime) -> NaiveTime {
    time.with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(time)
}

/// Parses an `HH:MM` (or `HH:MM:SS`) clock value.
///
/// Blank or unreadable input yields `None`, which marks the shift as
/// incomplete rather than failing.
pub fn parse_clock_time(text: &str) -> Option<NaiveTime> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    NaiveTime::parse_from_str(text, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(text, "%H:%M:%S"))
        .ok()
        .map(truncate_to_minute)
}

/// Serde support for optional `HH:MM` clock times.
///
/// Serializes `None` as `null`. On the way in, `null`, a missing field and an
/// empty string all read as `None`.
pub(crate) mod clock_time {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};
    use tracing::warn;

    use super::parse_clock_time;

    pub fn serialize<S>(time: &Option<NaiveTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match time {
            Some(t) => serializer.serialize_str(&t.format("%H:%M").to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().and_then(|text| {
            let parsed = parse_clock_time(text);
            if parsed.is_none() && !text.trim().is_empty() {
                warn!(value = %text, "Ignoring unreadable clock time");
            }
            parsed
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_default_shift_is_empty_placeholder_at_primary_site() {
        let shift = ShiftEntry::default();
        assert_eq!(shift.start_time, None);
        assert_eq!(shift.end_time, None);
        assert_eq!(shift.location, Location::Gosford);
        assert!(shift.location.is_primary());
    }

    #[test]
    fn test_shift_with_one_time_is_incomplete() {
        let shift = ShiftEntry::new(Some(time(9, 0)), None, Location::Gosford);
        assert!(!shift.is_complete());
        assert!(shift.has_any_time());
    }

    #[test]
    fn test_new_truncates_seconds() {
        let shift = ShiftEntry::new(
            NaiveTime::from_hms_opt(9, 15, 42),
            NaiveTime::from_hms_opt(17, 0, 59),
            Location::Adamstown,
        );
        assert_eq!(shift.start_time, Some(time(9, 15)));
        assert_eq!(shift.end_time, Some(time(17, 0)));
    }

    #[test]
    fn test_parse_clock_time_accepts_both_formats() {
        assert_eq!(parse_clock_time("09:30"), Some(time(9, 30)));
        assert_eq!(parse_clock_time("23:05:10"), Some(time(23, 5)));
        assert_eq!(parse_clock_time(""), None);
        assert_eq!(parse_clock_time("   "), None);
        assert_eq!(parse_clock_time("soon"), None);
        assert_eq!(parse_clock_time("25:00"), None);
    }

    #[test]
    fn test_shift_serialization_uses_camel_case_and_hh_mm() {
        let shift = ShiftEntry::new(Some(time(22, 0)), Some(time(6, 0)), Location::Islington);
        let json = serde_json::to_string(&shift).unwrap();
        assert_eq!(
            json,
            r#"{"startTime":"22:00","endTime":"06:00","location":"Islington"}"#
        );

        let deserialized: ShiftEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, shift);
    }

    #[test]
    fn test_shift_deserialization_treats_blank_and_null_as_absent() {
        let json = r#"{"startTime":"","endTime":null,"location":null}"#;
        let shift: ShiftEntry = serde_json::from_str(json).unwrap();
        assert_eq!(shift, ShiftEntry::default());

        let shift: ShiftEntry = serde_json::from_str("{}").unwrap();
        assert_eq!(shift, ShiftEntry::default());
    }

    #[test]
    fn test_unknown_location_is_rejected() {
        let json = r#"{"startTime":"09:00","endTime":"17:00","location":"Newcastle"}"#;
        assert!(serde_json::from_str::<ShiftEntry>(json).is_err());
    }
}
