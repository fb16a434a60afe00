//! Weekday names used to key a week of shifts.

use std::fmt;
use std::str::FromStr;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// One of the seven days of a report week.
///
/// Variants are declared in the order the week is displayed and reported,
/// Monday first.
///
/// # Example
///
/// ```
/// use wage_calculator::models::Day;
///
/// let day: Day = "saturday".parse().unwrap();
/// assert_eq!(day, Day::Saturday);
/// assert_eq!(day.to_string(), "Saturday");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Day {
    /// Monday.
    Monday,
    /// Tuesday.
    Tuesday,
    /// Wednesday.
    Wednesday,
    /// Thursday.
    Thursday,
    /// Friday.
    Friday,
    /// Saturday.
    Saturday,
    /// Sunday.
    Sunday,
}

impl Day {
    /// All days in report order.
    pub const ALL: [Day; 7] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
        Day::Sunday,
    ];

    /// Position of the day within [`Day::ALL`].
    pub fn index(self) -> usize {
        self.weekday().num_days_from_monday() as usize
    }

    /// The full English name of the day.
    pub fn name(self) -> &'static str {
        match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
            Day::Saturday => "Saturday",
            Day::Sunday => "Sunday",
        }
    }

    /// The equivalent chrono weekday.
    pub fn weekday(self) -> Weekday {
        match self {
            Day::Monday => Weekday::Mon,
            Day::Tuesday => Weekday::Tue,
            Day::Wednesday => Weekday::Wed,
            Day::Thursday => Weekday::Thu,
            Day::Friday => Weekday::Fri,
            Day::Saturday => Weekday::Sat,
            Day::Sunday => Weekday::Sun,
        }
    }
}

impl From<Weekday> for Day {
    fn from(weekday: Weekday) -> Self {
        Day::ALL[weekday.num_days_from_monday() as usize]
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Day {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Day::ALL
            .into_iter()
            .find(|day| day.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| EngineError::UnknownDay {
                name: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_days_are_in_week_order() {
        for (position, day) in Day::ALL.iter().enumerate() {
            assert_eq!(day.index(), position);
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("Monday".parse::<Day>().unwrap(), Day::Monday);
        assert_eq!("SUNDAY".parse::<Day>().unwrap(), Day::Sunday);
        assert_eq!(" friday ".parse::<Day>().unwrap(), Day::Friday);
    }

    #[test]
    fn test_parse_unknown_day_returns_error() {
        match "Funday".parse::<Day>() {
            Err(EngineError::UnknownDay { name }) => assert_eq!(name, "Funday"),
            other => panic!("Expected UnknownDay error, got {:?}", other),
        }
    }

    #[test]
    fn test_from_chrono_weekday() {
        assert_eq!(Day::from(Weekday::Sat), Day::Saturday);
        assert_eq!(Day::from(Weekday::Mon), Day::Monday);
        assert_eq!(Day::Sunday.weekday(), Weekday::Sun);
    }

    #[test]
    fn test_day_serialization_uses_full_name() {
        let json = serde_json::to_string(&Day::Wednesday).unwrap();
        assert_eq!(json, "\"Wednesday\"");

        let deserialized: Day = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, Day::Wednesday);
    }
}
