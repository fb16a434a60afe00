//! Weekday/weekend rate classification.
//!
//! Friday and Saturday shifts are always paid at the weekend rate. A Sunday
//! shift is paid at the weekend rate only if it started before 06:00, which
//! covers a Saturday night shift that runs past midnight. A Sunday shift with
//! no start time is also weekend-rated.

use chrono::{NaiveTime, Timelike};
use rust_decimal::Decimal;

use crate::models::{Day, RateTier};

use super::ParsedRates;

/// Sunday shifts starting before this hour are weekend-rated.
pub const SUNDAY_WEEKEND_CUTOFF_HOUR: u32 = 6;

/// Classifies a shift by its day and start time.
///
/// # Example
///
/// ```
/// use wage_calculator::calculation::classify_rate_tier;
/// use wage_calculator::models::{Day, RateTier};
/// use chrono::NaiveTime;
///
/// let early = NaiveTime::from_hms_opt(5, 59, 0);
/// let late = NaiveTime::from_hms_opt(6, 0, 0);
/// assert_eq!(classify_rate_tier(Day::Sunday, early), RateTier::Weekend);
/// assert_eq!(classify_rate_tier(Day::Sunday, late), RateTier::Weekday);
/// assert_eq!(classify_rate_tier(Day::Friday, late), RateTier::Weekend);
/// ```
pub fn classify_rate_tier(day: Day, start_time: Option<NaiveTime>) -> RateTier {
    match day {
        Day::Friday | Day::Saturday => RateTier::Weekend,
        Day::Sunday
            if start_time.is_none_or(|start| start.hour() < SUNDAY_WEEKEND_CUTOFF_HOUR) =>
        {
            RateTier::Weekend
        }
        _ => RateTier::Weekday,
    }
}

/// Returns the hourly rate that applies to a shift.
///
/// Rates that were left blank or could not be read are already zero in
/// [`ParsedRates`], so this never fails.
pub fn hourly_rate(day: Day, start_time: Option<NaiveTime>, rates: &ParsedRates) -> Decimal {
    rates.rate_for(classify_rate_tier(day, start_time))
}
