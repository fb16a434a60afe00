//! Shift duration calculation.
//!
//! Shifts are entered as bare clock times, so a shift whose end is earlier in
//! the day than its start is taken to finish on the following day.

use chrono::{NaiveTime, Timelike};
use rust_decimal::Decimal;

/// Minutes in a full day.
pub const MINUTES_PER_DAY: i64 = 24 * 60;

/// Returns the number of whole minutes worked between two clock times.
///
/// Returns `0` if either time is absent. When the end's minute-of-day is
/// strictly earlier than the start's, the end is moved to the next day.
/// Seconds are ignored.
///
/// # Example
///
/// ```
/// use wage_calculator::calculation::shift_minutes;
/// use chrono::NaiveTime;
///
/// let start = NaiveTime::from_hms_opt(22, 0, 0);
/// let end = NaiveTime::from_hms_opt(6, 0, 0);
/// assert_eq!(shift_minutes(start, end), 480);
/// assert_eq!(shift_minutes(start, None), 0);
/// ```
pub fn shift_minutes(start_time: Option<NaiveTime>, end_time: Option<NaiveTime>) -> i64 {
    let (Some(start), Some(end)) = (start_time, end_time) else {
        return 0;
    };

    let start_minutes = minute_of_day(start);
    let mut end_minutes = minute_of_day(end);
    if end_minutes < start_minutes {
        end_minutes += MINUTES_PER_DAY;
    }

    end_minutes - start_minutes
}

/// Returns the hours worked between two clock times as a [`Decimal`].
///
/// See [`shift_minutes`] for the overnight rule.
///
/// # Example
///
/// ```
/// use wage_calculator::calculation::shift_duration;
/// use chrono::NaiveTime;
/// use rust_decimal::Decimal;
///
/// let hours = shift_duration(NaiveTime::from_hms_opt(9, 0, 0), NaiveTime::from_hms_opt(17, 30, 0));
/// assert_eq!(hours, Decimal::new(85, 1)); // 8.5
/// ```
pub fn shift_duration(start_time: Option<NaiveTime>, end_time: Option<NaiveTime>) -> Decimal {
    minutes_to_hours(shift_minutes(start_time, end_time))
}

/// Converts minutes to fractional hours.
pub fn minutes_to_hours(minutes: i64) -> Decimal {
    Decimal::new(minutes, 0) / Decimal::new(60, 0)
}

fn minute_of_day(time: NaiveTime) -> i64 {
    i64::from(time.hour() * 60 + time.minute())
}
