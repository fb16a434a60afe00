//! Lenient parsing of money amounts typed into the form.
//!
//! Parsing never fails. The longest leading number in the text is used and
//! anything without one reads as zero, so `"12.5 dollars"` is `12.5` and
//! `"n/a"` is `0`.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{RateTier, RatesAndExpenses};

/// Most significant digits a parsed amount keeps.
const MAX_DIGITS: usize = 28;

/// Parses the leading decimal number of `text`, or zero if there is none.
///
/// Accepts an optional sign, digits with an optional fractional part, and an
/// optional exponent. Values with more than 28 integer digits clamp to
/// [`Decimal::MAX`] or [`Decimal::MIN`]; values too small to represent read
/// as zero. Negative amounts are kept as they are.
///
/// # Examples
///
/// ```
/// use wage_calculator::calculation::parse_amount;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(parse_amount("25.50"), Decimal::from_str("25.50").unwrap());
/// assert_eq!(parse_amount("  -4"), Decimal::from(-4));
/// assert_eq!(parse_amount("12abc"), Decimal::from(12));
/// assert_eq!(parse_amount(""), Decimal::ZERO);
/// assert_eq!(parse_amount("abc"), Decimal::ZERO);
/// ```
pub fn parse_amount(text: &str) -> Decimal {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let mut pos = 0;

    let negative = match bytes.first() {
        Some(b'-') => {
            pos = 1;
            true
        }
        Some(b'+') => {
            pos = 1;
            false
        }
        _ => false,
    };

    let int_start = pos;
    pos = skip_digits(bytes, pos);
    let int_digits = &text[int_start..pos];

    let mut frac_digits = "";
    if bytes.get(pos) == Some(&b'.') {
        let frac_start = pos + 1;
        pos = skip_digits(bytes, frac_start);
        frac_digits = &text[frac_start..pos];
    }

    if int_digits.is_empty() && frac_digits.is_empty() {
        return Decimal::ZERO;
    }

    let mut exponent: i64 = 0;
    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        let mut end = pos + 1;
        let exponent_negative = match bytes.get(end) {
            Some(b'-') => {
                end += 1;
                true
            }
            Some(b'+') => {
                end += 1;
                false
            }
            _ => false,
        };
        let digits_start = end;
        end = skip_digits(bytes, end);
        if end > digits_start {
            let magnitude = text[digits_start..end].parse::<i64>().unwrap_or(i64::MAX);
            exponent = if exponent_negative { -magnitude } else { magnitude };
        }
    }

    assemble(negative, int_digits, frac_digits, exponent)
}

/// Builds a decimal from its digit groups, shifting the point by `exponent`.
///
/// Anything with more than [`MAX_DIGITS`] integer digits saturates to the
/// largest representable magnitude. Excess fractional digits are truncated.
fn assemble(negative: bool, int_digits: &str, frac_digits: &str, exponent: i64) -> Decimal {
    let digits = format!("{int_digits}{frac_digits}");
    let significant = digits.trim_start_matches('0');
    if significant.is_empty() {
        return Decimal::ZERO;
    }

    // Value is 0.<significant> * 10^point.
    let leading_zeros = (digits.len() - significant.len()) as i64;
    let point = (int_digits.len() as i64)
        .saturating_add(exponent)
        .saturating_sub(leading_zeros);

    if point > MAX_DIGITS as i64 {
        return if negative { Decimal::MIN } else { Decimal::MAX };
    }
    if point <= -(MAX_DIGITS as i64) {
        return Decimal::ZERO;
    }

    let (int_part, mut frac_part) = if point >= significant.len() as i64 {
        let padding = "0".repeat(point as usize - significant.len());
        (format!("{significant}{padding}"), String::new())
    } else if point > 0 {
        let (int_part, frac_part) = significant.split_at(point as usize);
        (int_part.to_string(), frac_part.to_string())
    } else {
        let padding = "0".repeat(point.unsigned_abs() as usize);
        ("0".to_string(), format!("{padding}{significant}"))
    };

    let int_len = if int_part == "0" { 0 } else { int_part.len() };
    frac_part.truncate(MAX_DIGITS - int_len);

    let text = if frac_part.is_empty() {
        format!("{}{}", if negative { "-" } else { "" }, int_part)
    } else {
        format!("{}{}.{}", if negative { "-" } else { "" }, int_part, frac_part)
    };

    Decimal::from_str(&text).unwrap_or(Decimal::ZERO)
}

fn skip_digits(bytes: &[u8], mut pos: usize) -> usize {
    while bytes.get(pos).is_some_and(u8::is_ascii_digit) {
        pos += 1;
    }
    pos
}

/// Rates and expenses with every field parsed to a number.
///
/// # Example
///
/// ```
/// use wage_calculator::calculation::ParsedRates;
/// use wage_calculator::models::{RateTier, RatesAndExpenses};
/// use rust_decimal::Decimal;
///
/// let rates = RatesAndExpenses {
///     weekday_rate: "20".to_string(),
///     weekend_rate: "twenty-five".to_string(),
///     ..Default::default()
/// };
/// let parsed = ParsedRates::parse(&rates);
/// assert_eq!(parsed.rate_for(RateTier::Weekday), Decimal::from(20));
/// assert_eq!(parsed.rate_for(RateTier::Weekend), Decimal::ZERO);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ParsedRates {
    /// Hourly rate for weekday-rated shifts.
    pub weekday_rate: Decimal,
    /// Hourly rate for weekend-rated shifts.
    pub weekend_rate: Decimal,
    /// Fuel cost per completed primary-site shift.
    pub fuel_cost: Decimal,
    /// Other expenses.
    pub others: Decimal,
    /// Amount already transferred.
    pub transferred: Decimal,
    /// Cash counted at close.
    pub closing_amount: Decimal,
}

impl ParsedRates {
    /// Parses every field of the form snapshot with [`parse_amount`].
    pub fn parse(rates: &RatesAndExpenses) -> Self {
        Self {
            weekday_rate: parse_amount(&rates.weekday_rate),
            weekend_rate: parse_amount(&rates.weekend_rate),
            fuel_cost: parse_amount(&rates.fuel_cost),
            others: parse_amount(&rates.others),
            transferred: parse_amount(&rates.transferred),
            closing_amount: parse_amount(&rates.closing_amount),
        }
    }

    /// The hourly rate for a tier.
    pub fn rate_for(&self, tier: RateTier) -> Decimal {
        match tier {
            RateTier::Weekday => self.weekday_rate,
            RateTier::Weekend => self.weekend_rate,
        }
    }
}

impl From<&RatesAndExpenses> for ParsedRates {
    fn from(rates: &RatesAndExpenses) -> Self {
        Self::parse(rates)
    }
}
