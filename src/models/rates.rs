//! Rates and expenses as typed into the form.
//!
//! Values are kept as the raw text the user entered. Turning them into
//! numbers is the calculation layer's job, where anything unreadable becomes
//! zero.

use serde::{Deserialize, Deserializer, Serialize};

/// Snapshot of the rates and expenses section of the form.
///
/// Accepts either strings or bare numbers for every field when deserialized,
/// so `"25.50"` and `25.5` are both fine.
///
/// # Example
///
/// ```
/// use wage_calculator::models::RatesAndExpenses;
///
/// let rates: RatesAndExpenses = serde_json::from_str(
///     r#"{"weekdayRate": "20", "weekendRate": 25, "taxAmount": "50"}"#,
/// ).unwrap();
/// assert_eq!(rates.weekend_rate, "25");
/// assert_eq!(rates.transferred, "50");
/// assert_eq!(rates.fuel_cost, "");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatesAndExpenses {
    /// Hourly rate for weekday-rated shifts.
    #[serde(default, deserialize_with = "amount_text")]
    pub weekday_rate: String,
    /// Hourly rate for weekend-rated shifts.
    #[serde(default, deserialize_with = "amount_text")]
    pub weekend_rate: String,
    /// Fuel cost charged per completed shift at the primary site.
    #[serde(default, deserialize_with = "amount_text")]
    pub fuel_cost: String,
    /// Other expenses reimbursed with the wages.
    #[serde(default, deserialize_with = "amount_text")]
    pub others: String,
    /// Amount already transferred out of the wages.
    #[serde(default, rename = "taxAmount", deserialize_with = "amount_text")]
    pub transferred: String,
    /// Cash counted in the drawer at close.
    #[serde(default, deserialize_with = "amount_text")]
    pub closing_amount: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TextOrNumber {
    Text(String),
    Number(f64),
}

fn amount_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<TextOrNumber>::deserialize(deserializer)? {
        Some(TextOrNumber::Text(text)) => text,
        Some(TextOrNumber::Number(number)) => number.to_string(),
        None => String::new(),
    })
}
