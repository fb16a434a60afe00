//! Configuration types for the wage calculator.
//!
//! This module contains the strongly-typed structures deserialized from
//! `calculator.yaml`. Every section and field has a built-in default, so a
//! partial file only overrides what it names.

use std::net::SocketAddr;
use std::path::PathBuf;

use serde::Deserialize;

/// Branding and fixed wording printed on the wages report.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ReportBranding {
    /// Organisation the report is prepared for.
    pub organisation: String,
    /// Title printed at the top of the first page.
    pub title: String,
    /// Title printed at the top of the notes page.
    pub notes_title: String,
    /// Version text printed in the page footer.
    pub version: String,
    /// Footer text printed before the version on every page.
    pub footer: String,
    /// Sentence closing the cash reconciliation.
    pub closing_note: String,
}

impl Default for ReportBranding {
    fn default() -> Self {
        Self {
            organisation: "EzyMart".to_string(),
            title: "EzyMart Wages Report".to_string(),
            notes_title: "Additional Notes".to_string(),
            version: "1.1.3V".to_string(),
            footer: "Wages Calculator".to_string(),
            closing_note:
                "The remaining amount has been left in the usual place for Gosford's closing money."
                    .to_string(),
        }
    }
}

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address the server listens on.
    pub bind_address: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: SocketAddr::from(([127, 0, 0, 1], 3000)),
        }
    }
}

/// Where the calculator form is persisted between sessions.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StateConfig {
    /// Path of the JSON state file.
    pub path: PathBuf,
}

impl Default for StateConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("data/calculator-state.json"),
        }
    }
}

/// The complete calculator configuration.
///
/// # Example
///
/// ```
/// use wage_calculator::config::CalculatorConfig;
///
/// let config: CalculatorConfig = serde_yaml::from_str("currency_symbol: \"A$\"").unwrap();
/// assert_eq!(config.currency_symbol, "A$");
/// assert_eq!(config.report.title, "EzyMart Wages Report");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Prefix printed before every money amount.
    pub currency_symbol: String,
    /// Report branding.
    pub report: ReportBranding,
    /// HTTP server settings.
    pub server: ServerConfig,
    /// State persistence settings.
    pub state: StateConfig,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            currency_symbol: "$".to_string(),
            report: ReportBranding::default(),
            server: ServerConfig::default(),
            state: StateConfig::default(),
        }
    }
}
