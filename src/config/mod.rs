//! Configuration loading and management for the wage calculator.
//!
//! This module loads `calculator.yaml`: the currency prefix, report
//! branding, the HTTP bind address and where persisted state is kept.
//!
//! # Example
//!
//! ```no_run
//! use wage_calculator::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config").unwrap();
//! println!("Report title: {}", config.report().title);
//! ```

mod loader;
mod types;

pub use loader::{CONFIG_FILE_NAME, ConfigLoader};
pub use types::{CalculatorConfig, ReportBranding, ServerConfig, StateConfig};
