//! Weekly wage calculator for shift workers.
//!
//! This crate turns a week of shift times, pay rates and expenses into hours,
//! earnings, fuel costs and a closing-cash reconciliation, then presents the
//! result as a summary and a two-page wages report. The calculator form can
//! be saved between sessions and served over HTTP.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod persistence;
pub mod report;
