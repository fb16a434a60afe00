//! HTTP API module for the wage calculator.
//!
//! This module provides the REST endpoints for calculating totals, building
//! the wages report and saving the calculator form between sessions.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CalculationRequest, ReportRequest};
pub use response::{ApiError, CalculationResponse};
pub use state::AppState;
