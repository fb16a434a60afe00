//! Error types for the wage calculator.
//!
//! The computation core never fails: malformed numbers degrade to zero and
//! incomplete shifts are skipped. These errors only arise at the edges of the
//! crate, when loading configuration, reading or writing persisted state,
//! applying edits to a week schedule, or rendering a report document.

use thiserror::Error;

use crate::models::Day;

/// The main error type for the wage calculator.
///
/// # Example
///
/// ```
/// use wage_calculator::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/calculator.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/calculator.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Persisted state could not be read or written.
    #[error("State storage error at '{path}': {message}")]
    StateIo {
        /// The storage location involved.
        path: String,
        /// A description of the I/O failure.
        message: String,
    },

    /// Persisted state did not match the expected shape.
    #[error("Failed to parse persisted state: {message}")]
    StateParse {
        /// A description of the parse error.
        message: String,
    },

    /// A weekday name was not one of the seven known days.
    #[error("Unknown day: {name}")]
    UnknownDay {
        /// The name that was not recognised.
        name: String,
    },

    /// A shift edit referenced an index past the end of the day's shifts.
    #[error("No shift at index {index} on {day}")]
    ShiftIndexOutOfRange {
        /// The day being edited.
        day: Day,
        /// The requested shift index.
        index: usize,
    },

    /// The report document could not be rendered.
    #[error("Report rendering failed: {message}")]
    ReportRender {
        /// A description of the rendering failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
