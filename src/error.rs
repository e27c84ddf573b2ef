//! Error types for the leave pay compliance engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every condition the engine refuses to compute through. Conditions the
//! engine tolerates (unparseable numbers, zero hours, missing comparison
//! data) are reported as statuses on results instead.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the leave pay compliance engine.
///
/// # Example
///
/// ```
/// use nz_leave_pay::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/engine.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/engine.yaml");
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

    /// No minimum wage schedule is effective on the given date.
    #[error("No minimum wage schedule effective on {date}")]
    MinimumWageNotFound {
        /// The date for which the minimum wage was requested.
        date: NaiveDate,
    },

    /// A work pattern value was outside its permitted range.
    #[error("Invalid work pattern field '{field}': {message}")]
    InvalidWorkPattern {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A pay period was missing or its dates were inconsistent.
    #[error("Invalid pay period: {message}")]
    InvalidPayPeriod {
        /// A description of what made the pay period invalid.
        message: String,
    },

    /// Extracted payslip data did not have the expected shape.
    #[error("Invalid payslip field '{field}': {message}")]
    PayslipFormat {
        /// Dotted path of the offending field (`$` for the document itself).
        field: String,
        /// A description of the problem.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
