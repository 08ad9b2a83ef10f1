//! Error types for the swap engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during eligibility and premium
//! calculations.

use thiserror::Error;

/// The main error type for the swap engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use swap_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
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

    /// A time range string did not match the `HH:MM-HH:MM` pattern.
    #[error("Invalid time range '{value}': expected HH:MM-HH:MM")]
    InvalidTimeRange {
        /// The malformed time range string.
        value: String,
    },

    /// A shift was invalid or contained inconsistent data.
    #[error("Invalid shift '{shift_id}': {message}")]
    InvalidShift {
        /// The ID of the invalid shift.
        shift_id: String,
        /// A description of what made the shift invalid.
        message: String,
    },

    /// A base location code is not part of the configured base set.
    #[error("Unknown base location: {code}")]
    UnknownBase {
        /// The base code that was not recognized.
        code: String,
    },

    /// A swap request status transition was not permitted.
    #[error("Invalid swap request transition from '{from}' to '{to}'")]
    InvalidTransition {
        /// The current status.
        from: String,
        /// The requested status.
        to: String,
    },

    /// A calendar month reference (year + month number) was not valid.
    #[error("Invalid calendar month: {year}-{month:02}")]
    InvalidMonth {
        /// The requested year.
        year: i32,
        /// The requested month number.
        month: u32,
    },

    /// No pay period was found matching the request.
    #[error("Pay period not found: {message}")]
    PeriodNotFound {
        /// A description of the period that was requested.
        message: String,
    },

    /// A shift store lookup failed for a candidate staff member.
    #[error("Shift lookup failed for staff '{staff_id}': {message}")]
    ShiftLookup {
        /// The staff member whose roster could not be read.
        staff_id: String,
        /// A description of the lookup failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
