//! Error types for the KPI Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while scoring KPIs or resolving
//! commission periods.

use thiserror::Error;

/// The main error type for the KPI Engine.
///
/// All fallible operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use kpi_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/kpi.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/kpi.yaml");
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

    /// The loaded KPI policy is internally inconsistent.
    #[error("Invalid KPI policy: {message}")]
    InvalidPolicy {
        /// A description of what made the policy invalid.
        message: String,
    },

    /// A commission period label was not one of M1 to M5.
    #[error("Invalid commission period '{label}': expected one of M1, M2, M3, M4, M5")]
    InvalidPeriodLabel {
        /// The label that failed to parse.
        label: String,
    },

    /// A year/month pair does not name a calendar month.
    #[error("Invalid month {month} for year {year}: month must be 0-based (0 = January)")]
    InvalidMonth {
        /// The requested year.
        year: i32,
        /// The requested zero-based month.
        month: u32,
    },

    /// Period dates could not be determined from the supplied year/month.
    #[error("Period dates unknown for year '{year}', month '{month}'")]
    PeriodDatesUnknown {
        /// The raw year value.
        year: String,
        /// The raw month value.
        month: String,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
