//! Error types for the leave accrual engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while validating inputs and
//! loading policy configuration.

use thiserror::Error;

/// The main error type for the leave accrual engine.
///
/// Once inputs are parsed into typed dates, the accrual arithmetic itself
/// cannot fail; every variant here is raised at a boundary.
///
/// # Example
///
/// ```
/// use leave_engine::error::EngineError;
///
/// let error = EngineError::InvalidDate {
///     input: "2024-13-01".to_string(),
///     message: "input is out of range".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid date '2024-13-01': input is out of range");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A non-empty date string did not parse as a `YYYY-MM-DD` calendar date.
    #[error("Invalid date '{input}': {message}")]
    InvalidDate {
        /// The rejected input.
        input: String,
        /// A description of the parse failure.
        message: String,
    },

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

    /// A policy value was loaded but is not usable.
    #[error("Invalid policy field '{field}': {message}")]
    InvalidPolicy {
        /// The offending policy field.
        field: String,
        /// Why the value was rejected.
        message: String,
    },

    /// A ledger record supplied by the caller is inconsistent.
    #[error("Invalid ledger entry '{id}': {message}")]
    InvalidLedgerEntry {
        /// The identifier (or date) of the entry.
        id: String,
        /// What made the entry invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
