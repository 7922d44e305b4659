//! Error types for the roster export engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! Only genuinely exceptional conditions are errors: configuration problems
//! and a syntactically invalid export date. Malformed frames, unclassifiable
//! records, and unparseable timestamps are silently dropped by the pipeline
//! and never surface here.

use thiserror::Error;

/// The main error type for the roster export engine.
///
/// # Example
///
/// ```
/// use roster_export::error::RosterError;
///
/// let error = RosterError::ConfigNotFound {
///     path: "/missing/capture.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/capture.yaml");
/// ```
#[derive(Debug, Error)]
pub enum RosterError {
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

    /// The chosen export date was not a valid `YYYY-MM-DD` string.
    #[error("Invalid export date '{input}': expected YYYY-MM-DD")]
    InvalidDate {
        /// The date string that failed to parse.
        input: String,
    },
}

/// A type alias for Results that return RosterError.
pub type RosterResult<T> = Result<T, RosterError>;
