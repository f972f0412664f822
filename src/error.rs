//! Error types for the pension bridge engine.
//!
//! Formula functions never fail: ineligibility is reported through result
//! values. The errors below only arise while loading configuration or
//! validating an incoming request.

use thiserror::Error;

/// The main error type for the pension bridge engine.
///
/// # Example
///
/// ```
/// use pension_bridge::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/regions.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/regions.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed or failed validation.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A request field was missing or inconsistent.
    #[error("Invalid input field '{field}': {message}")]
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
