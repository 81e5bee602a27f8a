//! Error types for the Overtime Engine.
//!
//! The aggregation core never fails; these errors come from the layers around
//! it: configuration loading, the attendance source and offline record files.

use thiserror::Error;

/// The main error type for the Overtime Engine.
///
/// # Example
///
/// ```
/// use overtime_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/overtime.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/overtime.yaml");
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

    /// Configuration parsed but a field holds an unusable value.
    #[error("Invalid configuration field '{field}': {message}")]
    InvalidConfig {
        /// The offending field.
        field: String,
        /// Why the value was rejected.
        message: String,
    },

    /// The request to the attendance service could not be completed.
    #[error("Attendance service request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The attendance service answered with a non-success status.
    #[error("Attendance service returned {status} for {url}: {body}")]
    SourceStatus {
        /// The HTTP status code.
        status: u16,
        /// The URL that was requested.
        url: String,
        /// The response body, if any.
        body: String,
    },

    /// An offline records file could not be read or decoded.
    #[error("Failed to load records file '{path}': {message}")]
    RecordsFileError {
        /// The path to the records file.
        path: String,
        /// A description of the failure.
        message: String,
    },

    /// Generic I/O failure (binding a listener, writing output).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
