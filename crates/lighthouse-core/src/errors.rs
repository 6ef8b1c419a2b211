use thiserror::Error;

use crate::model::SpError;

/// Result type alias using LighthouseError
pub type Result<T> = std::result::Result<T, LighthouseError>;

/// Required field of an error sample
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredField {
    Description,
    EnglishMessage,
}

impl std::fmt::Display for RequiredField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RequiredField::Description => f.write_str("description"),
            RequiredField::EnglishMessage => f.write_str("english message"),
        }
    }
}

/// Failures of the Lighthouse core itself
///
/// These are distinct from `SpError` values, which describe failures of the
/// application using Lighthouse.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LighthouseError {
    /// Finalization attempted without a description or English message
    #[error("Empty error: {field} must not be empty, an empty error may cause misunderstandings")]
    EmptyError { field: RequiredField },

    /// Integer does not name a severity level
    #[error("Unknown severity level: {value}")]
    UnknownLevel { value: String },

    /// JSON encoding or decoding failed
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// CSV or XML export failed
    #[error("Export error ({format}): {message}")]
    Export { format: String, message: String },

    /// Configuration could not be loaded or is invalid
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Reading a file failed
    #[error("I/O error: {message}")]
    Io { message: String },
}

impl LighthouseError {
    /// Get the stable error code for this failure
    pub fn code(&self) -> &'static str {
        match self {
            LighthouseError::EmptyError { .. } => "ERR_EMPTY_ERROR",
            LighthouseError::UnknownLevel { .. } => "ERR_UNKNOWN_LEVEL",
            LighthouseError::Serialization { .. } => "ERR_SERIALIZATION",
            LighthouseError::Export { .. } => "ERR_EXPORT",
            LighthouseError::Config { .. } => "ERR_CONFIG",
            LighthouseError::Io { .. } => "ERR_IO",
        }
    }
}

impl From<serde_json::Error> for LighthouseError {
    fn from(err: serde_json::Error) -> Self {
        LighthouseError::Serialization {
            message: err.to_string(),
        }
    }
}

impl From<csv::Error> for LighthouseError {
    fn from(err: csv::Error) -> Self {
        LighthouseError::Export {
            format: "csv".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for LighthouseError {
    fn from(err: toml::de::Error) -> Self {
        LighthouseError::Config {
            message: err.to_string(),
        }
    }
}

impl From<std::io::Error> for LighthouseError {
    fn from(err: std::io::Error) -> Self {
        LighthouseError::Io {
            message: err.to_string(),
        }
    }
}

/// `wrap_new` could not finalize the outer layer
///
/// The chain head that was passed in is handed back untouched.
#[derive(Error, Debug)]
#[error("cannot wrap error chain: {reason}")]
pub struct WrapError {
    head: Box<SpError>,
    #[source]
    reason: LighthouseError,
}

impl WrapError {
    pub(crate) fn new(head: SpError, reason: LighthouseError) -> Self {
        Self {
            head: Box::new(head),
            reason,
        }
    }

    /// Why the outer layer was rejected
    pub fn reason(&self) -> &LighthouseError {
        &self.reason
    }

    /// Recover the chain head that was being wrapped
    pub fn into_head(self) -> SpError {
        *self.head
    }
}
