use std::collections::BTreeMap;
use std::sync::Arc;

use lighthouse_core_types::{lang, RequestId, TraceId};
use serde_json::{json, Value};

use crate::errors::{LighthouseError, RequiredField, Result};
use crate::level::Level;
use crate::model::Identity;

/// Externally originating error an error layer attributes the failure to
pub type Cause = Arc<dyn std::error::Error + Send + Sync + 'static>;

/// Unfinalized content of one error layer
///
/// A sample is plain data: it has no identity, timestamp or source yet.
/// `SpError::new` (or a wrap) turns it into a finalized layer.
///
/// # Example
///
/// ```
/// use lighthouse_core::{Level, Sample, SpError};
///
/// let err = SpError::new(
///     Sample::new("Failed to connect to database")
///         .with_message("en", "Database unavailable")
///         .with_hint("Check the connection string")
///         .with_level(Level::DeepDebug),
/// )
/// .unwrap();
/// assert_eq!(err.level(), Level::DeepDebug);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Sample {
    /// Language code to localized summary
    pub messages: BTreeMap<String, String>,
    /// Canonical technical description
    pub description: String,
    /// How to resolve
    pub hint: String,
    /// HTTP classification, 0 when unset
    pub http_code: u16,
    pub level: Level,
    pub cause: Option<Cause>,
    /// Contextual data (ids, trace identifiers)
    pub meta: BTreeMap<String, Value>,
}

impl Sample {
    /// Create a sample with the given description
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            ..Self::default()
        }
    }

    /// Add a localized message
    pub fn with_message(mut self, lang: impl Into<String>, message: impl Into<String>) -> Self {
        self.messages.insert(lang.into(), message.into());
        self
    }

    /// Add the resolution hint
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = hint.into();
        self
    }

    /// Add the HTTP status code
    pub fn with_http_code(mut self, code: u16) -> Self {
        self.http_code = code;
        self
    }

    /// Set the severity level
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Attribute the failure to an external error
    pub fn with_cause<E>(mut self, cause: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        self.cause = Some(Arc::new(cause));
        self
    }

    /// Attribute the failure to an already shared external error
    pub fn with_shared_cause(mut self, cause: Cause) -> Self {
        self.cause = Some(cause);
        self
    }

    /// Add a metadata entry
    pub fn with_meta(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.meta.insert(key.into(), value.into());
        self
    }

    /// Add request id context
    pub fn with_request_id(self, request_id: &RequestId) -> Self {
        self.with_meta(RequestId::META_KEY, request_id.as_str())
    }

    /// Add trace id context
    pub fn with_trace_id(self, trace_id: &TraceId) -> Self {
        self.with_meta(TraceId::META_KEY, trace_id.as_str())
    }

    /// English message, empty when absent
    pub fn english_message(&self) -> &str {
        self.messages
            .get(lang::REQUIRED)
            .map(String::as_str)
            .unwrap_or_default()
    }

    /// Identity the finalized layer would get
    pub fn identity(&self) -> Identity {
        Identity::compute(&self.description, &self.hint, self.english_message())
    }

    /// Check the required fields
    ///
    /// # Errors
    ///
    /// Returns `LighthouseError::EmptyError` when the description or the
    /// English message is empty.
    pub fn validate(&self) -> Result<()> {
        if self.description.is_empty() {
            return Err(LighthouseError::EmptyError {
                field: RequiredField::Description,
            });
        }
        if self.english_message().is_empty() {
            return Err(LighthouseError::EmptyError {
                field: RequiredField::EnglishMessage,
            });
        }
        Ok(())
    }

    /// JSON projection of the sample, used to carry a rejected sample in metadata
    pub fn to_value(&self) -> Value {
        json!({
            "messages": self.messages,
            "description": self.description,
            "hint": self.hint,
            "http_code": self.http_code,
            "level": self.level.as_u8(),
            "cause": self.cause.as_ref().map(|c| c.to_string()),
            "meta": self.meta,
        })
    }
}
