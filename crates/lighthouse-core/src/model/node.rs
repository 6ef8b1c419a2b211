use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use lighthouse_core_types::lang;
use serde_json::Value;

use crate::errors::Result;
use crate::level::Level;
use crate::model::{source, Cause, Identity, Sample};

/// One finalized layer of diagnostic context, possibly wrapping older layers
///
/// A value of this type is always finalized: description and English message
/// are present, identity and timestamp are computed. The only way to get one
/// is through finalization (`SpError::new`, a wrap, a registry lookup or JSON
/// decoding).
///
/// Layers are stacked outer-to-inner: the value you hold is the most recently
/// wrapped (least sensitive) layer and `underlying()` leads towards the root
/// cause.
#[derive(Debug, Clone)]
pub struct SpError {
    pub(crate) messages: BTreeMap<String, String>,
    pub(crate) description: String,
    pub(crate) hint: String,
    pub(crate) source: String,

    pub(crate) identity: Identity,
    pub(crate) http_code: u16,
    pub(crate) level: Level,
    pub(crate) timestamp: DateTime<Utc>,

    pub(crate) cause: Option<Cause>,
    pub(crate) meta: BTreeMap<String, Value>,

    /// Layers still reachable below this one; -1 once exhausted by `pop`
    pub(crate) remaining: i64,
    pub(crate) underlying: Option<Box<SpError>>,
}

impl SpError {
    /// Finalize a sample into an error layer
    ///
    /// The sample's maps are moved into the new layer, so nothing the caller
    /// still holds aliases it. `source` is the caller's location.
    ///
    /// # Errors
    ///
    /// Returns `LighthouseError::EmptyError` if the description or the
    /// English message is empty.
    #[track_caller]
    pub fn new(sample: Sample) -> Result<Self> {
        Self::finalize(sample, source::caller())
    }

    pub(crate) fn finalize(sample: Sample, source: String) -> Result<Self> {
        sample.validate()?;
        Ok(Self::build(sample, source))
    }

    /// Finalize content already known to be valid
    pub(crate) fn build(sample: Sample, source: String) -> Self {
        let identity = sample.identity();
        let Sample {
            messages,
            description,
            hint,
            http_code,
            level,
            cause,
            meta,
        } = sample;

        Self {
            messages,
            description,
            hint,
            source,
            identity,
            http_code,
            level,
            timestamp: Utc::now(),
            cause,
            meta,
            remaining: 0,
            underlying: None,
        }
    }

    /// Copy of this layer alone, without the layers below it
    pub(crate) fn detached(&self) -> Self {
        Self {
            messages: self.messages.clone(),
            description: self.description.clone(),
            hint: self.hint.clone(),
            source: self.source.clone(),
            identity: self.identity.clone(),
            http_code: self.http_code,
            level: self.level,
            timestamp: self.timestamp,
            cause: self.cause.clone(),
            meta: self.meta.clone(),
            remaining: self.remaining,
            underlying: None,
        }
    }

    /// All localized messages
    pub fn messages(&self) -> &BTreeMap<String, String> {
        &self.messages
    }

    /// Message for the given language code, if present
    pub fn message(&self, lang: &str) -> Option<&str> {
        self.messages.get(lang).map(String::as_str)
    }

    /// Message for the given language, falling back to English
    pub fn message_or_english(&self, lang: &str) -> &str {
        self.message(lang)
            .or_else(|| self.message(lang::REQUIRED))
            .unwrap_or_default()
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn hint(&self) -> &str {
        &self.hint
    }

    /// "absolute-file-path:line" where the layer was created
    pub fn source(&self) -> &str {
        &self.source
    }

    /// HTTP status code, 0 when unset
    pub fn http_code(&self) -> u16 {
        self.http_code
    }

    pub fn level(&self) -> Level {
        self.level
    }

    /// When the layer was finalized
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    /// External error this layer attributes the failure to
    pub fn cause(&self) -> Option<&Cause> {
        self.cause.as_ref()
    }

    /// Metadata value for the given key
    pub fn meta(&self, key: &str) -> Option<&Value> {
        self.meta.get(key)
    }

    /// Copy of all metadata; changing it does not touch the error
    pub fn all_meta(&self) -> BTreeMap<String, Value> {
        self.meta.clone()
    }

    /// Add or replace a metadata entry. Identity is unaffected.
    pub fn insert_meta(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.meta.insert(key.into(), value.into());
    }

    /// Layers still reachable below this one (-1 once exhausted)
    pub fn remaining(&self) -> i64 {
        self.remaining
    }

    /// Next older layer, if any
    pub fn underlying(&self) -> Option<&SpError> {
        self.underlying.as_deref()
    }

    /// Number of linked layers, this one included
    pub fn depth(&self) -> usize {
        self.layers().count()
    }
}

impl fmt::Display for SpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.description, self.hint)
    }
}

impl std::error::Error for SpError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.underlying {
            Some(underlying) => Some(underlying.as_ref()),
            None => self
                .cause
                .as_deref()
                .map(|cause| cause as &(dyn std::error::Error + 'static)),
        }
    }
}
