use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::errors::Result;
use crate::level::Level;
use crate::model::{Sample, SpError};

/// Borrowed wire shape; field order is the key order of the JSON object
#[derive(Serialize)]
struct WireRef<'a> {
    messages: &'a BTreeMap<String, String>,
    description: &'a str,
    hint: &'a str,
    source: &'a str,
    #[serde(skip_serializing_if = "is_zero")]
    http_code: u16,
    level: Level,
    #[serde(skip_serializing_if = "is_empty")]
    meta: &'a BTreeMap<String, Value>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct Wire {
    messages: BTreeMap<String, String>,
    description: String,
    hint: String,
    source: String,
    http_code: u16,
    level: Level,
    meta: BTreeMap<String, Value>,
}

fn is_zero(code: &u16) -> bool {
    *code == 0
}

fn is_empty(meta: &&BTreeMap<String, Value>) -> bool {
    meta.is_empty()
}

/// Serializes a single layer; identity, timestamp, cause and the layers
/// below are not part of the wire format.
impl Serialize for SpError {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        WireRef {
            messages: &self.messages,
            description: &self.description,
            hint: &self.hint,
            source: &self.source,
            http_code: self.http_code,
            level: self.level,
            meta: &self.meta,
        }
        .serialize(serializer)
    }
}

/// Decoding finalizes the layer: identity is recomputed from content and the
/// timestamp is the decoding time. `source` is kept as sent.
impl<'de> Deserialize<'de> for SpError {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let wire = Wire::deserialize(deserializer)?;
        let sample = Sample {
            messages: wire.messages,
            description: wire.description,
            hint: wire.hint,
            http_code: wire.http_code,
            level: wire.level,
            cause: None,
            meta: wire.meta,
        };
        SpError::finalize(sample, wire.source).map_err(serde::de::Error::custom)
    }
}

/// Encode one layer as a JSON object
///
/// # Errors
///
/// Returns `LighthouseError::Serialization` if a metadata value cannot be encoded.
pub fn to_json(err: &SpError) -> Result<String> {
    Ok(serde_json::to_string(err)?)
}

/// Decode and finalize one layer
///
/// # Errors
///
/// Returns `LighthouseError::Serialization` on malformed JSON, an unknown
/// level, or an empty description or English message.
pub fn from_json(json: &str) -> Result<SpError> {
    Ok(serde_json::from_str(json)?)
}
