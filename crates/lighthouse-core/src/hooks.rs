//! Projection of spun errors into structured log fields

use std::collections::BTreeMap;

use lighthouse_core_types::{lang, schema};
use serde_json::Value;

use crate::level::Level;
use crate::model::SpError;
use crate::registry::Registry;

/// Message language when none is requested
pub const DEFAULT_LANG: &str = lang::REQUIRED;

/// Log fields of the layer an error discloses at some level
#[derive(Debug, Clone, PartialEq)]
pub struct LogAttributes {
    /// Message of the disclosed layer in the requested language, English
    /// when the layer has none in that language
    pub message: String,
    pub desc: String,
    pub hint: String,
    pub source: String,
    /// Finalization time formatted as `%Y.%m.%d %H:%M:%S` (UTC)
    pub err_time: String,
    pub identity: String,
    pub level: Level,
    pub http_code: u16,
    pub meta: BTreeMap<String, Value>,
    /// Sources of every layer the spin walked through, outer first
    pub trace: Vec<String>,
}

impl LogAttributes {
    /// Flattened key/value pairs, metadata keys prefixed with `meta.`
    pub fn fields(&self) -> Vec<(String, String)> {
        let mut fields = vec![
            (schema::FIELD_DESC.to_string(), self.desc.clone()),
            (schema::FIELD_HINT.to_string(), self.hint.clone()),
            (schema::FIELD_SOURCE.to_string(), self.source.clone()),
            (schema::FIELD_ERR_TIME.to_string(), self.err_time.clone()),
            (schema::FIELD_IDENTITY.to_string(), self.identity.clone()),
            (schema::FIELD_LEVEL.to_string(), self.level.to_string()),
        ];
        if self.http_code != 0 {
            fields.push((schema::FIELD_HTTP_CODE.to_string(), self.http_code.to_string()));
        }
        fields.extend(self.meta.iter().map(|(key, value)| {
            let rendered = match value {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            (format!("{}{}", schema::META_PREFIX, key), rendered)
        }));
        fields.push((schema::FIELD_TRACE.to_string(), self.trace.join(" <- ")));
        fields
    }
}

/// Spin `err` at `level` and project the disclosed layer
///
/// `lang` picks the message language, falling back to English. Returns `None` when the spin discloses nothing. When the outermost layer
/// is already above `level`, the projection is of the registry's Internal
/// error and `trace` is empty.
pub fn attributes(
    err: &SpError,
    level: Level,
    registry: &Registry,
    lang: &str,
) -> Option<LogAttributes> {
    let spun = err.spin(level, registry)?;
    Some(LogAttributes {
        message: spun.message_or_english(lang).to_string(),
        desc: spun.description().to_string(),
        hint: spun.hint().to_string(),
        source: spun.source().to_string(),
        err_time: spun.timestamp().format(schema::ERR_TIME_FORMAT).to_string(),
        identity: spun.identity().to_string(),
        level: spun.level(),
        http_code: spun.http_code(),
        meta: spun.all_meta(),
        trace: err.spin_trace(level),
    })
}

/// Emit one `error` event carrying the attributes
///
/// Metadata is emitted as a single `meta` field holding a JSON object.
pub fn emit(attrs: &LogAttributes, component: &str) {
    let meta = serde_json::to_string(&attrs.meta).unwrap_or_default();
    let trace = attrs.trace.join(" <- ");
    tracing::error!(
        component = component,
        op = "log_sp_error",
        desc = attrs.desc.as_str(),
        hint = attrs.hint.as_str(),
        source = attrs.source.as_str(),
        err_time = attrs.err_time.as_str(),
        identity = attrs.identity.as_str(),
        level = attrs.level.as_u8(),
        http_code = attrs.http_code,
        meta = meta.as_str(),
        trace = trace.as_str(),
        "{}",
        attrs.message
    );
}
