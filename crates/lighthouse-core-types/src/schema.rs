//! Canonical schema constants for structured logging and error metadata
//!
//! These constants keep log field names and reserved metadata keys
//! consistent between the core, the logging hooks and their consumers.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_REQUEST_ID: &str = "request_id";
pub const FIELD_TRACE_ID: &str = "trace_id";

// Error projection fields
pub const FIELD_DESC: &str = "desc";
pub const FIELD_HINT: &str = "hint";
pub const FIELD_SOURCE: &str = "source";
pub const FIELD_ERR_TIME: &str = "err_time";
pub const FIELD_IDENTITY: &str = "identity";
pub const FIELD_LEVEL: &str = "level";
pub const FIELD_HTTP_CODE: &str = "http_code";
pub const FIELD_TRACE: &str = "trace";

/// Prefix for error metadata entries projected into log fields
pub const META_PREFIX: &str = "meta.";

/// Timestamp layout used for `err_time`
pub const ERR_TIME_FORMAT: &str = "%Y.%m.%d %H:%M:%S";

// Reserved metadata keys on diagnostic errors
/// Carries the rejected sample on a validation-failure error
pub const META_SPERROR: &str = "sperror";
/// Carries the requested identity on a lookup-miss error
pub const META_HASH: &str = "hash";
