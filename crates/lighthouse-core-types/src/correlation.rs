//! Correlation identifiers carried in error metadata
//!
//! A request id or trace id attached to an error lets an operator connect the
//! rendered error (API response, log line, alert) back to the request that
//! produced it.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! correlation_id {
    ($(#[$doc:meta])* $name:ident, $meta_key:expr) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Metadata key under which this id is stored on an error
            pub const META_KEY: &'static str = $meta_key;

            /// Generate a fresh id (UUIDv7, time ordered)
            pub fn new() -> Self {
                Self(Uuid::now_v7().to_string())
            }

            /// Get the string representation
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Wrap an id received from elsewhere (header, upstream service)
            pub fn from_string(s: impl Into<String>) -> Self {
                Self(s.into())
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

correlation_id!(
    /// Identifier of the request during which an error occurred
    RequestId,
    crate::schema::FIELD_REQUEST_ID
);

correlation_id!(
    /// Distributed trace identifier, propagated across service boundaries
    TraceId,
    crate::schema::FIELD_TRACE_ID
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_id_generation() {
        let id1 = RequestId::new();
        let id2 = RequestId::new();

        assert_ne!(id1, id2);
        assert!(!id1.as_str().is_empty());
    }

    #[test]
    fn test_trace_id_display_matches_str() {
        let id = TraceId::new();
        assert_eq!(format!("{}", id), id.as_str());
    }

    #[test]
    fn test_meta_keys() {
        assert_eq!(RequestId::META_KEY, "request_id");
        assert_eq!(TraceId::META_KEY, "trace_id");
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let id = TraceId::from_string("abc-123");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"abc-123\"");

        let back: TraceId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
