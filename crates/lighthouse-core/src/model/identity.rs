//! Content identity of an error layer.
//!
//! The identity is a SHA256 digest over `description + hint + messages["en"]`.
//! It deduplicates errors and decides equality; it is not a security
//! primitive.
//!
//! ## Determinism Guarantees
//!
//! - Same description, hint and English message → same identity
//! - Level, HTTP code, metadata, cause and timestamp never take part

use std::fmt;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Hex-encoded SHA256 content digest (64 characters)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identity(String);

impl Identity {
    /// Compute the identity of the given content.
    pub fn compute(description: &str, hint: &str, english_message: &str) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(description.as_bytes());
        hasher.update(hint.as_bytes());
        hasher.update(english_message.as_bytes());
        Self(hex::encode(hasher.finalize()))
    }

    /// Wrap an identity received from elsewhere (logs, exports)
    pub fn from_hex(hex: impl Into<String>) -> Self {
        Self(hex.into())
    }

    /// Get the hex representation
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
