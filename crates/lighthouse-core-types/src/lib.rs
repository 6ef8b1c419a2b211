//! Core types shared across Lighthouse crates
//!
//! - **Correlation types**: RequestId, TraceId stored in error metadata
//! - **Language codes**: keys of localized error messages
//! - **Schema constants**: log field keys and reserved metadata keys

pub mod correlation;
pub mod lang;
pub mod schema;

pub use correlation::{RequestId, TraceId};
