//! Structured logging facility for Lighthouse
//!
//! This module provides:
//! - Single initialization point via `init(profile)`
//! - The `log_sp_error!` macro, which spins an error and logs the disclosed layer
//! - Test capture mode for deterministic assertions
//!
//! # Usage
//!
//! ```rust
//! use lighthouse_core::logging_facility::{init, Profile};
//!
//! // Initialize once at application startup
//! init(Profile::Development);
//! ```

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
