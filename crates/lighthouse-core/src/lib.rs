//! Lighthouse Core - structured, severity-aware application errors
//!
//! This crate provides:
//! - Error layers (`SpError`) with localized messages, a content-derived
//!   identity, call-site source and metadata
//! - Chain operations: wrap a failure in more contextual layers, walk it back
//! - Spin: severity-gated disclosure of the most detailed permitted layer
//! - A concurrency-safe registry of canonical errors
//! - Identity and cause comparison
//! - JSON wire format plus CSV/XML export
//! - Logging hooks and the `log_sp_error!` macro on top of `tracing`
//!
//! # Example
//!
//! ```
//! use lighthouse_core::{Level, Registry, Sample, SpError};
//!
//! let registry = Registry::new();
//! let err = SpError::new(
//!     Sample::new("Failed to connect to database")
//!         .with_message("en", "Db connection failed")
//!         .with_level(Level::DeepDebug),
//! )
//! .unwrap()
//! .wrap_new(
//!     Sample::new("Internal Error")
//!         .with_message("en", "Something went wrong")
//!         .with_level(Level::HighDebug),
//! )
//! .unwrap();
//!
//! let shown = err.spin(Level::HighDebug, &registry).unwrap();
//! assert_eq!(shown.description(), "Internal Error");
//! let logged = err.spin(Level::DeepDebug, &registry).unwrap();
//! assert_eq!(logged.description(), "Failed to connect to database");
//! ```

pub mod chain;
pub mod compare;
pub mod config;
pub mod errors;
pub mod export;
pub mod helpers;
pub mod hooks;
pub mod level;
pub mod logging_facility;
pub mod model;
pub mod registry;

// Re-export commonly used types
pub use chain::Layers;
pub use config::LighthouseConfig;
pub use errors::{LighthouseError, RequiredField, Result, WrapError};
pub use export::{export, ExportFormat, ExportRow};
pub use hooks::LogAttributes;
pub use level::Level;
pub use model::{Cause, Identity, Sample, SpError};
pub use registry::{Canonical, Registry};
