//! Canonical error registry
//!
//! A `Registry` maps identities to canonical errors behind a single
//! read/write lock: lookups run in parallel, a registration excludes every
//! other access for its duration.
//!
//! The registry is an ordinary value. Construct one at startup, share it by
//! reference (or `Arc`) with whatever needs it and drop it at shutdown; tests
//! build their own isolated instances.
//!
//! # Example
//!
//! ```
//! use lighthouse_core::{Canonical, Registry, Sample};
//!
//! let registry = Registry::new();
//! let id = registry
//!     .reg(Some(Sample::new("Quota exceeded").with_message("en", "Too many requests")))
//!     .unwrap();
//!
//! assert_eq!(registry.get(&id).unwrap().description(), "Quota exceeded");
//! assert_eq!(registry.canonical(Canonical::NotFound).http_code(), 404);
//! ```

pub mod canonical;
mod diagnostics;

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::model::{source, Identity, Sample, SpError};

pub use canonical::Canonical;

/// Concurrency-safe store of canonical errors keyed by identity
#[derive(Debug)]
pub struct Registry {
    errs: RwLock<HashMap<Identity, SpError>>,
}

impl Registry {
    /// Create a registry seeded with every [`Canonical`] error
    #[track_caller]
    pub fn new() -> Self {
        let seeded_at = source::caller();
        let errs = Canonical::ALL
            .into_iter()
            .map(|kind| (kind.identity(), kind.build(seeded_at.clone())))
            .collect();
        Self {
            errs: RwLock::new(errs),
        }
    }

    // A panic while holding the lock cannot leave the map half-written
    // (every mutation is a single insert), so poisoning is ignored.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<Identity, SpError>> {
        self.errs.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<Identity, SpError>> {
        self.errs.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Finalize and register an error, returning its identity
    ///
    /// Registering content that is already present keeps the stored entry
    /// and returns the same identity.
    ///
    /// # Errors
    ///
    /// Failures are returned as diagnostic errors, never panics:
    /// - `None` yields a "Nil error provided" error.
    /// - A sample with an empty description or English message yields a
    ///   "Failed to validate error" error whose cause is the validation
    ///   failure and whose `sperror` metadata holds the rejected sample.
    #[track_caller]
    pub fn reg(&self, sample: Option<Sample>) -> Result<Identity, SpError> {
        let caller = source::caller();
        let mut errs = self.write();

        let Some(sample) = sample else {
            tracing::warn!(
                component = module_path!(),
                op = "registry.reg",
                "nil error provided"
            );
            return Err(diagnostics::nil_node(caller));
        };

        if let Err(reason) = sample.validate() {
            tracing::warn!(
                component = module_path!(),
                op = "registry.reg",
                err_code = reason.code(),
                "rejected invalid error"
            );
            return Err(diagnostics::validation_failure(&sample, reason, caller));
        }

        Ok(Self::store(&mut errs, SpError::build(sample, caller)))
    }

    /// Register an already finalized error (and the chain below it)
    ///
    /// The registry owns the stored value exclusively from now on.
    pub fn reg_node(&self, node: SpError) -> Identity {
        let mut errs = self.write();
        Self::store(&mut errs, node)
    }

    fn store(errs: &mut HashMap<Identity, SpError>, node: SpError) -> Identity {
        let identity = node.identity().clone();
        match errs.entry(identity.clone()) {
            Entry::Vacant(slot) => {
                slot.insert(node);
                tracing::debug!(
                    component = module_path!(),
                    op = "registry.reg",
                    identity = identity.as_str(),
                    "registered error"
                );
            }
            Entry::Occupied(_) => {
                tracing::debug!(
                    component = module_path!(),
                    op = "registry.reg",
                    identity = identity.as_str(),
                    "error already registered, keeping the stored entry"
                );
            }
        }
        identity
    }

    /// Look up a registered error
    ///
    /// The result is a copy: changing it never affects the stored entry.
    ///
    /// # Errors
    ///
    /// Returns a "No such error" diagnostic carrying the requested identity
    /// in its `hash` metadata when nothing is registered under it.
    #[track_caller]
    pub fn get(&self, identity: &Identity) -> Result<SpError, SpError> {
        let errs = self.read();
        match errs.get(identity) {
            Some(err) => Ok(err.clone()),
            None => {
                tracing::warn!(
                    component = module_path!(),
                    op = "registry.get",
                    identity = identity.as_str(),
                    "lookup miss"
                );
                Err(diagnostics::lookup_miss(identity, source::caller()))
            }
        }
    }

    /// Copy of a canonical error
    #[track_caller]
    pub fn canonical(&self, kind: Canonical) -> SpError {
        let caller = source::caller();
        self.read()
            .get(&kind.identity())
            .cloned()
            .unwrap_or_else(|| kind.build(caller))
    }

    /// Whether an error is registered under the identity
    pub fn contains(&self, identity: &Identity) -> bool {
        self.read().contains_key(identity)
    }

    /// Number of registered errors, canonical ones included
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Always false for a registry built by `new`
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }
}

impl Default for Registry {
    #[track_caller]
    fn default() -> Self {
        Self::new()
    }
}
