//! Identity and cause comparison over error chains.

use std::error::Error;

use crate::model::SpError;

/// Walk `err` and its `source()` chain looking for an `E`
fn find_in_chain<'a, E>(err: &'a (dyn Error + 'static)) -> impl Iterator<Item = &'a E>
where
    E: Error + 'static,
{
    std::iter::successors(Some(err), |&e| e.source()).filter_map(|e| e.downcast_ref::<E>())
}

impl SpError {
    /// Same error by content: identical description, hint and English message
    pub fn is(&self, other: &SpError) -> bool {
        self.identity == other.identity
    }

    /// Whether any layer of the chain was caused by `target`
    ///
    /// Each layer's cause and the errors reachable through its `source()`
    /// chain are compared against `target` by type and value. Stops at the
    /// first match.
    pub fn deep_is<E>(&self, target: &E) -> bool
    where
        E: Error + PartialEq + 'static,
    {
        self.layers().any(|layer| {
            layer
                .cause
                .as_deref()
                .is_some_and(|cause| find_in_chain::<E>(cause).any(|found| found == target))
        })
    }

    /// First cause of type `E` in the chain, outer layers first
    pub fn find_cause<E>(&self) -> Option<&E>
    where
        E: Error + 'static,
    {
        self.layers().find_map(|layer| {
            layer
                .cause
                .as_deref()
                .and_then(|cause| find_in_chain::<E>(cause).next())
        })
    }
}
