use crate::level::Level;
use crate::model::SpError;
use crate::registry::{Canonical, Registry};

/// Where a spin stopped
#[derive(Debug, Clone, Copy)]
enum Stop<'a> {
    /// Budget is `Noop`: disclose nothing
    Nothing,
    /// The outermost layer already exceeds the budget
    OverBudget,
    /// Deepest layer within budget, with how many layers were walked to reach it
    Layer(&'a SpError, usize),
}

impl SpError {
    fn spin_stop(&self, budget: Level) -> Stop<'_> {
        if budget == Level::Noop {
            return Stop::Nothing;
        }
        if self.level > budget {
            return Stop::OverBudget;
        }

        let mut walked = 0;
        let mut last = self;
        for layer in self.layers().take_while(|layer| layer.level <= budget) {
            last = layer;
            walked += 1;
        }
        Stop::Layer(last, walked)
    }

    /// Unwind the chain to the most detailed layer `budget` permits
    ///
    /// Layers are expected to grow more sensitive towards the root cause, so
    /// raising the budget reveals progressively deeper layers of the same
    /// error. The walk stops at the first layer above the budget.
    ///
    /// - `Level::Noop` discloses nothing and returns `None`.
    /// - If even the outermost layer is above the budget, the registry's
    ///   canonical Internal error is returned instead of anything from the chain.
    /// - Otherwise the selected layer is returned detached from the layers
    ///   below it.
    ///
    /// The chain itself is never modified.
    pub fn spin(&self, budget: Level, registry: &Registry) -> Option<SpError> {
        match self.spin_stop(budget) {
            Stop::Nothing => None,
            Stop::OverBudget => Some(registry.canonical(Canonical::Internal)),
            Stop::Layer(layer, _) => Some(layer.detached()),
        }
    }

    /// Sources of the layers a spin at `budget` walks through, outer first
    ///
    /// The last entry is the source of the layer `spin` selects. Empty when
    /// the spin discloses nothing from this chain.
    pub fn spin_trace(&self, budget: Level) -> Vec<String> {
        match self.spin_stop(budget) {
            Stop::Nothing | Stop::OverBudget => Vec::new(),
            Stop::Layer(_, walked) => self
                .layers()
                .take(walked)
                .map(|layer| layer.source.clone())
                .collect(),
        }
    }
}
