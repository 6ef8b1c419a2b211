use crate::model::SpError;

impl SpError {
    /// Take the outermost layer off this chain
    ///
    /// Returns the current layer detached from the layers below it, then turns
    /// `self` into the next older layer. A layer with nothing linked below but
    /// a positive `remaining` count stands for layers that were collapsed into
    /// it: popping it yields it again and counts down. Returns `None` once the
    /// chain is exhausted (`remaining == -1`).
    ///
    /// Popping needs `&mut self`, so it only ever consumes a chain the caller
    /// owns; use `layers()` to look at a chain without consuming it.
    pub fn pop(&mut self) -> Option<SpError> {
        if self.remaining == -1 {
            return None;
        }

        let result = self.detached();
        match self.underlying.take() {
            Some(next) => *self = *next,
            None => self.remaining -= 1,
        }
        Some(result)
    }
}
