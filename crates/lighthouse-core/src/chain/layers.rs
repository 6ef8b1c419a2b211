use std::iter::FusedIterator;

use crate::model::SpError;

/// Borrowing iterator over the layers of a chain, outer-to-inner
///
/// Created by [`SpError::layers`]. Each linked layer is yielded once; the
/// chain is not modified, so the walk can be restarted at will.
#[derive(Debug, Clone)]
pub struct Layers<'a> {
    next: Option<&'a SpError>,
}

impl<'a> Iterator for Layers<'a> {
    type Item = &'a SpError;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.underlying();
        Some(current)
    }
}

impl FusedIterator for Layers<'_> {}

impl SpError {
    /// Iterate this layer and every layer below it, outer-to-inner
    pub fn layers(&self) -> Layers<'_> {
        Layers { next: Some(self) }
    }

    /// Innermost linked layer (the root cause)
    pub fn root(&self) -> &SpError {
        self.layers().last().unwrap_or(self)
    }
}

#[cfg(test)]
mod tests {
    use crate::level::Level;
    use crate::model::{Sample, SpError};

    fn layer(desc: &str) -> Sample {
        Sample::new(desc)
            .with_message("en", desc)
            .with_level(Level::Error)
    }

    #[test]
    fn test_layers_is_restartable() {
        let chain = SpError::new(layer("a"))
            .unwrap()
            .wrap_new(layer("b"))
            .unwrap()
            .wrap_new(layer("c"))
            .unwrap();

        let first: Vec<_> = chain.layers().map(SpError::description).collect();
        let second: Vec<_> = chain.layers().map(SpError::description).collect();

        assert_eq!(first, ["c", "b", "a"]);
        assert_eq!(first, second);
        assert_eq!(chain.root().description(), "a");
    }

    #[test]
    fn test_single_layer() {
        let err = SpError::new(layer("only")).unwrap();
        assert_eq!(err.layers().count(), 1);
        assert_eq!(err.root().description(), "only");
    }
}
