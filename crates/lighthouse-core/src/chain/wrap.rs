use crate::errors::WrapError;
use crate::model::{source, Sample, SpError};

impl SpError {
    /// Push a new outer layer built from `sample` in front of this chain
    ///
    /// If the sample has the same identity as this head, the head is returned
    /// unchanged, so retries that re-wrap identical content do not pile up
    /// duplicate layers.
    ///
    /// # Errors
    ///
    /// Returns `WrapError` if the sample fails finalization; the chain is
    /// recoverable through `WrapError::into_head`.
    ///
    /// # Example
    ///
    /// ```
    /// use lighthouse_core::{Level, Sample, SpError};
    ///
    /// let db = SpError::new(
    ///     Sample::new("Failed to connect to database")
    ///         .with_message("en", "Db connection failed")
    ///         .with_level(Level::DeepDebug),
    /// )
    /// .unwrap();
    /// let app = db
    ///     .wrap_new(
    ///         Sample::new("Database error")
    ///             .with_message("en", "App error")
    ///             .with_level(Level::MediumDebug),
    ///     )
    ///     .unwrap();
    /// assert_eq!(app.depth(), 2);
    /// ```
    #[track_caller]
    pub fn wrap_new(self, sample: Sample) -> Result<SpError, WrapError> {
        if sample.identity() == self.identity {
            return Ok(self);
        }
        match SpError::finalize(sample, source::caller()) {
            Ok(outer) => Ok(self.attach_under(outer)),
            Err(reason) => Err(WrapError::new(self, reason)),
        }
    }

    /// Splice this chain under an already built layer
    ///
    /// Any chain `outer` was already wrapping is replaced. If `outer` has the
    /// same identity as this head, the head is returned unchanged and `outer`
    /// is dropped.
    pub fn wrap_existing(self, outer: SpError) -> SpError {
        if outer.identity == self.identity {
            return self;
        }
        self.attach_under(outer)
    }

    fn attach_under(self, mut outer: SpError) -> SpError {
        outer.remaining = self.remaining + 1;
        outer.underlying = Some(Box::new(self));
        outer
    }
}

#[cfg(test)]
mod tests {
    use crate::errors::{LighthouseError, RequiredField};
    use crate::level::Level;
    use crate::model::{Sample, SpError};

    fn layer(desc: &str, level: Level) -> Sample {
        Sample::new(desc)
            .with_message("en", format!("{} message", desc))
            .with_level(level)
    }

    #[test]
    fn test_wrap_new_links_layers() {
        let root = SpError::new(layer("root", Level::DeepDebug)).unwrap();
        let root_id = root.identity().clone();

        let outer = root.wrap_new(layer("outer", Level::LowUser)).unwrap();

        assert_eq!(outer.description(), "outer");
        assert_eq!(outer.remaining(), 1);
        assert_eq!(outer.underlying().unwrap().identity(), &root_id);
    }

    #[test]
    fn test_wrap_new_same_identity_is_noop() {
        let root = SpError::new(layer("root", Level::DeepDebug)).unwrap();
        let timestamp = root.timestamp();

        // Level differs, identity does not
        let same = root.wrap_new(layer("root", Level::HighUser)).unwrap();

        assert_eq!(same.depth(), 1);
        assert_eq!(same.level(), Level::DeepDebug);
        assert_eq!(same.timestamp(), timestamp);
    }

    #[test]
    fn test_wrap_new_failure_returns_head() {
        let root = SpError::new(layer("root", Level::DeepDebug)).unwrap();

        let err = root.wrap_new(Sample::new("no message")).unwrap_err();

        assert_eq!(
            err.reason(),
            &LighthouseError::EmptyError {
                field: RequiredField::EnglishMessage
            }
        );
        assert_eq!(err.into_head().description(), "root");
    }

    #[test]
    fn test_wrap_existing() {
        let root = SpError::new(layer("root", Level::DeepDebug)).unwrap();
        let mid = SpError::new(layer("mid", Level::MediumDebug)).unwrap();
        let top = SpError::new(layer("top", Level::LowUser)).unwrap();

        let chain = root.wrap_existing(mid).wrap_existing(top);

        assert_eq!(chain.remaining(), 2);
        let descs: Vec<_> = chain.layers().map(|l| l.description()).collect();
        assert_eq!(descs, ["top", "mid", "root"]);
    }

    #[test]
    fn test_wrap_existing_same_identity_is_noop() {
        let root = SpError::new(layer("root", Level::DeepDebug)).unwrap();
        let twin = SpError::new(layer("root", Level::LowUser)).unwrap();

        let chain = root.wrap_existing(twin);

        assert_eq!(chain.depth(), 1);
        assert_eq!(chain.level(), Level::DeepDebug);
    }
}
